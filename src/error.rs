//! Error types for paper-buttons
//!
//! Centralized error handling using snafu for ergonomic error definitions.

use snafu::Snafu;

/// Main error type for the crate
#[derive(Debug, Snafu)]
pub enum Error {
    /// Color role name that the theme does not declare
    #[snafu(display("Unknown color role: {role:?}"))]
    UnknownRole { role: String },

    /// Size tier name that the theme does not declare
    #[snafu(display("Unknown size tier: {tier:?}"))]
    UnknownTier { tier: String },

    /// Button mode name that is not supported
    #[snafu(display("Unknown button mode: {mode:?}"))]
    UnknownMode { mode: String },

    /// A declared role lacks its base or on-color entry
    #[snafu(display("Theme is missing {channel} for role {role}"))]
    MissingColor { role: String, channel: String },

    /// A size tier has no spacing/typography record
    #[snafu(display("Theme is missing size tier {tier}"))]
    MissingTier { tier: String },

    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// IO error (file operations)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// JSON serialization/deserialization error
    #[snafu(display("JSON error: {source}"))]
    Json { source: serde_json::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },

    /// TOML serialization error
    #[snafu(display("TOML serialize error: {source}"))]
    TomlSe { source: toml::ser::Error },
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Error::Json { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

impl From<toml::ser::Error> for Error {
    fn from(source: toml::ser::Error) -> Self {
        Error::TomlSe { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
