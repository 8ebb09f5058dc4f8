//! Theme keys - color roles, size tiers and presentation modes
//!
//! Every key the components use is a closed enum. Parsing a name that is not
//! declared here fails with the matching lookup error instead of yielding an
//! undefined style.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Semantic color name, independent of its literal value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorRole {
    #[default]
    Primary,
    Secondary,
    Tertiary,
}

impl ColorRole {
    /// All declared roles, in gallery order
    pub const ALL: [ColorRole; 3] = [ColorRole::Primary, ColorRole::Secondary, ColorRole::Tertiary];

    /// Lowercase key used in theme files and by name-based lookups
    pub fn key(self) -> &'static str {
        match self {
            ColorRole::Primary => "primary",
            ColorRole::Secondary => "secondary",
            ColorRole::Tertiary => "tertiary",
        }
    }

    /// Key of the contrasting foreground channel for this role
    pub fn on_key(self) -> &'static str {
        match self {
            ColorRole::Primary => "onPrimary",
            ColorRole::Secondary => "onSecondary",
            ColorRole::Tertiary => "onTertiary",
        }
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ColorRole {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        ColorRole::ALL
            .into_iter()
            .find(|role| role.key().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::UnknownRole {
                role: s.to_string(),
            })
    }
}

/// Named bucket mapping to concrete spacing/typography values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeTier {
    Small,
    #[default]
    Medium,
    Large,
}

impl SizeTier {
    /// All declared tiers, largest first as the gallery lays them out
    pub const ALL: [SizeTier; 3] = [SizeTier::Large, SizeTier::Medium, SizeTier::Small];

    /// Lowercase key used in theme files and by name-based lookups
    pub fn key(self) -> &'static str {
        match self {
            SizeTier::Small => "small",
            SizeTier::Medium => "medium",
            SizeTier::Large => "large",
        }
    }
}

impl fmt::Display for SizeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SizeTier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        SizeTier::ALL
            .into_iter()
            .find(|tier| tier.key().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::UnknownTier {
                tier: s.to_string(),
            })
    }
}

/// Presentation variant selecting which style channel a button uses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonMode {
    /// Label only, no container
    Text,
    /// Transparent container with a role-colored border
    Outlined,
    /// Filled container in the role color
    #[default]
    Contained,
}

impl ButtonMode {
    pub const ALL: [ButtonMode; 3] = [ButtonMode::Text, ButtonMode::Outlined, ButtonMode::Contained];

    pub fn key(self) -> &'static str {
        match self {
            ButtonMode::Text => "text",
            ButtonMode::Outlined => "outlined",
            ButtonMode::Contained => "contained",
        }
    }
}

impl fmt::Display for ButtonMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ButtonMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        ButtonMode::ALL
            .into_iter()
            .find(|mode| mode.key().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::UnknownMode {
                mode: s.to_string(),
            })
    }
}
