//! Config - Application Configuration

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::error::Result;
use crate::helpers::{get_config_path, get_or_create_config_dir};
use crate::theme::Theme;

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Gallery window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Where the theme comes from
    #[serde(default)]
    pub theme: ThemeSource,
}

/// Gallery window configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Initial width in px
    pub width: f32,
    /// Initial height in px
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

impl WindowConfig {
    /// Size clamped to the minimum usable window
    pub fn clamped_size(&self) -> (f32, f32) {
        (
            self.width.max(MIN_WINDOW_WIDTH),
            self.height.max(MIN_WINDOW_HEIGHT),
        )
    }
}

/// Theme source; the built-in theme is used when no path is set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeSource {
    /// TOML or JSON theme file, relative paths are taken from the config directory
    pub path: Option<PathBuf>,
}

impl ThemeSource {
    /// Theme file location with relative paths joined onto `base`
    pub fn resolve_path(&self, base: &Path) -> Option<PathBuf> {
        // Joining an absolute path replaces the base
        self.path.as_deref().map(|path| base.join(path))
    }

    /// Build the theme this source points at
    pub fn load(&self) -> Result<Theme> {
        let base = match self.path.as_deref() {
            Some(path) if path.is_relative() => get_or_create_config_dir()?,
            _ => PathBuf::new(),
        };
        self.load_relative_to(&base)
    }

    /// Build the theme, resolving a relative path against `base`
    pub fn load_relative_to(&self, base: &Path) -> Result<Theme> {
        match self.resolve_path(base) {
            Some(path) => Theme::load(&path),
            None => {
                info!("Using built-in theme");
                Ok(Theme::default())
            }
        }
    }
}

impl AppConfig {
    /// Parse a config document; an empty document yields defaults
    pub fn from_toml_str(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(toml::from_str(value)?)
    }

    /// Load config from a file
    pub fn load_from(path: &Path) -> Result<Self> {
        info!(path = ?path, "Loading config file");
        let value = std::fs::read_to_string(path)?;

        Self::from_toml_str(&value).map_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse config file");
            e
        })
    }

    /// Load config from the platform config directory
    ///
    /// A freshly created (empty) config file is filled with the defaults.
    pub fn try_load() -> Result<Self> {
        let path = get_config_path()?;
        let config = Self::load_from(&path)?;

        if std::fs::metadata(&path)?.len() == 0 {
            save_app_config(&config)?;
            info!(path = ?path, "Wrote default config");
        }

        Ok(config)
    }
}

/// Save app config to disk
pub fn save_app_config(config: &AppConfig) -> Result<()> {
    let path = get_config_path()?;
    let value = toml::to_string(config)?;
    std::fs::write(path, value)?;
    Ok(())
}
