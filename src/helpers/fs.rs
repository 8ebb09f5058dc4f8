//! File System Utilities
//!
//! Configuration directory management.

use crate::constants::CONFIG_FILE_NAME;
use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;

/// Get or create the application's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/paper-buttons/` or `$XDG_CONFIG_HOME/paper-buttons/`
/// - **macOS**: `~/Library/Application Support/dev.paper-buttons.paper-buttons/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\paper-buttons\paper-buttons\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    let Some(project_dirs) = ProjectDirs::from("dev", "paper-buttons", "paper-buttons") else {
        return Err(Error::Invalid {
            message: "Could not determine project directories".to_string(),
        });
    };

    let config_dir = project_dirs.config_dir();

    if !config_dir.exists() {
        fs::create_dir_all(config_dir)?;
    }

    Ok(config_dir.to_path_buf())
}

/// Path of the application config file, created empty on first use
pub fn get_config_path() -> Result<PathBuf> {
    let path = get_or_create_config_dir()?.join(CONFIG_FILE_NAME);
    if !path.exists() {
        fs::write(&path, "")?;
    }
    Ok(path)
}
