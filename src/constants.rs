//! UI Constants
//!
//! Centralized constants for the gallery window and theme audit.

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 480.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 720.0;
pub const MIN_WINDOW_WIDTH: f32 = 320.0;
pub const MIN_WINDOW_HEIGHT: f32 = 400.0;

/// Gallery container spacing
pub const GALLERY_PADDING: f32 = 20.0;
pub const GALLERY_GAP: f32 = 10.0;

/// Minimum on-color contrast (WCAG AA, body text)
pub const MIN_CONTRAST_RATIO: f32 = 4.5;

/// Application config file name inside the config directory
pub const CONFIG_FILE_NAME: &str = "paper-buttons.toml";
