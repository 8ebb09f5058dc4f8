//! Colors - Paper Palette

use gpui::{rgb, rgba, Rgba};

/// Named color palette - All colors are accessed via associated functions
pub struct PaperColors;

impl PaperColors {
    // Brand colors
    /// Primary brand color - Deep purple
    pub fn primary() -> Rgba { rgb(0x6200ee) }
    /// Secondary brand color - Pale lavender
    pub fn secondary() -> Rgba { rgb(0xe8def8) }

    // Accent colors
    /// Red accent (tertiary buttons)
    pub fn red() -> Rgba { rgb(0xd32f2f) }

    // Neutral colors
    /// Pure white
    pub fn white() -> Rgba { rgb(0xffffff) }
    /// Gallery background
    pub fn background() -> Rgba { rgb(0xffffff) }
    /// Fully transparent
    pub fn transparent() -> Rgba { rgba(0x00000000) }
}
