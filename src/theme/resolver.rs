//! Style Resolver - Props to Concrete Style
//!
//! Pure functions that combine a theme lookup for `{color, size, mode}` into a
//! single style record. Nothing is cached; components resolve on every render.

use gpui::Rgba;

use crate::error::Result;
use crate::helpers::{mix, with_alpha};
use crate::theme::colors::PaperColors;
use crate::theme::registry::{SizeSpec, Theme};
use crate::theme::role::{ButtonMode, ColorRole, SizeTier};

/// Strength of the press/hover state layer
const STATE_LAYER_OPACITY: f32 = 0.12;

/// Concrete style of one component render
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedStyle {
    pub background: Rgba,
    pub foreground: Rgba,
    pub border: Option<Rgba>,
    /// Background while hovered or pressed
    pub pressed: Rgba,
    pub layout: SizeSpec,
}

/// Resolves the contained style of `color` at `size`.
pub fn resolve(theme: &Theme, color: ColorRole, size: SizeTier) -> ResolvedStyle {
    resolve_with_mode(theme, color, size, ButtonMode::Contained)
}

/// Resolves `color` at `size` through the channel selected by `mode`.
pub fn resolve_with_mode(
    theme: &Theme,
    color: ColorRole,
    size: SizeTier,
    mode: ButtonMode,
) -> ResolvedStyle {
    let base = theme.color_of(color);
    let on_base = theme.on_color_of(color);
    let layout = theme.size_spec_of(size);

    match mode {
        ButtonMode::Contained => ResolvedStyle {
            background: base,
            foreground: on_base,
            border: None,
            pressed: mix(base, on_base, STATE_LAYER_OPACITY),
            layout,
        },
        ButtonMode::Outlined => ResolvedStyle {
            background: PaperColors::transparent(),
            foreground: base,
            border: Some(base),
            pressed: with_alpha(base, STATE_LAYER_OPACITY),
            layout,
        },
        ButtonMode::Text => ResolvedStyle {
            background: PaperColors::transparent(),
            foreground: base,
            border: None,
            pressed: with_alpha(base, STATE_LAYER_OPACITY),
            layout,
        },
    }
}

/// Name-keyed variant of [`resolve_with_mode`].
///
/// Fails with `UnknownRole`, `UnknownTier` or `UnknownMode` before any lookup
/// happens, so a bad key never produces a partial style.
pub fn resolve_named(theme: &Theme, color: &str, size: &str, mode: &str) -> Result<ResolvedStyle> {
    let color: ColorRole = color.parse()?;
    let size: SizeTier = size.parse()?;
    let mode: ButtonMode = mode.parse()?;

    Ok(resolve_with_mode(theme, color, size, mode))
}
