//! Theme Registry - Immutable Theme Configuration
//!
//! Maps semantic color roles and size tiers to concrete visual values. A
//! `Theme` is built once at start-up and shared as `Arc<Theme>`.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::theme::colors::PaperColors;
use crate::theme::role::{ColorRole, SizeTier};
use gpui::Rgba;

/// Base color of a role together with its contrasting foreground
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorPair {
    /// Background/accent color
    pub color: Rgba,
    /// Foreground drawn on top of `color`
    pub on_color: Rgba,
}

impl ColorPair {
    pub fn new(color: Rgba, on_color: Rgba) -> Self {
        Self { color, on_color }
    }
}

/// One field per declared role; a role without both channels cannot be built
#[derive(Debug, Clone, PartialEq)]
pub struct RolePalette {
    pub primary: ColorPair,
    pub secondary: ColorPair,
    pub tertiary: ColorPair,
}

impl RolePalette {
    pub fn pair(&self, role: ColorRole) -> &ColorPair {
        match role {
            ColorRole::Primary => &self.primary,
            ColorRole::Secondary => &self.secondary,
            ColorRole::Tertiary => &self.tertiary,
        }
    }
}

/// Cross-axis self alignment of a component inside its parent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Align {
    #[default]
    FlexStart,
    Center,
    FlexEnd,
    Stretch,
}

/// Spacing/typography record of a size tier (all lengths in px)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeSpec {
    pub min_width: f32,
    pub padding_vertical: f32,
    pub padding_horizontal: f32,
    pub font_size: f32,
    #[serde(default)]
    pub align: Align,
}

impl SizeSpec {
    pub const fn new(
        min_width: f32,
        padding_vertical: f32,
        padding_horizontal: f32,
        font_size: f32,
    ) -> Self {
        Self {
            min_width,
            padding_vertical,
            padding_horizontal,
            font_size,
            align: Align::FlexStart,
        }
    }
}

/// One field per declared tier
#[derive(Debug, Clone, PartialEq)]
pub struct SizePresets {
    pub small: SizeSpec,
    pub medium: SizeSpec,
    pub large: SizeSpec,
}

impl SizePresets {
    pub fn spec(&self, tier: SizeTier) -> &SizeSpec {
        match tier {
            SizeTier::Small => &self.small,
            SizeTier::Medium => &self.medium,
            SizeTier::Large => &self.large,
        }
    }
}

impl Default for SizePresets {
    fn default() -> Self {
        Self {
            small: SizeSpec::new(50.0, 0.0, 4.0, 10.0),
            medium: SizeSpec::new(80.0, 2.0, 4.0, 12.0),
            large: SizeSpec::new(100.0, 4.0, 4.0, 16.0),
        }
    }
}

/// Immutable theme shared by every component
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Display name
    pub name: String,
    /// Corner radius in px
    pub roundness: f32,
    /// Base and on-colors per role
    pub colors: RolePalette,
    /// Layout metrics per size tier
    pub sizes: SizePresets,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "Paper".to_string(),
            roundness: 2.0,
            colors: RolePalette {
                primary: ColorPair::new(PaperColors::primary(), PaperColors::white()),
                secondary: ColorPair::new(PaperColors::secondary(), PaperColors::primary()),
                tertiary: ColorPair::new(PaperColors::red(), PaperColors::white()),
            },
            sizes: SizePresets::default(),
        }
    }
}

impl Theme {
    /// Base color of `role`
    pub fn color_of(&self, role: ColorRole) -> Rgba {
        self.colors.pair(role).color
    }

    /// Contrasting foreground of `role`
    pub fn on_color_of(&self, role: ColorRole) -> Rgba {
        self.colors.pair(role).on_color
    }

    /// Layout metrics of `tier`
    pub fn size_spec_of(&self, tier: SizeTier) -> SizeSpec {
        *self.sizes.spec(tier)
    }

    /// Like [`Theme::color_of`], keyed by role name
    pub fn color_of_named(&self, role: &str) -> Result<Rgba> {
        Ok(self.color_of(role.parse()?))
    }

    /// Like [`Theme::on_color_of`], keyed by role name
    pub fn on_color_of_named(&self, role: &str) -> Result<Rgba> {
        Ok(self.on_color_of(role.parse()?))
    }

    /// Like [`Theme::size_spec_of`], keyed by tier name
    pub fn size_spec_of_named(&self, tier: &str) -> Result<SizeSpec> {
        Ok(self.size_spec_of(tier.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_default_theme_roles() {
        let theme = Theme::default();

        assert_eq!(theme.color_of(ColorRole::Primary), PaperColors::primary());
        assert_eq!(theme.on_color_of(ColorRole::Primary), PaperColors::white());
        assert_eq!(theme.color_of(ColorRole::Secondary), PaperColors::secondary());
        assert_eq!(theme.on_color_of(ColorRole::Secondary), PaperColors::primary());
        assert_eq!(theme.color_of(ColorRole::Tertiary), PaperColors::red());
        assert_eq!(theme.roundness, 2.0);
    }

    #[test]
    fn test_default_size_presets() {
        let theme = Theme::default();

        assert_eq!(theme.size_spec_of(SizeTier::Small), SizeSpec::new(50.0, 0.0, 4.0, 10.0));
        assert_eq!(theme.size_spec_of(SizeTier::Medium), SizeSpec::new(80.0, 2.0, 4.0, 12.0));
        assert_eq!(theme.size_spec_of(SizeTier::Large), SizeSpec::new(100.0, 4.0, 4.0, 16.0));

        for tier in SizeTier::ALL {
            assert_eq!(theme.size_spec_of(tier).align, Align::FlexStart);
        }
    }

    #[test]
    fn test_named_lookups() {
        let theme = Theme::default();

        assert_eq!(theme.color_of_named("primary").expect("primary"), PaperColors::primary());
        assert_eq!(theme.on_color_of_named("tertiary").expect("tertiary"), PaperColors::white());
        assert_eq!(theme.size_spec_of_named("medium").expect("medium").min_width, 80.0);

        assert!(matches!(
            theme.color_of_named("quaternary"),
            Err(Error::UnknownRole { .. })
        ));
        assert!(matches!(
            theme.size_spec_of_named("tiny"),
            Err(Error::UnknownTier { .. })
        ));
    }
}
