//! Contrast audit for role/on-color pairs (WCAG 2.x relative luminance).

use gpui::Rgba;

use crate::constants::MIN_CONTRAST_RATIO;
use crate::theme::registry::Theme;
use crate::theme::role::ColorRole;

/// A role whose on-color does not stand out enough against its base
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastWarning {
    pub role: ColorRole,
    pub ratio: f32,
}

fn linearize(channel: f32) -> f32 {
    if channel <= 0.04045 {
        channel / 12.92
    } else {
        ((channel + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance in `0.0..=1.0`. Alpha is ignored.
pub fn relative_luminance(color: Rgba) -> f32 {
    0.2126 * linearize(color.r) + 0.7152 * linearize(color.g) + 0.0722 * linearize(color.b)
}

/// Contrast ratio between two colors, from `1.0` (identical) to `21.0`.
pub fn contrast_ratio(a: Rgba, b: Rgba) -> f32 {
    let (la, lb) = (relative_luminance(a), relative_luminance(b));
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

impl Theme {
    /// Roles whose on-color falls below [`MIN_CONTRAST_RATIO`]
    pub fn contrast_warnings(&self) -> Vec<ContrastWarning> {
        ColorRole::ALL
            .into_iter()
            .filter_map(|role| {
                let pair = self.colors.pair(role);
                let ratio = contrast_ratio(pair.color, pair.on_color);
                (ratio < MIN_CONTRAST_RATIO).then_some(ContrastWarning { role, ratio })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::registry::ColorPair;
    use gpui::rgb;

    #[test]
    fn test_contrast_extremes() {
        let black = rgb(0x000000);
        let white = rgb(0xffffff);

        assert!((contrast_ratio(black, white) - 21.0).abs() < 0.01);
        assert!((contrast_ratio(white, black) - 21.0).abs() < 0.01);
        assert!((contrast_ratio(white, white) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_red_on_yellow_is_flagged() {
        let ratio = contrast_ratio(rgb(0xff0000), rgb(0xffff00));
        assert!(ratio > 3.5 && ratio < 4.0, "ratio was {ratio}");

        let mut theme = Theme::default();
        theme.colors.tertiary = ColorPair::new(rgb(0xff0000), rgb(0xffff00));

        let warnings = theme.contrast_warnings();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].role, ColorRole::Tertiary);
    }

    #[test]
    fn test_default_theme_passes_audit() {
        let warnings = Theme::default().contrast_warnings();
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
    }
}
