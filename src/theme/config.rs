//! Theme files - TOML/JSON theme definitions
//!
//! A theme file must declare every color role with both channels and every
//! size tier. Anything missing or unknown is rejected when the theme is built,
//! never discovered later during a render.

use std::collections::BTreeMap;
use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;

use gpui::Rgba;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::theme::registry::{ColorPair, RolePalette, SizePresets, SizeSpec, Theme};
use crate::theme::role::{ColorRole, SizeTier};

const DEFAULT_THEME_NAME: &str = "Custom";
const DEFAULT_ROUNDNESS: f32 = 2.0;

/// Color entry of one role as written in a theme file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColorPairEntry {
    #[serde(default)]
    pub color: Option<Rgba>,
    #[serde(default)]
    pub on_color: Option<Rgba>,
}

/// Raw, unvalidated theme file contents
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeFile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub roundness: Option<f32>,
    #[serde(default)]
    pub colors: BTreeMap<String, ColorPairEntry>,
    #[serde(default)]
    pub sizes: BTreeMap<String, SizeSpec>,
}

impl ThemeFile {
    pub fn from_toml_str(value: &str) -> Result<Self> {
        Ok(toml::from_str(value)?)
    }

    pub fn from_json_str(value: &str) -> Result<Self> {
        Ok(serde_json::from_str(value)?)
    }
}

impl From<&Theme> for ThemeFile {
    fn from(theme: &Theme) -> Self {
        let colors = ColorRole::ALL
            .into_iter()
            .map(|role| {
                let pair = theme.colors.pair(role);
                let entry = ColorPairEntry {
                    color: Some(pair.color),
                    on_color: Some(pair.on_color),
                };
                (role.key().to_string(), entry)
            })
            .collect();

        let sizes = SizeTier::ALL
            .into_iter()
            .map(|tier| (tier.key().to_string(), theme.size_spec_of(tier)))
            .collect();

        Self {
            name: Some(theme.name.clone()),
            roundness: Some(theme.roundness),
            colors,
            sizes,
        }
    }
}

fn color_pair(colors: &BTreeMap<ColorRole, ColorPairEntry>, role: ColorRole) -> Result<ColorPair> {
    let entry = colors.get(&role);

    let color = entry
        .and_then(|entry| entry.color)
        .ok_or_else(|| Error::MissingColor {
            role: role.to_string(),
            channel: role.key().to_string(),
        })?;

    let on_color = entry
        .and_then(|entry| entry.on_color)
        .ok_or_else(|| Error::MissingColor {
            role: role.to_string(),
            channel: role.on_key().to_string(),
        })?;

    Ok(ColorPair::new(color, on_color))
}

fn size_spec(sizes: &BTreeMap<SizeTier, SizeSpec>, tier: SizeTier) -> Result<SizeSpec> {
    let spec = sizes.get(&tier).copied().ok_or_else(|| Error::MissingTier {
        tier: tier.to_string(),
    })?;

    let lengths = [
        ("min_width", spec.min_width),
        ("padding_vertical", spec.padding_vertical),
        ("padding_horizontal", spec.padding_horizontal),
        ("font_size", spec.font_size),
    ];
    for (field, value) in lengths {
        if !value.is_finite() || value < 0.0 {
            return Err(Error::Invalid {
                message: format!("{field} of size tier {tier} must be a non-negative number, got {value}"),
            });
        }
    }
    if spec.font_size == 0.0 {
        return Err(Error::Invalid {
            message: format!("font_size of size tier {tier} must be positive"),
        });
    }

    Ok(spec)
}

/// Parse every key of a theme table; two keys naming the same entry are rejected
fn parse_keys<K, V>(entries: BTreeMap<String, V>, kind: &str) -> Result<BTreeMap<K, V>>
where
    K: FromStr<Err = Error> + Ord + Display,
{
    let mut parsed = BTreeMap::new();
    for (key, value) in entries {
        let parsed_key = key.parse::<K>()?;
        if parsed.contains_key(&parsed_key) {
            return Err(Error::Invalid {
                message: format!("duplicate {kind} {parsed_key} (declared again as {key:?})"),
            });
        }
        parsed.insert(parsed_key, value);
    }
    Ok(parsed)
}

impl TryFrom<ThemeFile> for Theme {
    type Error = Error;

    fn try_from(file: ThemeFile) -> Result<Self> {
        let colors: BTreeMap<ColorRole, _> = parse_keys(file.colors, "color role")?;
        let sizes: BTreeMap<SizeTier, _> = parse_keys(file.sizes, "size tier")?;

        let roundness = file.roundness.unwrap_or(DEFAULT_ROUNDNESS);
        if !roundness.is_finite() || roundness < 0.0 {
            return Err(Error::Invalid {
                message: format!("roundness must be a non-negative number, got {roundness}"),
            });
        }

        Ok(Theme {
            name: file.name.unwrap_or_else(|| DEFAULT_THEME_NAME.to_string()),
            roundness,
            colors: RolePalette {
                primary: color_pair(&colors, ColorRole::Primary)?,
                secondary: color_pair(&colors, ColorRole::Secondary)?,
                tertiary: color_pair(&colors, ColorRole::Tertiary)?,
            },
            sizes: SizePresets {
                small: size_spec(&sizes, SizeTier::Small)?,
                medium: size_spec(&sizes, SizeTier::Medium)?,
                large: size_spec(&sizes, SizeTier::Large)?,
            },
        })
    }
}

impl Theme {
    /// Load and validate a theme file (`.json` as JSON, anything else as TOML)
    pub fn load(path: &Path) -> Result<Self> {
        let value = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let file = if is_json {
            ThemeFile::from_json_str(&value)?
        } else {
            ThemeFile::from_toml_str(&value)?
        };

        let theme = Theme::try_from(file)?;
        info!(name = %theme.name, path = ?path, "Loaded theme");
        theme.log_contrast_warnings();
        Ok(theme)
    }

    /// Serialize this theme in the TOML theme-file format
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(&ThemeFile::from(self))?)
    }

    fn log_contrast_warnings(&self) {
        for warning in self.contrast_warnings() {
            warn!(
                theme = %self.name,
                role = %warning.role,
                ratio = warning.ratio,
                "On-color has low contrast against its role color"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::registry::Align;
    use gpui::rgb;

    const FULL_THEME: &str = r##"
name = "Brand"
roundness = 4.0

[colors.primary]
color = "#6200ee"
on_color = "#ffffff"

[colors.secondary]
color = "#e8def8"
on_color = "#6200ee"

[colors.tertiary]
color = "#d32f2f"
on_color = "#ffffff"

[sizes.small]
min_width = 50.0
padding_vertical = 0.0
padding_horizontal = 4.0
font_size = 10.0
align = "flex-start"

[sizes.medium]
min_width = 80.0
padding_vertical = 2.0
padding_horizontal = 4.0
font_size = 12.0

[sizes.large]
min_width = 100.0
padding_vertical = 4.0
padding_horizontal = 4.0
font_size = 16.0
align = "center"
"##;

    #[test]
    fn test_full_toml_theme() {
        let file = ThemeFile::from_toml_str(FULL_THEME).expect("valid toml");
        let theme = Theme::try_from(file).expect("complete theme");

        assert_eq!(theme.name, "Brand");
        assert_eq!(theme.roundness, 4.0);
        assert_eq!(theme.color_of(ColorRole::Primary), rgb(0x6200ee));
        assert_eq!(theme.on_color_of(ColorRole::Secondary), rgb(0x6200ee));
        assert_eq!(theme.size_spec_of(SizeTier::Medium).align, Align::FlexStart);
        assert_eq!(theme.size_spec_of(SizeTier::Large).align, Align::Center);
        assert_eq!(theme.size_spec_of(SizeTier::Small).font_size, 10.0);
    }

    #[test]
    fn test_missing_on_color_is_rejected() {
        let value = FULL_THEME.replace("on_color = \"#ffffff\"\n\n[sizes", "\n[sizes");
        let file = ThemeFile::from_toml_str(&value).expect("valid toml");

        let err = Theme::try_from(file).expect_err("tertiary has no on-color");
        assert!(matches!(
            err,
            Error::MissingColor { ref role, ref channel } if role == "tertiary" && channel == "onTertiary"
        ));
    }

    #[test]
    fn test_missing_tier_is_rejected() {
        let mut file = ThemeFile::from_toml_str(FULL_THEME).expect("valid toml");
        file.sizes.remove("medium");

        let err = Theme::try_from(file).expect_err("medium tier is missing");
        assert!(matches!(err, Error::MissingTier { ref tier } if tier == "medium"));
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let mut file = ThemeFile::from_toml_str(FULL_THEME).expect("valid toml");
        file.colors.insert("quaternary".to_string(), ColorPairEntry::default());
        assert!(matches!(Theme::try_from(file), Err(Error::UnknownRole { .. })));

        let mut file = ThemeFile::from_toml_str(FULL_THEME).expect("valid toml");
        let spec = file.sizes["small"];
        file.sizes.insert("xl".to_string(), spec);
        assert!(matches!(Theme::try_from(file), Err(Error::UnknownTier { .. })));
    }

    #[test]
    fn test_negative_roundness_is_rejected() {
        let mut file = ThemeFile::from_toml_str(FULL_THEME).expect("valid toml");
        file.roundness = Some(-1.0);
        assert!(matches!(Theme::try_from(file), Err(Error::Invalid { .. })));
    }

    #[test]
    fn test_json_theme_matches_default() {
        let json = serde_json::to_string(&ThemeFile::from(&Theme::default())).expect("serializes");
        let file = ThemeFile::from_json_str(&json).expect("valid json");
        let theme = Theme::try_from(file).expect("complete theme");

        assert_eq!(theme.size_spec_of(SizeTier::Large), Theme::default().size_spec_of(SizeTier::Large));
        assert_eq!(theme.name, "Paper");
    }

    #[test]
    fn test_exported_toml_loads_back() {
        let value = Theme::default().to_toml_string().expect("serializes");
        assert!(value.contains("[colors.tertiary]"));

        let theme = Theme::try_from(ThemeFile::from_toml_str(&value).expect("valid toml"))
            .expect("complete theme");
        assert_eq!(theme.sizes, Theme::default().sizes);
        assert_eq!(theme.roundness, 2.0);
    }

    #[test]
    fn test_duplicate_role_keys_are_rejected() {
        let value = format!("{FULL_THEME}\n[colors.Primary]\ncolor = \"#00ff00\"\non_color = \"#000000\"\n");
        let file = ThemeFile::from_toml_str(&value).expect("valid toml");
        assert_eq!(file.colors.len(), 4);

        let err = Theme::try_from(file).expect_err("primary is declared twice");
        assert!(matches!(err, Error::Invalid { ref message } if message.contains("duplicate color role primary")));
    }

    #[test]
    fn test_duplicate_tier_keys_are_rejected() {
        let mut file = ThemeFile::from_toml_str(FULL_THEME).expect("valid toml");
        let spec = file.sizes["large"];
        file.sizes.insert(" LARGE".to_string(), spec);

        let err = Theme::try_from(file).expect_err("large is declared twice");
        assert!(matches!(err, Error::Invalid { ref message } if message.contains("duplicate size tier large")));
    }

    #[test]
    fn test_nan_font_size_is_rejected() {
        let value = FULL_THEME.replace("font_size = 10.0", "font_size = nan");
        let file = ThemeFile::from_toml_str(&value).expect("valid toml");
        assert!(file.sizes["small"].font_size.is_nan());

        let err = Theme::try_from(file).expect_err("font size is not a number");
        assert!(matches!(err, Error::Invalid { ref message } if message.contains("font_size")));
    }

    #[test]
    fn test_negative_lengths_are_rejected() {
        let value = FULL_THEME.replace("min_width = 80.0", "min_width = -80.0");
        let file = ThemeFile::from_toml_str(&value).expect("valid toml");
        let err = Theme::try_from(file).expect_err("min width is negative");
        assert!(matches!(err, Error::Invalid { ref message } if message.contains("min_width of size tier medium")));

        let mut file = ThemeFile::from_toml_str(FULL_THEME).expect("valid toml");
        if let Some(spec) = file.sizes.get_mut("large") {
            spec.padding_horizontal = -4.0;
        }
        assert!(matches!(Theme::try_from(file), Err(Error::Invalid { .. })));
    }

    #[test]
    fn test_zero_font_size_is_rejected() {
        let value = FULL_THEME.replace("font_size = 16.0", "font_size = 0.0");
        let file = ThemeFile::from_toml_str(&value).expect("valid toml");
        assert!(matches!(Theme::try_from(file), Err(Error::Invalid { .. })));
    }

    fn temp_theme_path(file_name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("paper-buttons-{}-{file_name}", std::process::id()))
    }

    #[test]
    fn test_load_toml_theme_file() {
        let value = FULL_THEME
            .replace("color = \"#d32f2f\"\non_color = \"#ffffff\"", "color = \"#ff0000\"\non_color = \"#ffff00\"");
        let path = temp_theme_path("brand.toml");
        std::fs::write(&path, &value).expect("write theme file");

        let loaded = Theme::load(&path);
        std::fs::remove_file(&path).expect("remove theme file");
        let theme = loaded.expect("low contrast themes still load");

        let expected = Theme::try_from(ThemeFile::from_toml_str(&value).expect("valid toml")).expect("complete theme");
        assert_eq!(theme, expected);
        assert_eq!(theme.color_of(ColorRole::Tertiary), rgb(0xff0000));
        assert_eq!(theme.on_color_of(ColorRole::Tertiary), rgb(0xffff00));
        assert_eq!(theme.contrast_warnings().len(), 1);
    }

    #[test]
    fn test_load_json_theme_file() {
        let mut source = Theme::default();
        source.name = "Json Brand".to_string();
        source.roundness = 6.0;
        let json = serde_json::to_string_pretty(&ThemeFile::from(&source)).expect("serializes");

        let path = temp_theme_path("brand.JSON");
        std::fs::write(&path, &json).expect("write theme file");

        let loaded = Theme::load(&path);
        std::fs::remove_file(&path).expect("remove theme file");
        let theme = loaded.expect("json theme");

        let expected = Theme::try_from(ThemeFile::from_json_str(&json).expect("valid json")).expect("complete theme");
        assert_eq!(theme, expected);
        assert_eq!(theme.name, "Json Brand");
        assert_eq!(theme.roundness, 6.0);
        assert_eq!(theme.sizes, source.sizes);
    }

    #[test]
    fn test_json_content_in_toml_file_is_a_toml_error() {
        let json = serde_json::to_string(&ThemeFile::from(&Theme::default())).expect("serializes");
        let path = temp_theme_path("brand.theme");
        std::fs::write(&path, &json).expect("write theme file");

        let loaded = Theme::load(&path);
        std::fs::remove_file(&path).expect("remove theme file");
        assert!(matches!(loaded, Err(Error::TomlDe { .. })));
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        let err = ThemeFile::from_toml_str("colors = 3").expect_err("colors must be a table");
        assert!(matches!(err, Error::TomlDe { .. }));
    }
}
