//! Color tokens
//!
//! Two layers: [`palette`] holds the raw color values, [`colors`] gives them
//! a meaning in the UI. Screens should only ever reference the semantic
//! layer.

use serde::{Deserialize, Serialize};

/// A color as understood by the renderer: `#rrggbb`, `rgba(...)` or `transparent`
pub type Color = String;

/// Errors that can occur while parsing a color
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    /// Not a `#rrggbb` string
    #[error("Invalid hex color: {0}")]
    InvalidHex(String),
}

/// Parse a `#rrggbb` (or `#rrggbbaa`) color to RGB components
pub fn parse_hex_color(hex: &str) -> Result<(u8, u8, u8), ColorError> {
    let invalid = || ColorError::InvalidHex(hex.to_string());
    let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
    if !(digits.len() == 6 || digits.len() == 8) || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
    };
    Ok((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

// =============================================================================
// Palette
// =============================================================================

/// Raw color values
pub mod palette {
    // Primary
    /// Purple 10
    pub const PURPLE_10: &str = "#f5f3ff";
    /// Purple 50
    pub const PURPLE_50: &str = "#e9d5ff";
    /// Purple 100
    pub const PURPLE_100: &str = "#d8b4fe";
    /// Purple 300
    pub const PURPLE_300: &str = "#a855f7";
    /// Purple 500
    pub const PURPLE_500: &str = "#8b5cf6";
    /// Purple 700
    pub const PURPLE_700: &str = "#6d28d9";
    /// Purple 900
    pub const PURPLE_900: &str = "#4c1d95";

    // Grays
    /// White
    pub const WHITE: &str = "#ffffff";
    /// Gray 10
    pub const GRAY_10: &str = "#f9fafb";
    /// Gray 50
    pub const GRAY_50: &str = "#f7f8fa";
    /// Gray 100
    pub const GRAY_100: &str = "#f3f4f6";
    /// Gray 200
    pub const GRAY_200: &str = "#e5e7eb";
    /// Gray 300
    pub const GRAY_300: &str = "#d1d5db";
    /// Gray 400
    pub const GRAY_400: &str = "#9ca3af";
    /// Gray 500
    pub const GRAY_500: &str = "#6b7280";
    /// Gray 700
    pub const GRAY_700: &str = "#374151";
    /// Gray 800
    pub const GRAY_800: &str = "#1f2937";
    /// Gray 900
    pub const GRAY_900: &str = "#111827";
    /// Black
    pub const BLACK: &str = "#000000";

    // Supporting
    /// Red 100
    pub const RED_100: &str = "#fee2e2";
    /// Red 500
    pub const RED_500: &str = "#ef4444";
    /// Red 700
    pub const RED_700: &str = "#b91c1c";
    /// Green 100
    pub const GREEN_100: &str = "#dcfce7";
    /// Green 500
    pub const GREEN_500: &str = "#22c55e";
    /// Green 700
    pub const GREEN_700: &str = "#15803d";
    /// Blue 100
    pub const BLUE_100: &str = "#dbeafe";
    /// Blue 500
    pub const BLUE_500: &str = "#3b82f6";
    /// Blue 700
    pub const BLUE_700: &str = "#1d4ed8";
    /// Yellow 100
    pub const YELLOW_100: &str = "#fef9c3";
    /// Yellow 500
    pub const YELLOW_500: &str = "#eab308";
    /// Yellow 700
    pub const YELLOW_700: &str = "#a16207";

    /// Fully transparent
    pub const TRANSPARENT: &str = "transparent";

    /// Every hex palette entry with its name
    pub const ALL_HEX: &[(&str, &str)] = &[
        ("purple10", PURPLE_10),
        ("purple50", PURPLE_50),
        ("purple100", PURPLE_100),
        ("purple300", PURPLE_300),
        ("purple500", PURPLE_500),
        ("purple700", PURPLE_700),
        ("purple900", PURPLE_900),
        ("white", WHITE),
        ("gray10", GRAY_10),
        ("gray50", GRAY_50),
        ("gray100", GRAY_100),
        ("gray200", GRAY_200),
        ("gray300", GRAY_300),
        ("gray400", GRAY_400),
        ("gray500", GRAY_500),
        ("gray700", GRAY_700),
        ("gray800", GRAY_800),
        ("gray900", GRAY_900),
        ("black", BLACK),
        ("red100", RED_100),
        ("red500", RED_500),
        ("red700", RED_700),
        ("green100", GREEN_100),
        ("green500", GREEN_500),
        ("green700", GREEN_700),
        ("blue100", BLUE_100),
        ("blue500", BLUE_500),
        ("blue700", BLUE_700),
        ("yellow100", YELLOW_100),
        ("yellow500", YELLOW_500),
        ("yellow700", YELLOW_700),
    ];
}

/// Raw palette as a serializable table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub purple_10: Color,
    pub purple_50: Color,
    pub purple_100: Color,
    pub purple_300: Color,
    pub purple_500: Color,
    pub purple_700: Color,
    pub purple_900: Color,
    pub white: Color,
    pub gray_10: Color,
    pub gray_50: Color,
    pub gray_100: Color,
    pub gray_200: Color,
    pub gray_300: Color,
    pub gray_400: Color,
    pub gray_500: Color,
    pub gray_700: Color,
    pub gray_800: Color,
    pub gray_900: Color,
    pub black: Color,
    pub red_100: Color,
    pub red_500: Color,
    pub red_700: Color,
    pub green_100: Color,
    pub green_500: Color,
    pub green_700: Color,
    pub blue_100: Color,
    pub blue_500: Color,
    pub blue_700: Color,
    pub yellow_100: Color,
    pub yellow_500: Color,
    pub yellow_700: Color,
    pub transparent: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            purple_10: palette::PURPLE_10.to_string(),
            purple_50: palette::PURPLE_50.to_string(),
            purple_100: palette::PURPLE_100.to_string(),
            purple_300: palette::PURPLE_300.to_string(),
            purple_500: palette::PURPLE_500.to_string(),
            purple_700: palette::PURPLE_700.to_string(),
            purple_900: palette::PURPLE_900.to_string(),
            white: palette::WHITE.to_string(),
            gray_10: palette::GRAY_10.to_string(),
            gray_50: palette::GRAY_50.to_string(),
            gray_100: palette::GRAY_100.to_string(),
            gray_200: palette::GRAY_200.to_string(),
            gray_300: palette::GRAY_300.to_string(),
            gray_400: palette::GRAY_400.to_string(),
            gray_500: palette::GRAY_500.to_string(),
            gray_700: palette::GRAY_700.to_string(),
            gray_800: palette::GRAY_800.to_string(),
            gray_900: palette::GRAY_900.to_string(),
            black: palette::BLACK.to_string(),
            red_100: palette::RED_100.to_string(),
            red_500: palette::RED_500.to_string(),
            red_700: palette::RED_700.to_string(),
            green_100: palette::GREEN_100.to_string(),
            green_500: palette::GREEN_500.to_string(),
            green_700: palette::GREEN_700.to_string(),
            blue_100: palette::BLUE_100.to_string(),
            blue_500: palette::BLUE_500.to_string(),
            blue_700: palette::BLUE_700.to_string(),
            yellow_100: palette::YELLOW_100.to_string(),
            yellow_500: palette::YELLOW_500.to_string(),
            yellow_700: palette::YELLOW_700.to_string(),
            transparent: palette::TRANSPARENT.to_string(),
        }
    }
}

// =============================================================================
// Semantic Colors
// =============================================================================

/// Colors with a meaning in the UI
pub mod colors {
    use super::palette;

    /// Brand color
    pub const PRIMARY: &str = palette::PURPLE_500;
    /// Light brand tint
    pub const PRIMARY_LIGHT: &str = palette::PURPLE_100;
    /// Dark brand shade
    pub const PRIMARY_DARK: &str = palette::PURPLE_700;

    /// Body text
    pub const TEXT: &str = palette::GRAY_900;
    /// Secondary text
    pub const TEXT_MEDIUM: &str = palette::GRAY_700;
    /// Muted text
    pub const TEXT_LIGHT: &str = palette::GRAY_500;
    /// Text on dark or brand backgrounds
    pub const TEXT_INVERSE: &str = palette::WHITE;

    /// Screen background
    pub const BACKGROUND: &str = palette::WHITE;
    /// Subtle background
    pub const BACKGROUND_LIGHT: &str = palette::GRAY_50;
    /// Dark background
    pub const BACKGROUND_DARK: &str = palette::GRAY_900;

    /// Default border
    pub const BORDER: &str = palette::GRAY_200;
    /// Subtle border
    pub const BORDER_LIGHT: &str = palette::GRAY_100;
    /// Strong border
    pub const BORDER_DARK: &str = palette::GRAY_400;

    /// Success
    pub const SUCCESS: &str = palette::GREEN_500;
    /// Success tint
    pub const SUCCESS_LIGHT: &str = palette::GREEN_100;
    /// Danger
    pub const DANGER: &str = palette::RED_500;
    /// Danger tint
    pub const DANGER_LIGHT: &str = palette::RED_100;
    /// Warning
    pub const WARNING: &str = palette::YELLOW_500;
    /// Warning tint
    pub const WARNING_LIGHT: &str = palette::YELLOW_100;
    /// Info
    pub const INFO: &str = palette::BLUE_500;
    /// Info tint
    pub const INFO_LIGHT: &str = palette::BLUE_100;

    /// Disabled controls
    pub const DISABLED: &str = palette::GRAY_300;
    /// Shadow color
    pub const SHADOW: &str = palette::BLACK;
    /// Modal scrim
    pub const OVERLAY: &str = "rgba(0, 0, 0, 0.5)";
}

/// Semantic colors as a serializable table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticColors {
    pub primary: Color,
    pub primary_light: Color,
    pub primary_dark: Color,
    pub text: Color,
    pub text_medium: Color,
    pub text_light: Color,
    pub text_inverse: Color,
    pub background: Color,
    pub background_light: Color,
    pub background_dark: Color,
    pub border: Color,
    pub border_light: Color,
    pub border_dark: Color,
    pub success: Color,
    pub success_light: Color,
    pub danger: Color,
    pub danger_light: Color,
    pub warning: Color,
    pub warning_light: Color,
    pub info: Color,
    pub info_light: Color,
    pub disabled: Color,
    pub shadow: Color,
    pub overlay: Color,
}

impl Default for SemanticColors {
    fn default() -> Self {
        Self {
            primary: colors::PRIMARY.to_string(),
            primary_light: colors::PRIMARY_LIGHT.to_string(),
            primary_dark: colors::PRIMARY_DARK.to_string(),
            text: colors::TEXT.to_string(),
            text_medium: colors::TEXT_MEDIUM.to_string(),
            text_light: colors::TEXT_LIGHT.to_string(),
            text_inverse: colors::TEXT_INVERSE.to_string(),
            background: colors::BACKGROUND.to_string(),
            background_light: colors::BACKGROUND_LIGHT.to_string(),
            background_dark: colors::BACKGROUND_DARK.to_string(),
            border: colors::BORDER.to_string(),
            border_light: colors::BORDER_LIGHT.to_string(),
            border_dark: colors::BORDER_DARK.to_string(),
            success: colors::SUCCESS.to_string(),
            success_light: colors::SUCCESS_LIGHT.to_string(),
            danger: colors::DANGER.to_string(),
            danger_light: colors::DANGER_LIGHT.to_string(),
            warning: colors::WARNING.to_string(),
            warning_light: colors::WARNING_LIGHT.to_string(),
            info: colors::INFO.to_string(),
            info_light: colors::INFO_LIGHT.to_string(),
            disabled: colors::DISABLED.to_string(),
            shadow: colors::SHADOW.to_string(),
            overlay: colors::OVERLAY.to_string(),
        }
    }
}

impl SemanticColors {
    /// Look up a color by its camelCase token name
    pub fn get(&self, name: &str) -> Option<&str> {
        let color = match name {
            "primary" => &self.primary,
            "primaryLight" => &self.primary_light,
            "primaryDark" => &self.primary_dark,
            "text" => &self.text,
            "textMedium" => &self.text_medium,
            "textLight" => &self.text_light,
            "textInverse" => &self.text_inverse,
            "background" => &self.background,
            "backgroundLight" => &self.background_light,
            "backgroundDark" => &self.background_dark,
            "border" => &self.border,
            "borderLight" => &self.border_light,
            "borderDark" => &self.border_dark,
            "success" => &self.success,
            "successLight" => &self.success_light,
            "danger" => &self.danger,
            "dangerLight" => &self.danger_light,
            "warning" => &self.warning,
            "warningLight" => &self.warning_light,
            "info" => &self.info,
            "infoLight" => &self.info_light,
            "disabled" => &self.disabled,
            "shadow" => &self.shadow,
            "overlay" => &self.overlay,
            _ => return None,
        };
        Some(color)
    }

    /// Brand and status swatches in display order
    pub fn swatches(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("primary", self.primary.as_str()),
            ("primaryLight", self.primary_light.as_str()),
            ("primaryDark", self.primary_dark.as_str()),
            ("success", self.success.as_str()),
            ("danger", self.danger.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#ffffff"), Ok((255, 255, 255)));
        assert_eq!(parse_hex_color("#8b5cf6"), Ok((0x8b, 0x5c, 0xf6)));
        assert_eq!(parse_hex_color("#00000080"), Ok((0, 0, 0)));
    }

    #[test]
    fn test_parse_hex_color_rejects_malformed() {
        assert!(parse_hex_color("ffffff").is_err());
        assert!(parse_hex_color("#fff").is_err());
        assert!(parse_hex_color("#gggggg").is_err());
        assert!(parse_hex_color("#+fffff").is_err());
        assert_eq!(
            parse_hex_color("transparent"),
            Err(ColorError::InvalidHex("transparent".to_string()))
        );
    }

    #[test]
    fn test_all_palette_colors_are_valid_hex() {
        for (name, value) in palette::ALL_HEX {
            assert!(parse_hex_color(value).is_ok(), "{} = {} is not valid hex", name, value);
        }
    }

    #[test]
    fn test_semantic_colors_reference_palette() {
        assert_eq!(colors::PRIMARY, palette::PURPLE_500);
        assert_eq!(colors::TEXT, palette::GRAY_900);
        assert_eq!(colors::TEXT_INVERSE, palette::WHITE);
        assert_eq!(colors::SHADOW, palette::BLACK);
    }

    #[test]
    fn test_semantic_lookup() {
        let semantic = SemanticColors::default();
        assert_eq!(semantic.get("primary"), Some(colors::PRIMARY));
        assert_eq!(semantic.get("dangerLight"), Some(colors::DANGER_LIGHT));
        assert_eq!(semantic.get("overlay"), Some("rgba(0, 0, 0, 0.5)"));
        assert_eq!(semantic.get("missing"), None);
    }

    #[test]
    fn test_palette_table_matches_constants() {
        let table = Palette::default();
        let json = serde_json::to_value(&table).unwrap();
        for (name, value) in palette::ALL_HEX {
            assert_eq!(json[*name], *value, "palette entry {}", name);
        }
        assert_eq!(json["transparent"], "transparent");
        assert_eq!(table.purple_500, colors::PRIMARY);
    }

    #[test]
    fn test_swatches() {
        let semantic = SemanticColors::default();
        let names: Vec<_> = semantic.swatches().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, ["primary", "primaryLight", "primaryDark", "success", "danger"]);
    }

    #[test]
    fn test_semantic_colors_serialization() {
        let semantic = SemanticColors::default();
        let json = serde_json::to_value(&semantic).unwrap();
        assert_eq!(json["primaryLight"], colors::PRIMARY_LIGHT);
        let deserialized: SemanticColors = serde_json::from_value(json).unwrap();
        assert_eq!(deserialized, semantic);
    }
}
