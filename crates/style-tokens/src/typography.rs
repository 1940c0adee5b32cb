//! Typography system
//!
//! Font sizes are identical on both platforms. Font families, line heights
//! and letter spacing are adjusted for Android, which renders text slightly
//! tighter and smaller than iOS.

use crate::colors::colors;
use crate::style::{TextAlign, TextStyle};
use serde::{Deserialize, Serialize};
use style_platform::{Platform, PlatformVariants};

// =============================================================================
// Font Families
// =============================================================================

/// Font family names per platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontFamilies {
    /// Regular text
    pub base: String,
    /// Medium weight
    pub medium: String,
    /// Bold weight
    pub bold: String,
    /// Light weight
    pub light: String,
}

impl FontFamilies {
    /// Resolve the families for `platform`
    pub fn for_platform(platform: Platform) -> Self {
        let family = |android: &str| {
            PlatformVariants::new("System")
                .ios("System")
                .android(android)
                .resolve(platform)
                .to_string()
        };
        Self {
            base: family("Roboto"),
            medium: family("Roboto-Medium"),
            bold: family("Roboto-Bold"),
            light: family("Roboto-Light"),
        }
    }
}

// =============================================================================
// Font Size Scale
// =============================================================================

/// Font size scale in points
pub mod font_size {
    /// Extra small (12)
    pub const XS: f32 = 12.0;
    /// Small (14)
    pub const SM: f32 = 14.0;
    /// Medium (16)
    pub const MD: f32 = 16.0;
    /// Large (18)
    pub const LG: f32 = 18.0;
    /// Extra large (20)
    pub const XL: f32 = 20.0;
    /// 2x large (24)
    pub const XXL: f32 = 24.0;
    /// 3x large (32)
    pub const XXXL: f32 = 32.0;
    /// 4x large (40)
    pub const XXXXL: f32 = 40.0;
}

/// Font size scale as a serializable table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontSizes {
    pub xs: f32,
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub xl: f32,
    pub xxl: f32,
    pub xxxl: f32,
    pub xxxxl: f32,
}

impl FontSizes {
    /// The scale, identical on both platforms
    pub const SCALE: FontSizes = FontSizes {
        xs: font_size::XS,
        sm: font_size::SM,
        md: font_size::MD,
        lg: font_size::LG,
        xl: font_size::XL,
        xxl: font_size::XXL,
        xxxl: font_size::XXXL,
        xxxxl: font_size::XXXXL,
    };
}

// =============================================================================
// Font Weights
// =============================================================================

/// Font weights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FontWeight {
    /// 100
    Thin,
    /// 200
    ExtraLight,
    /// 300
    Light,
    /// 400
    Regular,
    /// 500
    Medium,
    /// 600
    Semibold,
    /// 700
    Bold,
    /// 800
    ExtraBold,
    /// 900
    Black,
}

impl FontWeight {
    /// Every weight, lightest first
    pub const ALL: [FontWeight; 9] = [
        FontWeight::Thin,
        FontWeight::ExtraLight,
        FontWeight::Light,
        FontWeight::Regular,
        FontWeight::Medium,
        FontWeight::Semibold,
        FontWeight::Bold,
        FontWeight::ExtraBold,
        FontWeight::Black,
    ];

    /// Numeric weight
    pub fn value(&self) -> u16 {
        match self {
            FontWeight::Thin => 100,
            FontWeight::ExtraLight => 200,
            FontWeight::Light => 300,
            FontWeight::Regular => 400,
            FontWeight::Medium => 500,
            FontWeight::Semibold => 600,
            FontWeight::Bold => 700,
            FontWeight::ExtraBold => 800,
            FontWeight::Black => 900,
        }
    }

    /// Weight in the string form the renderer accepts
    pub fn as_str(&self) -> &'static str {
        match self {
            FontWeight::Thin => "100",
            FontWeight::ExtraLight => "200",
            FontWeight::Light => "300",
            FontWeight::Regular => "400",
            FontWeight::Medium => "500",
            FontWeight::Semibold => "600",
            FontWeight::Bold => "700",
            FontWeight::ExtraBold => "800",
            FontWeight::Black => "900",
        }
    }
}

/// Font weights by name, in the string form the renderer accepts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontWeights {
    pub thin: String,
    pub extra_light: String,
    pub light: String,
    pub regular: String,
    pub medium: String,
    pub semibold: String,
    pub bold: String,
    pub extra_bold: String,
    pub black: String,
}

impl Default for FontWeights {
    fn default() -> Self {
        let weight = |w: FontWeight| w.as_str().to_string();
        Self {
            thin: weight(FontWeight::Thin),
            extra_light: weight(FontWeight::ExtraLight),
            light: weight(FontWeight::Light),
            regular: weight(FontWeight::Regular),
            medium: weight(FontWeight::Medium),
            semibold: weight(FontWeight::Semibold),
            bold: weight(FontWeight::Bold),
            extra_bold: weight(FontWeight::ExtraBold),
            black: weight(FontWeight::Black),
        }
    }
}

// =============================================================================
// Line Heights & Letter Spacing
// =============================================================================

/// Line height multiplier applied on Android
pub const ANDROID_LINE_HEIGHT_FACTOR: f32 = 1.2;

/// Letter spacing multiplier applied on Android
pub const ANDROID_LETTER_SPACING_FACTOR: f32 = 1.5;

/// Line heights in points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineHeights {
    pub xs: f32,
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub xl: f32,
    pub xxl: f32,
    pub xxxl: f32,
    pub xxxxl: f32,
}

impl LineHeights {
    /// Base line heights before any platform factor
    pub const BASE: LineHeights = LineHeights {
        xs: 16.0,
        sm: 20.0,
        md: 24.0,
        lg: 28.0,
        xl: 32.0,
        xxl: 36.0,
        xxxl: 48.0,
        xxxxl: 56.0,
    };

    /// Line heights for `platform`, rounded to whole points
    pub fn for_platform(platform: Platform) -> Self {
        let factor = PlatformVariants::new(1.0)
            .android(ANDROID_LINE_HEIGHT_FACTOR)
            .resolve(platform);
        let scaled = |base: f32| (base * factor).round();
        let base = Self::BASE;
        Self {
            xs: scaled(base.xs),
            sm: scaled(base.sm),
            md: scaled(base.md),
            lg: scaled(base.lg),
            xl: scaled(base.xl),
            xxl: scaled(base.xxl),
            xxxl: scaled(base.xxxl),
            xxxxl: scaled(base.xxxxl),
        }
    }
}

/// Letter spacing (tracking) in points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LetterSpacing {
    pub tighter: f32,
    pub tight: f32,
    pub normal: f32,
    pub wide: f32,
    pub wider: f32,
    pub widest: f32,
}

impl LetterSpacing {
    /// Letter spacing for `platform`
    pub fn for_platform(platform: Platform) -> Self {
        let factor = PlatformVariants::new(1.0)
            .android(ANDROID_LETTER_SPACING_FACTOR)
            .resolve(platform);
        Self {
            tighter: -0.8 * factor,
            tight: -0.4 * factor,
            normal: 0.0,
            wide: 0.5 * factor,
            wider: factor,
            widest: 2.0 * factor,
        }
    }
}

// =============================================================================
// Text Styles
// =============================================================================

/// Preset text styles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyles {
    pub h1: TextStyle,
    pub h2: TextStyle,
    pub h3: TextStyle,
    pub h4: TextStyle,
    pub h5: TextStyle,
    pub body_lg: TextStyle,
    pub body: TextStyle,
    pub body_sm: TextStyle,
    pub caption: TextStyle,
    pub label: TextStyle,
    pub button: TextStyle,
}

/// Build a preset; `android_adjust` bumps the size by one point on Android
fn preset(
    platform: Platform,
    font_size: f32,
    weight: FontWeight,
    line_height: f32,
    color: &str,
    android_adjust: bool,
) -> TextStyle {
    let bump = if android_adjust { 1.0 } else { 0.0 };
    TextStyle {
        font_size: Some(PlatformVariants::new(font_size).android(font_size + bump).resolve(platform)),
        font_weight: Some(weight.as_str().to_string()),
        line_height: Some(line_height),
        color: Some(color.to_string()),
        ..Default::default()
    }
}

impl TextStyles {
    /// Build the presets for `platform`
    pub fn for_platform(platform: Platform) -> Self {
        let lh = LineHeights::for_platform(platform);
        let ls = LetterSpacing::for_platform(platform);

        let heading = |size, line_height, android_adjust| {
            preset(platform, size, FontWeight::Bold, line_height, colors::TEXT, android_adjust)
        };
        let body = |size, line_height, color| {
            preset(platform, size, FontWeight::Regular, line_height, color, false)
        };

        Self {
            h1: TextStyle {
                letter_spacing: Some(ls.tight),
                ..heading(font_size::XXXXL, lh.xxxxl, true)
            },
            h2: TextStyle {
                letter_spacing: Some(ls.tight),
                ..heading(font_size::XXXL, lh.xxxl, true)
            },
            h3: heading(font_size::XXL, lh.xxl, false),
            h4: heading(font_size::XL, lh.xl, false),
            h5: heading(font_size::LG, lh.lg, false),
            body_lg: body(font_size::LG, lh.lg, colors::TEXT),
            body: body(font_size::MD, lh.md, colors::TEXT),
            body_sm: body(font_size::SM, lh.sm, colors::TEXT),
            caption: body(font_size::SM, lh.sm, colors::TEXT_LIGHT),
            label: preset(platform, font_size::SM, FontWeight::Medium, lh.sm, colors::TEXT, false),
            button: preset(
                platform,
                font_size::MD,
                FontWeight::Semibold,
                lh.md,
                colors::TEXT_INVERSE,
                false,
            )
            .with_text_align(TextAlign::Center),
        }
    }

    /// Look up a preset by name
    pub fn get(&self, name: &str) -> Option<&TextStyle> {
        match name {
            "h1" => Some(&self.h1),
            "h2" => Some(&self.h2),
            "h3" => Some(&self.h3),
            "h4" => Some(&self.h4),
            "h5" => Some(&self.h5),
            "bodyLg" => Some(&self.body_lg),
            "body" => Some(&self.body),
            "bodySm" => Some(&self.body_sm),
            "caption" => Some(&self.caption),
            "label" => Some(&self.label),
            "button" => Some(&self.button),
            _ => None,
        }
    }
}

/// All typography tokens for one platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    /// Font families
    pub font_family: FontFamilies,
    /// Font sizes
    pub font_size: FontSizes,
    /// Font weights
    pub font_weight: FontWeights,
    /// Line heights
    pub line_height: LineHeights,
    /// Letter spacing
    pub letter_spacing: LetterSpacing,
    /// Preset text styles
    pub text_style: TextStyles,
}

impl Typography {
    /// Build the typography tokens for `platform`
    pub fn for_platform(platform: Platform) -> Self {
        Self {
            font_family: FontFamilies::for_platform(platform),
            font_size: FontSizes::SCALE,
            font_weight: FontWeights::default(),
            line_height: LineHeights::for_platform(platform),
            letter_spacing: LetterSpacing::for_platform(platform),
            text_style: TextStyles::for_platform(platform),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_families() {
        let ios = FontFamilies::for_platform(Platform::Ios);
        assert_eq!(ios.base, "System");
        assert_eq!(ios.bold, "System");

        let android = FontFamilies::for_platform(Platform::Android);
        assert_eq!(android.base, "Roboto");
        assert_eq!(android.medium, "Roboto-Medium");
        assert_eq!(android.bold, "Roboto-Bold");
        assert_eq!(android.light, "Roboto-Light");
    }

    #[test]
    fn test_font_size_scale() {
        assert!(font_size::XS < font_size::SM);
        assert!(font_size::SM < font_size::MD);
        assert!(font_size::MD < font_size::LG);
        assert!(font_size::LG < font_size::XL);
        assert!(font_size::XL < font_size::XXL);
        assert!(font_size::XXL < font_size::XXXL);
        assert!(font_size::XXXL < font_size::XXXXL);
    }

    #[test]
    fn test_font_weights() {
        for pair in FontWeight::ALL.windows(2) {
            assert!(pair[0].value() < pair[1].value());
        }
        for weight in FontWeight::ALL {
            assert_eq!(weight.as_str(), weight.value().to_string());
        }
    }

    #[test]
    fn test_size_and_weight_tables() {
        let ios = Typography::for_platform(Platform::Ios);
        let android = Typography::for_platform(Platform::Android);
        assert_eq!(ios.font_size, android.font_size);
        assert_eq!(ios.font_size.md, font_size::MD);
        assert_eq!(ios.font_size.xxxxl, 40.0);

        let json = serde_json::to_value(&android.font_weight).unwrap();
        assert_eq!(json["thin"], "100");
        assert_eq!(json["extraLight"], "200");
        assert_eq!(json["semibold"], "600");
        assert_eq!(json["black"], "900");
    }

    #[test]
    fn test_line_heights_ios_are_base() {
        assert_eq!(LineHeights::for_platform(Platform::Ios), LineHeights::BASE);
    }

    #[test]
    fn test_line_heights_android_scaled() {
        let android = LineHeights::for_platform(Platform::Android);
        let base = LineHeights::BASE;
        assert_eq!(android.xs, (base.xs * 1.2).round());
        assert_eq!(android.md, (base.md * 1.2).round());
        assert_eq!(android.xxxxl, (base.xxxxl * 1.2).round());
        assert_eq!(android.xs, 19.0);
        assert_eq!(android.sm, 24.0);
        assert_eq!(android.lg, 34.0);
        assert_eq!(android.xxxxl, 67.0);
    }

    #[test]
    fn test_letter_spacing() {
        let ios = LetterSpacing::for_platform(Platform::Ios);
        assert_eq!(ios.tight, -0.4);
        assert_eq!(ios.widest, 2.0);

        let android = LetterSpacing::for_platform(Platform::Android);
        assert_eq!(android.normal, 0.0);
        assert_eq!(android.wider, 1.5);
        assert_eq!(android.widest, 3.0);
        assert!((android.tight - -0.6).abs() < 1e-6);
    }

    #[test]
    fn test_headings_android_adjust() {
        let ios = TextStyles::for_platform(Platform::Ios);
        let android = TextStyles::for_platform(Platform::Android);

        assert_eq!(ios.h1.font_size, Some(40.0));
        assert_eq!(android.h1.font_size, Some(41.0));
        assert_eq!(ios.h2.font_size, Some(32.0));
        assert_eq!(android.h2.font_size, Some(33.0));
        // h3 has no adjustment
        assert_eq!(android.h3.font_size, ios.h3.font_size);
    }

    #[test]
    fn test_text_style_presets() {
        let styles = TextStyles::for_platform(Platform::Ios);

        assert_eq!(styles.h1.font_weight.as_deref(), Some("700"));
        assert_eq!(styles.h1.line_height, Some(56.0));
        assert_eq!(styles.h1.letter_spacing, Some(-0.4));
        assert_eq!(styles.h3.letter_spacing, None);

        assert_eq!(styles.body.font_size, Some(16.0));
        assert_eq!(styles.body.line_height, Some(24.0));
        assert_eq!(styles.caption.color.as_deref(), Some(colors::TEXT_LIGHT));
        assert_eq!(styles.label.font_weight.as_deref(), Some("500"));

        assert_eq!(styles.button.font_weight.as_deref(), Some("600"));
        assert_eq!(styles.button.color.as_deref(), Some(colors::TEXT_INVERSE));
        assert_eq!(styles.button.text_align, Some(TextAlign::Center));
    }

    #[test]
    fn test_text_styles_get() {
        let styles = TextStyles::for_platform(Platform::Android);
        assert_eq!(styles.get("bodySm"), Some(&styles.body_sm));
        assert!(styles.get("h6").is_none());
    }

    #[test]
    fn test_android_body_line_height() {
        let styles = TextStyles::for_platform(Platform::Android);
        assert_eq!(styles.body.line_height, Some(29.0));
    }
}
