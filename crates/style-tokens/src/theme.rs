//! Theme aggregate
//!
//! The theme gathers every token table for one platform in a single value
//! that can be handed to the renderer or exported as JSON.
//!
//! # Usage
//!
//! ```rust
//! use style_platform::Platform;
//! use style_tokens::theme::theme_for;
//!
//! let theme = theme_for(Platform::Android);
//! assert_eq!(theme.spacing.lg, 16.0);
//! assert_eq!(theme.shadows.medium.elevation, Some(4));
//! ```

use crate::colors::{Palette, SemanticColors};
use crate::helpers::{ContainerStyles, RippleConfig, StatusBarStyles, TouchFeedback};
use crate::shadows::ShadowStyles;
use crate::spacing::{SpacingScale, SCALE, UNIT};
use crate::typography::Typography;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use style_platform::{current_platform, Platform};

/// Errors that can occur while exporting a theme
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// JSON serialization failed
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;

// =============================================================================
// Layout Tokens
// =============================================================================

/// Screen width breakpoints
pub mod breakpoints {
    /// Phones (0 and up)
    pub const PHONE: u32 = 0;
    /// Tablets (768 and up)
    pub const TABLET: u32 = 768;
    /// Desktop-class screens (1024 and up)
    pub const DESKTOP: u32 = 1024;
}

/// Z-index layers
pub mod z_index {
    /// Default layer
    pub const BASE: i32 = 0;
    /// Cards
    pub const CARD: i32 = 10;
    /// Dialogs
    pub const DIALOG: i32 = 20;
    /// Navigation bars
    pub const NAVIGATION: i32 = 30;
    /// Overlays
    pub const OVERLAY: i32 = 40;
    /// Modals
    pub const MODAL: i32 = 50;
    /// Toasts
    pub const TOAST: i32 = 60;
}

/// Border radius tokens
pub mod radius {
    /// No radius
    pub const NONE: f32 = 0.0;
    /// 2pt
    pub const XS: f32 = 2.0;
    /// 4pt
    pub const SM: f32 = 4.0;
    /// 8pt
    pub const MD: f32 = 8.0;
    /// 12pt
    pub const LG: f32 = 12.0;
    /// 16pt
    pub const XL: f32 = 16.0;
    /// Pill shape
    pub const PILL: f32 = 9999.0;
    /// Circle, relative to the element size
    pub const CIRCLE: &str = "50%";
}

/// Breakpoint table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoints {
    pub phone: u32,
    pub tablet: u32,
    pub desktop: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            phone: breakpoints::PHONE,
            tablet: breakpoints::TABLET,
            desktop: breakpoints::DESKTOP,
        }
    }
}

/// Z-index table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZIndex {
    pub base: i32,
    pub card: i32,
    pub dialog: i32,
    pub navigation: i32,
    pub overlay: i32,
    pub modal: i32,
    pub toast: i32,
}

impl Default for ZIndex {
    fn default() -> Self {
        Self {
            base: z_index::BASE,
            card: z_index::CARD,
            dialog: z_index::DIALOG,
            navigation: z_index::NAVIGATION,
            overlay: z_index::OVERLAY,
            modal: z_index::MODAL,
            toast: z_index::TOAST,
        }
    }
}

/// Border radius table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BorderRadius {
    pub none: f32,
    pub xs: f32,
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub xl: f32,
    pub pill: f32,
    pub circle: String,
}

impl Default for BorderRadius {
    fn default() -> Self {
        Self {
            none: radius::NONE,
            xs: radius::XS,
            sm: radius::SM,
            md: radius::MD,
            lg: radius::LG,
            xl: radius::XL,
            pill: radius::PILL,
            circle: radius::CIRCLE.to_string(),
        }
    }
}

// =============================================================================
// Theme
// =============================================================================

/// Every token table for one platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    /// Platform the tables were resolved for
    pub platform: Platform,
    /// Semantic colors
    pub colors: SemanticColors,
    /// Raw palette
    pub palette: Palette,
    /// Typography tokens
    pub typography: Typography,
    /// Spacing scale
    pub spacing: SpacingScale,
    /// Base spacing unit
    pub unit: f32,
    /// Screen width breakpoints
    pub breakpoints: Breakpoints,
    /// Z-index layers
    pub z_index: ZIndex,
    /// Border radii
    pub border_radius: BorderRadius,
    /// Shadow presets
    pub shadows: ShadowStyles,
    /// Container presets
    pub containers: ContainerStyles,
    /// Status bar styles
    pub status_bar: StatusBarStyles,
    /// Touch highlight
    pub touch_feedback: TouchFeedback,
    /// Android ripple
    pub ripple: RippleConfig,
}

impl Theme {
    /// Build every table for `platform`
    pub fn build(platform: Platform) -> Self {
        tracing::debug!("Building theme for {}", platform);
        Self {
            platform,
            colors: SemanticColors::default(),
            palette: Palette::default(),
            typography: Typography::for_platform(platform),
            spacing: SCALE,
            unit: UNIT,
            breakpoints: Breakpoints::default(),
            z_index: ZIndex::default(),
            border_radius: BorderRadius::default(),
            shadows: ShadowStyles::for_platform(platform),
            containers: ContainerStyles::for_platform(platform),
            status_bar: StatusBarStyles::for_platform(platform),
            touch_feedback: TouchFeedback::for_platform(platform),
            ripple: RippleConfig::default(),
        }
    }

    /// Export the theme as JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Export the theme as indented JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

static IOS_THEME: Lazy<Theme> = Lazy::new(|| Theme::build(Platform::Ios));
static ANDROID_THEME: Lazy<Theme> = Lazy::new(|| Theme::build(Platform::Android));

/// The theme for `platform`, built on first use
pub fn theme_for(platform: Platform) -> &'static Theme {
    match platform {
        Platform::Ios => &IOS_THEME,
        Platform::Android => &ANDROID_THEME,
    }
}

/// The theme for the running platform
pub fn theme() -> &'static Theme {
    theme_for(current_platform())
}
