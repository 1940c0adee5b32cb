//! Reusable style patterns
//!
//! Containers, circles and the small per-platform touch and status bar
//! settings that screens share.

use crate::colors::{colors, Color};
use crate::shadows::{shadow_for, Elevation};
use crate::spacing::SCALE;
use crate::style::{Alignment, FlexDirection, JustifyContent, Overflow, TextStyle, ViewStyle};
use serde::{Deserialize, Serialize};
use style_platform::{Platform, PlatformVariants};

// =============================================================================
// Containers
// =============================================================================

/// Common container styles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerStyles {
    /// Full screen
    pub screen: ViewStyle,
    /// Full screen with padding
    pub screen_padded: ViewStyle,
    /// Full screen clear of the notch / status bar
    pub safe_screen: ViewStyle,
    /// Raised card
    pub card: ViewStyle,
    /// Content centered on both axes
    pub center: ViewStyle,
    /// Horizontal row, items centered
    pub row: ViewStyle,
    /// Horizontal row, items pushed to the edges
    pub row_space_between: ViewStyle,
}

impl ContainerStyles {
    /// Build the container styles for `platform`
    pub fn for_platform(platform: Platform) -> Self {
        let screen = ViewStyle::new()
            .with_flex(1.0)
            .with_background(colors::BACKGROUND);

        let safe_area = PlatformVariants::new(ViewStyle::new())
            .ios(ViewStyle::new().with_padding_top(SCALE.lg))
            .android(ViewStyle::new().with_padding_top(SCALE.sm))
            .resolve(platform);

        let card = ViewStyle::new()
            .with_background(colors::BACKGROUND)
            .with_border_radius(8.0)
            .with_padding(SCALE.lg)
            .merge(&shadow_for(Elevation::Small, platform).to_view_style());

        Self {
            screen_padded: screen.clone().with_padding(SCALE.lg),
            safe_screen: screen.merge(&safe_area),
            screen,
            card,
            center: center(),
            row: ViewStyle::new()
                .with_flex_direction(FlexDirection::Row)
                .with_align_items(Alignment::Center),
            row_space_between: ViewStyle::new()
                .with_flex_direction(FlexDirection::Row)
                .with_justify_content(JustifyContent::SpaceBetween)
                .with_align_items(Alignment::Center),
        }
    }
}

fn center() -> ViewStyle {
    ViewStyle::new()
        .with_justify_content(JustifyContent::Center)
        .with_align_items(Alignment::Center)
}

/// A centered circle of diameter `size`
pub fn create_circle(size: f32, background: impl Into<Color>) -> ViewStyle {
    ViewStyle::new()
        .with_size(size, size)
        .with_border_radius(size / 2.0)
        .with_background(background)
        .merge(&center())
}

/// Text that is clipped instead of wrapping past its box
pub fn truncated_text() -> TextStyle {
    TextStyle {
        overflow: Some(Overflow::Hidden),
        ..Default::default()
    }
}

// =============================================================================
// Status Bar
// =============================================================================

/// Status bar content style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusBarStyle {
    /// Light icons, for dark backgrounds
    LightContent,
    /// Dark icons, for light backgrounds
    DarkContent,
}

/// Status bar styles for light and dark backgrounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusBarStyles {
    /// Over dark backgrounds
    pub light: StatusBarStyle,
    /// Over light backgrounds
    pub dark: StatusBarStyle,
}

impl StatusBarStyles {
    /// Resolve the status bar styles for `platform`
    pub fn for_platform(platform: Platform) -> Self {
        Self {
            light: PlatformVariants::new(StatusBarStyle::LightContent).resolve(platform),
            dark: PlatformVariants::new(StatusBarStyle::DarkContent).resolve(platform),
        }
    }
}

// =============================================================================
// Touch Feedback
// =============================================================================

/// Highlight applied while a touchable is pressed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TouchFeedback {
    /// Color shown under the pressed element
    pub underlay_color: Color,
    /// Opacity of the pressed element
    pub active_opacity: f32,
}

impl TouchFeedback {
    /// Touch feedback for `platform`
    pub fn for_platform(platform: Platform) -> Self {
        Self {
            underlay_color: colors::BACKGROUND_LIGHT.to_string(),
            active_opacity: PlatformVariants::new(0.7).android(0.9).resolve(platform),
        }
    }
}

/// Android ripple configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RippleConfig {
    /// Ripple color
    pub color: Color,
    /// Whether the ripple may exceed the element bounds
    pub borderless: bool,
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self {
            color: "rgba(0, 0, 0, 0.1)".to_string(),
            borderless: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_screen_padding() {
        let ios = ContainerStyles::for_platform(Platform::Ios);
        assert_eq!(ios.safe_screen.padding_top, Some(16.0));
        assert_eq!(ios.safe_screen.flex, Some(1.0));

        let android = ContainerStyles::for_platform(Platform::Android);
        assert_eq!(android.safe_screen.padding_top, Some(8.0));
        assert_eq!(
            android.safe_screen.background_color.as_deref(),
            Some(colors::BACKGROUND)
        );
    }

    #[test]
    fn test_screen_variants() {
        let styles = ContainerStyles::for_platform(Platform::Ios);
        assert_eq!(styles.screen.padding, None);
        assert_eq!(styles.screen_padded.padding, Some(16.0));
        assert_eq!(styles.screen_padded.flex, Some(1.0));
    }

    #[test]
    fn test_card_carries_small_shadow() {
        let ios = ContainerStyles::for_platform(Platform::Ios);
        assert_eq!(ios.card.border_radius, Some(8.0));
        assert_eq!(ios.card.shadow_opacity, Some(0.1));
        assert_eq!(ios.card.elevation, None);

        let android = ContainerStyles::for_platform(Platform::Android);
        assert_eq!(android.card.elevation, Some(2));
        assert_eq!(android.card.padding, Some(16.0));
    }

    #[test]
    fn test_rows() {
        let styles = ContainerStyles::for_platform(Platform::Android);
        assert_eq!(styles.row.flex_direction, Some(FlexDirection::Row));
        assert_eq!(styles.row.justify_content, None);
        assert_eq!(
            styles.row_space_between.justify_content,
            Some(JustifyContent::SpaceBetween)
        );
    }

    #[test]
    fn test_create_circle() {
        let circle = create_circle(64.0, colors::PRIMARY_DARK);
        assert_eq!(circle.width, Some(64.0));
        assert_eq!(circle.height, Some(64.0));
        assert_eq!(circle.border_radius, Some(32.0));
        assert_eq!(circle.align_items, Some(Alignment::Center));
        assert_eq!(circle.background_color.as_deref(), Some(colors::PRIMARY_DARK));
    }

    #[test]
    fn test_truncated_text() {
        assert_eq!(truncated_text().overflow, Some(Overflow::Hidden));
    }

    #[test]
    fn test_status_bar_styles() {
        for platform in Platform::ALL {
            let styles = StatusBarStyles::for_platform(platform);
            assert_eq!(styles.light, StatusBarStyle::LightContent);
            assert_eq!(styles.dark, StatusBarStyle::DarkContent);
        }
        let json = serde_json::to_string(&StatusBarStyle::DarkContent).unwrap();
        assert_eq!(json, "\"dark-content\"");
    }

    #[test]
    fn test_touch_feedback() {
        assert_eq!(TouchFeedback::for_platform(Platform::Ios).active_opacity, 0.7);
        assert_eq!(TouchFeedback::for_platform(Platform::Android).active_opacity, 0.9);
        assert_eq!(
            TouchFeedback::for_platform(Platform::Ios).underlay_color,
            colors::BACKGROUND_LIGHT
        );
    }

    #[test]
    fn test_ripple_default() {
        let ripple = RippleConfig::default();
        assert_eq!(ripple.color, "rgba(0, 0, 0, 0.1)");
        assert!(!ripple.borderless);
    }
}
