//! Spacing tokens
//!
//! Every value is a fixed multiple of the 8pt grid unit.

use crate::style::ViewStyle;
use serde::{Deserialize, Serialize};

/// Base spacing unit in points
pub const UNIT: f32 = 8.0;

/// Spacing scale derived from a base unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacingScale {
    pub none: f32,
    pub xxs: f32,
    pub xs: f32,
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub xl: f32,
    pub xxl: f32,
    pub xxxl: f32,
    pub xxxxl: f32,
    /// Default horizontal padding for screens
    pub screen_horizontal: f32,
    /// Default vertical padding for sections
    pub section_vertical: f32,
    /// Default vertical gap between items
    pub item_vertical: f32,
    /// Default horizontal gap between inline items
    pub inline_items: f32,
}

impl SpacingScale {
    /// Build the scale for `unit`
    pub const fn from_unit(unit: f32) -> Self {
        Self {
            none: 0.0,
            xxs: unit / 4.0,
            xs: unit / 2.0,
            sm: unit,
            md: unit * 1.5,
            lg: unit * 2.0,
            xl: unit * 3.0,
            xxl: unit * 4.0,
            xxxl: unit * 6.0,
            xxxxl: unit * 8.0,
            screen_horizontal: unit * 2.0,
            section_vertical: unit * 3.0,
            item_vertical: unit,
            inline_items: unit,
        }
    }

    /// Get a spacing value by its token name
    pub fn get(&self, name: &str) -> Option<f32> {
        match name {
            "none" => Some(self.none),
            "xxs" => Some(self.xxs),
            "xs" => Some(self.xs),
            "sm" => Some(self.sm),
            "md" => Some(self.md),
            "lg" => Some(self.lg),
            "xl" => Some(self.xl),
            "xxl" => Some(self.xxl),
            "xxxl" => Some(self.xxxl),
            "xxxxl" => Some(self.xxxxl),
            "screenHorizontal" => Some(self.screen_horizontal),
            "sectionVertical" => Some(self.section_vertical),
            "itemVertical" => Some(self.item_vertical),
            "inlineItems" => Some(self.inline_items),
            _ => None,
        }
    }
}

impl Default for SpacingScale {
    fn default() -> Self {
        SCALE
    }
}

/// The spacing scale for [`UNIT`]
pub const SCALE: SpacingScale = SpacingScale::from_unit(UNIT);

/// Get a value from [`SCALE`] by name
pub fn get(name: &str) -> Option<f32> {
    SCALE.get(name)
}

// =============================================================================
// Spacing Helpers
// =============================================================================

/// Margin on all sides
pub fn margin(value: f32) -> ViewStyle {
    ViewStyle {
        margin: Some(value),
        ..Default::default()
    }
}

/// Padding on all sides
pub fn padding(value: f32) -> ViewStyle {
    ViewStyle::new().with_padding(value)
}

/// Vertical (top, bottom) and horizontal (left, right) margins
pub fn margin_symmetric(vertical: f32, horizontal: f32) -> ViewStyle {
    ViewStyle {
        margin_vertical: Some(vertical),
        margin_horizontal: Some(horizontal),
        ..Default::default()
    }
}

/// Vertical (top, bottom) and horizontal (left, right) paddings
pub fn padding_symmetric(vertical: f32, horizontal: f32) -> ViewStyle {
    ViewStyle::new()
        .with_padding_vertical(vertical)
        .with_padding_horizontal(horizontal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_values() {
        assert_eq!(SCALE.none, 0.0);
        assert_eq!(SCALE.xxs, 2.0);
        assert_eq!(SCALE.xs, 4.0);
        assert_eq!(SCALE.sm, 8.0);
        assert_eq!(SCALE.md, 12.0);
        assert_eq!(SCALE.lg, 16.0);
        assert_eq!(SCALE.xl, 24.0);
        assert_eq!(SCALE.xxl, 32.0);
        assert_eq!(SCALE.xxxl, 48.0);
        assert_eq!(SCALE.xxxxl, 64.0);
    }

    #[test]
    fn test_named_spacing() {
        assert_eq!(SCALE.screen_horizontal, 16.0);
        assert_eq!(SCALE.section_vertical, 24.0);
        assert_eq!(SCALE.item_vertical, 8.0);
        assert_eq!(SCALE.inline_items, 8.0);
    }

    #[test]
    fn test_scale_is_multiple_of_unit() {
        let scale = SpacingScale::from_unit(4.0);
        assert_eq!(scale.md, 6.0);
        assert_eq!(scale.lg, 8.0);
        assert_eq!(scale.xl, 12.0);
        assert_eq!(SpacingScale::default(), SCALE);
    }

    #[test]
    fn test_spacing_get() {
        assert_eq!(get("lg"), Some(16.0));
        assert_eq!(get("screenHorizontal"), Some(16.0));
        assert_eq!(get("huge"), None);
    }

    #[test]
    fn test_helpers() {
        assert_eq!(margin(8.0).margin, Some(8.0));
        assert_eq!(padding(4.0).padding, Some(4.0));

        let m = margin_symmetric(8.0, 16.0);
        assert_eq!(m.margin_vertical, Some(8.0));
        assert_eq!(m.margin_horizontal, Some(16.0));

        let p = padding_symmetric(4.0, 12.0);
        assert_eq!(p.padding_vertical, Some(4.0));
        assert_eq!(p.padding_horizontal, Some(12.0));
    }
}
