//! Style fragments handed to the rendering layer
//!
//! A fragment is a partial set of visual properties. Fragments are combined
//! with [`ViewStyle::merge`] / [`TextStyle::merge`], where properties set on
//! the overlay replace those of the base, the same way the renderer treats a
//! list of styles.
//!
//! Every property serializes under the camelCase name the renderer expects
//! (`backgroundColor`, `shadowOpacity`, ...) and unset properties are left
//! out entirely.

use crate::colors::Color;
use serde::{Deserialize, Serialize};

// =============================================================================
// Layout Enums
// =============================================================================

/// Main axis direction of a flex container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlexDirection {
    /// Horizontal
    Row,
    /// Vertical
    Column,
}

/// Flex line wrapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlexWrap {
    /// Single line
    #[serde(rename = "nowrap")]
    NoWrap,
    /// Wrap onto multiple lines
    Wrap,
}

/// Cross axis alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Alignment {
    /// Align to start
    FlexStart,
    /// Align to center
    Center,
    /// Align to end
    FlexEnd,
    /// Stretch to fill
    Stretch,
}

/// Main axis distribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JustifyContent {
    /// Pack at start
    FlexStart,
    /// Pack at center
    Center,
    /// Pack at end
    FlexEnd,
    /// Even gaps between items
    SpaceBetween,
    /// Even gaps around items
    SpaceAround,
}

/// Content overflow behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Overflow {
    /// Content may draw outside bounds
    Visible,
    /// Content is clipped
    Hidden,
}

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    /// Left aligned
    Left,
    /// Centered
    Center,
    /// Right aligned
    Right,
}

/// Shadow offset in points
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ShadowOffset {
    /// Horizontal offset
    pub width: f32,
    /// Vertical offset
    pub height: f32,
}

impl ShadowOffset {
    /// Create a new offset
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

// =============================================================================
// View Style
// =============================================================================

/// Visual properties of a container element
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_direction: Option<FlexDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_wrap: Option<FlexWrap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<JustifyContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_items: Option<Alignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_top: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_vertical: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_horizontal: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_vertical: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_horizontal: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overflow: Option<Overflow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_opacity: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_radius: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_offset: Option<ShadowOffset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elevation: Option<u32>,
}

impl ViewStyle {
    /// Empty fragment
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no property is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Overlay `other` on top of this style
    pub fn merge(&self, other: &ViewStyle) -> ViewStyle {
        ViewStyle {
            flex: other.flex.or(self.flex),
            flex_direction: other.flex_direction.or(self.flex_direction),
            flex_wrap: other.flex_wrap.or(self.flex_wrap),
            justify_content: other.justify_content.or(self.justify_content),
            align_items: other.align_items.or(self.align_items),
            gap: other.gap.or(self.gap),
            background_color: other
                .background_color
                .clone()
                .or_else(|| self.background_color.clone()),
            width: other.width.or(self.width),
            height: other.height.or(self.height),
            padding: other.padding.or(self.padding),
            padding_top: other.padding_top.or(self.padding_top),
            padding_vertical: other.padding_vertical.or(self.padding_vertical),
            padding_horizontal: other.padding_horizontal.or(self.padding_horizontal),
            margin: other.margin.or(self.margin),
            margin_top: other.margin_top.or(self.margin_top),
            margin_bottom: other.margin_bottom.or(self.margin_bottom),
            margin_vertical: other.margin_vertical.or(self.margin_vertical),
            margin_horizontal: other.margin_horizontal.or(self.margin_horizontal),
            border_radius: other.border_radius.or(self.border_radius),
            overflow: other.overflow.or(self.overflow),
            shadow_color: other
                .shadow_color
                .clone()
                .or_else(|| self.shadow_color.clone()),
            shadow_opacity: other.shadow_opacity.or(self.shadow_opacity),
            shadow_radius: other.shadow_radius.or(self.shadow_radius),
            shadow_offset: other.shadow_offset.or(self.shadow_offset),
            elevation: other.elevation.or(self.elevation),
        }
    }

    /// Set flex grow
    pub fn with_flex(mut self, flex: f32) -> Self {
        self.flex = Some(flex);
        self
    }

    /// Set flex direction
    pub fn with_flex_direction(mut self, direction: FlexDirection) -> Self {
        self.flex_direction = Some(direction);
        self
    }

    /// Set flex wrap
    pub fn with_flex_wrap(mut self, wrap: FlexWrap) -> Self {
        self.flex_wrap = Some(wrap);
        self
    }

    /// Set main axis distribution
    pub fn with_justify_content(mut self, justify: JustifyContent) -> Self {
        self.justify_content = Some(justify);
        self
    }

    /// Set cross axis alignment
    pub fn with_align_items(mut self, align: Alignment) -> Self {
        self.align_items = Some(align);
        self
    }

    /// Set gap between children
    pub fn with_gap(mut self, gap: f32) -> Self {
        self.gap = Some(gap);
        self
    }

    /// Set background color
    pub fn with_background(mut self, color: impl Into<Color>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    /// Set width and height
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Set width
    pub fn with_width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    /// Set uniform padding
    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = Some(padding);
        self
    }

    /// Set top padding
    pub fn with_padding_top(mut self, padding: f32) -> Self {
        self.padding_top = Some(padding);
        self
    }

    /// Set vertical padding
    pub fn with_padding_vertical(mut self, padding: f32) -> Self {
        self.padding_vertical = Some(padding);
        self
    }

    /// Set horizontal padding
    pub fn with_padding_horizontal(mut self, padding: f32) -> Self {
        self.padding_horizontal = Some(padding);
        self
    }

    /// Set top margin
    pub fn with_margin_top(mut self, margin: f32) -> Self {
        self.margin_top = Some(margin);
        self
    }

    /// Set bottom margin
    pub fn with_margin_bottom(mut self, margin: f32) -> Self {
        self.margin_bottom = Some(margin);
        self
    }

    /// Set border radius
    pub fn with_border_radius(mut self, radius: f32) -> Self {
        self.border_radius = Some(radius);
        self
    }

    /// Set overflow
    pub fn with_overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = Some(overflow);
        self
    }

    /// Set Android elevation
    pub fn with_elevation(mut self, elevation: u32) -> Self {
        self.elevation = Some(elevation);
        self
    }
}

// =============================================================================
// Text Style
// =============================================================================

/// Visual properties of a text element
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    /// Numeric weight as a string ("100" to "900")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    /// Line height in points
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overflow: Option<Overflow>,
}

impl TextStyle {
    /// Empty fragment
    pub fn new() -> Self {
        Self::default()
    }

    /// Overlay `other` on top of this style
    pub fn merge(&self, other: &TextStyle) -> TextStyle {
        TextStyle {
            font_size: other.font_size.or(self.font_size),
            font_weight: other
                .font_weight
                .clone()
                .or_else(|| self.font_weight.clone()),
            line_height: other.line_height.or(self.line_height),
            letter_spacing: other.letter_spacing.or(self.letter_spacing),
            color: other.color.clone().or_else(|| self.color.clone()),
            font_family: other
                .font_family
                .clone()
                .or_else(|| self.font_family.clone()),
            text_align: other.text_align.or(self.text_align),
            overflow: other.overflow.or(self.overflow),
        }
    }

    /// Set text color
    pub fn with_color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set alignment
    pub fn with_text_align(mut self, align: TextAlign) -> Self {
        self.text_align = Some(align);
        self
    }
}
