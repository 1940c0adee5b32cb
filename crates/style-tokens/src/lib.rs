//! Design tokens for mobile UI
//!
//! This crate provides the token tables (colors, spacing, typography), the
//! style fragments built from them, and a theme that aggregates everything
//! for one platform.
//!
//! # Design System
//!
//! - Spacing follows an 8pt grid ([`spacing::UNIT`])
//! - Colors come in two layers: a raw [`colors::palette`] and the semantic
//!   [`colors::colors`] built on it
//! - Typography, shadows and a few container presets differ between iOS and
//!   Android and are resolved through [`style_platform::PlatformVariants`]
//!
//! # Modules
//!
//! - [`colors`] - Palette and semantic colors
//! - [`spacing`] - Spacing scale and margin/padding helpers
//! - [`typography`] - Font families, sizes, weights and text presets
//! - [`style`] - View and text style fragments
//! - [`shadows`] - Per-platform shadow / elevation fragments
//! - [`helpers`] - Containers, circles, status bar and touch feedback
//! - [`theme`] - The per-platform theme aggregate
//! - [`screens`] - Two example screens
//!
//! # Example
//!
//! ```rust
//! use style_platform::Platform;
//! use style_tokens::{shadow_for, theme_for, Elevation, ShadowFragment};
//!
//! let theme = theme_for(Platform::Ios);
//! let title = &theme.typography.text_style.h1;
//! assert_eq!(title.font_size, Some(40.0));
//!
//! let shadow = shadow_for(Elevation::Medium, Platform::Android);
//! assert!(matches!(shadow, ShadowFragment::Android { elevation: 4, .. }));
//! ```

#![warn(clippy::all)]

pub mod colors;
pub mod helpers;
pub mod screens;
pub mod shadows;
pub mod spacing;
pub mod style;
pub mod theme;
pub mod typography;

// Re-export commonly used types
pub use colors::{parse_hex_color, Color, ColorError, Palette, SemanticColors};

pub use spacing::{SpacingScale, UNIT};

pub use typography::{
    font_size, FontFamilies, FontSizes, FontWeight, FontWeights, LetterSpacing, LineHeights,
    TextStyles, Typography,
};

pub use style::{
    Alignment, FlexDirection, FlexWrap, JustifyContent, Overflow, ShadowOffset, TextAlign,
    TextStyle, ViewStyle,
};

pub use shadows::{create_shadow, shadow_for, Elevation, ShadowFragment, ShadowParams, ShadowStyles};

pub use helpers::{
    create_circle, truncated_text, ContainerStyles, RippleConfig, StatusBarStyle,
    StatusBarStyles, TouchFeedback,
};

pub use theme::{theme, theme_for, Theme, ThemeError};

pub use screens::{cross_platform_screen, example_screen, Node, NodeKind};
