//! Mobile Style Kit
//!
//! Design tokens and platform-aware style helpers for mobile UIs.
//!
//! This crate re-exports the two workspace crates:
//!
//! - [`platform`] - platform identity and [`PlatformVariants`] resolution
//! - [`tokens`] - colors, spacing, typography, shadows, theme and example screens
//!
//! # Example
//!
//! ```rust
//! use mobile_style_kit::{platform_select, theme_for, Platform, PlatformVariants};
//!
//! let padding = platform_select(
//!     PlatformVariants::new(0.0).ios(24.0).android(16.0),
//!     Platform::Ios,
//! );
//! assert_eq!(padding, 24.0);
//!
//! let theme = theme_for(Platform::Android);
//! assert_eq!(theme.typography.line_height.md, 29.0);
//! ```

#![warn(missing_docs)]

pub use style_platform as platform;
pub use style_tokens as tokens;

pub use style_platform::{current_platform, platform_select, Platform, PlatformConfig, PlatformVariants};
pub use style_tokens::{
    colors::{colors, palette},
    create_shadow, shadow_for, spacing, theme, theme_for, Elevation, ShadowFragment, Theme,
};
