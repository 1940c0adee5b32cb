//! Platform identity and platform-conditional value selection
//!
//! This crate answers one question for the style tables: which of the two
//! mobile targets is the process running on, and which precomputed value
//! belongs to it.
//!
//! # Modules
//!
//! - [`platform`] - The [`Platform`] identity and its detection config
//! - [`select`] - [`PlatformVariants`] and the [`platform_select`] resolver
//!
//! # Example
//!
//! ```rust
//! use style_platform::{Platform, PlatformVariants};
//!
//! let padding = PlatformVariants::new(0.0).ios(16.0).android(8.0);
//! assert_eq!(padding.resolve(Platform::Android), 8.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod platform;
pub mod select;

pub use platform::{current_platform, Platform, PlatformConfig, PlatformError};
pub use select::{platform_select, PlatformVariants};
