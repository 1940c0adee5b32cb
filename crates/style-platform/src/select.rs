//! Platform-conditional value selection

use crate::platform::Platform;
use serde::{Deserialize, Serialize};

/// A value with optional per-platform overrides and a mandatory fallback.
///
/// The only way to build one is [`PlatformVariants::new`], so a fallback is
/// always present and resolution cannot fail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformVariants<T> {
    #[serde(skip_serializing_if = "Option::is_none", default = "Option::default")]
    ios: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none", default = "Option::default")]
    android: Option<T>,
    default: T,
}

impl<T> PlatformVariants<T> {
    /// Create a variant set holding only the fallback value
    pub fn new(default: T) -> Self {
        Self {
            ios: None,
            android: None,
            default,
        }
    }

    /// Set the iOS value
    pub fn ios(mut self, value: T) -> Self {
        self.ios = Some(value);
        self
    }

    /// Set the Android value
    pub fn android(mut self, value: T) -> Self {
        self.android = Some(value);
        self
    }

    /// The iOS value, if one was given
    pub fn ios_value(&self) -> Option<&T> {
        self.ios.as_ref()
    }

    /// The Android value, if one was given
    pub fn android_value(&self) -> Option<&T> {
        self.android.as_ref()
    }

    /// The fallback value
    pub fn default_value(&self) -> &T {
        &self.default
    }

    /// Pick the value for `platform`, falling back to the default
    pub fn resolve(self, platform: Platform) -> T {
        match (platform, self.ios, self.android) {
            (Platform::Ios, Some(value), _) => value,
            (Platform::Android, _, Some(value)) => value,
            _ => self.default,
        }
    }

    /// Borrowing form of [`resolve`](Self::resolve)
    pub fn resolve_ref(&self, platform: Platform) -> &T {
        match platform {
            Platform::Ios => self.ios.as_ref().unwrap_or(&self.default),
            Platform::Android => self.android.as_ref().unwrap_or(&self.default),
        }
    }
}

/// Select the value of `variants` that belongs to `platform`
pub fn platform_select<T>(variants: PlatformVariants<T>, platform: Platform) -> T {
    variants.resolve(platform)
}
