//! Runtime platform identity
//!
//! The platform is read once per process and never changes afterwards.
//! An environment override is honored so hosts (and tests) can pin the
//! identity without recompiling.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Errors that can occur while reading a platform identity
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlatformError {
    /// The name does not denote a supported platform
    #[error("Unknown platform: {0}")]
    Unknown(String),
}

/// The mobile target the styling code runs under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Primary platform
    Ios,
    /// Secondary platform
    Android,
}

impl Platform {
    /// Both platforms, primary first
    pub const ALL: [Platform; 2] = [Platform::Ios, Platform::Android];

    /// Platform implied by the compilation target.
    ///
    /// Only Android targets map to [`Platform::Android`]; everything else,
    /// including desktop hosts used for tests, is treated as iOS.
    pub fn from_target() -> Self {
        if cfg!(target_os = "android") {
            Platform::Android
        } else {
            Platform::Ios
        }
    }

    /// Lowercase identifier, as used by the rendering layer
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Ios => "ios",
            Platform::Android => "android",
        }
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Ios => "iOS",
            Platform::Android => "Android",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Platform {
    type Err = PlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ios" => Ok(Platform::Ios),
            "android" => Ok(Platform::Android),
            _ => Err(PlatformError::Unknown(s.to_string())),
        }
    }
}

/// Environment variable consulted by [`PlatformConfig::default`]
pub const PLATFORM_ENV_VAR: &str = "MOBILE_STYLE_PLATFORM";

/// Configuration for platform detection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformConfig {
    /// Environment variable holding an explicit platform override
    pub env_var: String,
    /// Platform used when no valid override is present
    pub fallback: Platform,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            env_var: PLATFORM_ENV_VAR.to_string(),
            fallback: Platform::from_target(),
        }
    }
}

impl PlatformConfig {
    /// Create a config reading the given variable and falling back to `fallback`
    pub fn new(env_var: impl Into<String>, fallback: Platform) -> Self {
        Self {
            env_var: env_var.into(),
            fallback,
        }
    }

    /// Read the configured override, if one is set
    pub fn override_value(&self) -> Option<Result<Platform, PlatformError>> {
        std::env::var(&self.env_var)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(|value| value.parse())
    }

    /// Determine the platform identity.
    ///
    /// An unparseable override is logged and ignored.
    pub fn detect(&self) -> Platform {
        match self.override_value() {
            Some(Ok(platform)) => {
                tracing::info!("Platform {} selected via {}", platform, self.env_var);
                platform
            }
            Some(Err(e)) => {
                tracing::warn!(
                    "Ignoring {}: {}; using {}",
                    self.env_var,
                    e,
                    self.fallback
                );
                self.fallback
            }
            None => {
                tracing::info!("Platform {} selected from build target", self.fallback);
                self.fallback
            }
        }
    }
}

static CURRENT_PLATFORM: Lazy<Platform> = Lazy::new(|| PlatformConfig::default().detect());

/// The platform of the running process, detected on first call
pub fn current_platform() -> Platform {
    *CURRENT_PLATFORM
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_from_str() {
        assert_eq!("ios".parse::<Platform>(), Ok(Platform::Ios));
        assert_eq!("Android".parse::<Platform>(), Ok(Platform::Android));
        assert_eq!(" IOS ".parse::<Platform>(), Ok(Platform::Ios));
        assert_eq!(
            "web".parse::<Platform>(),
            Err(PlatformError::Unknown("web".to_string()))
        );
    }

    #[test]
    fn test_platform_display() {
        assert_eq!(Platform::Ios.to_string(), "ios");
        assert_eq!(Platform::Android.to_string(), "android");
        assert_eq!(Platform::Ios.label(), "iOS");
    }

    #[test]
    fn test_from_target_on_host() {
        #[cfg(not(target_os = "android"))]
        assert_eq!(Platform::from_target(), Platform::Ios);
        #[cfg(target_os = "android")]
        assert_eq!(Platform::from_target(), Platform::Android);
    }

    #[test]
    fn test_default_config() {
        let config = PlatformConfig::default();
        assert_eq!(config.env_var, PLATFORM_ENV_VAR);
        assert_eq!(config.fallback, Platform::from_target());
    }

    #[test]
    fn test_detect_without_override() {
        let config = PlatformConfig::new("STYLE_PLATFORM_TEST_UNSET", Platform::Android);
        assert!(config.override_value().is_none());
        assert_eq!(config.detect(), Platform::Android);
    }

    #[test]
    fn test_detect_with_override() {
        std::env::set_var("STYLE_PLATFORM_TEST_ANDROID", "android");
        let config = PlatformConfig::new("STYLE_PLATFORM_TEST_ANDROID", Platform::Ios);
        assert_eq!(config.detect(), Platform::Android);
    }

    #[test]
    fn test_detect_with_invalid_override() {
        std::env::set_var("STYLE_PLATFORM_TEST_INVALID", "windows-phone");
        let config = PlatformConfig::new("STYLE_PLATFORM_TEST_INVALID", Platform::Ios);
        assert!(matches!(
            config.override_value(),
            Some(Err(PlatformError::Unknown(_)))
        ));
        assert_eq!(config.detect(), Platform::Ios);
    }

    #[test]
    fn test_blank_override_is_ignored() {
        std::env::set_var("STYLE_PLATFORM_TEST_BLANK", "  ");
        let config = PlatformConfig::new("STYLE_PLATFORM_TEST_BLANK", Platform::Android);
        assert!(config.override_value().is_none());
    }

    #[test]
    fn test_current_platform_is_stable() {
        assert_eq!(current_platform(), current_platform());
    }

    #[test]
    fn test_platform_serialization() {
        let json = serde_json::to_string(&Platform::Android).unwrap();
        assert_eq!(json, "\"android\"");
        let deserialized: Platform = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Platform::Android);
    }
}
