//! Shadow and elevation fragments
//!
//! iOS draws shadows from explicit color/opacity/radius/offset parameters,
//! Android from a single elevation value. [`shadow_for`] hands out the
//! precomputed fragment for a level on a given platform.

use crate::colors::{colors, Color};
use crate::style::{ShadowOffset, ViewStyle};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use style_platform::Platform;

/// Shadow color Android adds next to the elevation for more even rendering
pub const ANDROID_SHADOW_COLOR: &str = "rgba(0, 0, 0, 0.24)";

/// Elevation levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Elevation {
    /// Flat, no shadow
    #[default]
    None,
    /// Slightly raised
    Small,
    /// Cards
    Medium,
    /// Floating surfaces
    Large,
    /// Dialogs
    Xl,
}

impl Elevation {
    /// Every level, flattest first
    pub const ALL: [Elevation; 5] = [
        Elevation::None,
        Elevation::Small,
        Elevation::Medium,
        Elevation::Large,
        Elevation::Xl,
    ];

    /// Shadow parameters for this level, `None` for a flat surface
    pub fn params(&self) -> Option<ShadowParams> {
        let (elevation, opacity, radius, offset_y) = match self {
            Elevation::None => return None,
            Elevation::Small => (2, 0.1, 2.0, 1.0),
            Elevation::Medium => (4, 0.15, 3.0, 2.0),
            Elevation::Large => (8, 0.2, 6.0, 4.0),
            Elevation::Xl => (12, 0.25, 12.0, 8.0),
        };
        Some(ShadowParams {
            elevation,
            opacity,
            radius,
            offset: ShadowOffset::new(0.0, offset_y),
            ..Default::default()
        })
    }
}

/// Inputs to [`create_shadow`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShadowParams {
    /// Android elevation
    pub elevation: u32,
    /// iOS shadow color
    pub color: Color,
    /// iOS shadow opacity
    pub opacity: f32,
    /// iOS blur radius
    pub radius: f32,
    /// iOS shadow offset
    pub offset: ShadowOffset,
}

impl Default for ShadowParams {
    fn default() -> Self {
        Self {
            elevation: 2,
            color: colors::SHADOW.to_string(),
            opacity: 0.15,
            radius: 3.0,
            offset: ShadowOffset::new(0.0, 2.0),
        }
    }
}

/// A platform-specific shadow descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ShadowFragment {
    /// No shadow
    None,
    /// iOS shadow parameters
    Ios {
        /// Shadow color
        color: Color,
        /// Opacity (0.0 - 1.0)
        opacity: f32,
        /// Blur radius
        radius: f32,
        /// Offset
        offset: ShadowOffset,
    },
    /// Android elevation
    Android {
        /// Elevation in dp
        elevation: u32,
        /// Override shadow color
        color: Color,
    },
}

impl ShadowFragment {
    /// The fragment as a view style, ready to be merged into a container
    pub fn to_view_style(&self) -> ViewStyle {
        match self {
            ShadowFragment::None => ViewStyle::default(),
            ShadowFragment::Ios {
                color,
                opacity,
                radius,
                offset,
            } => ViewStyle {
                shadow_color: Some(color.clone()),
                shadow_opacity: Some(*opacity),
                shadow_radius: Some(*radius),
                shadow_offset: Some(*offset),
                ..Default::default()
            },
            ShadowFragment::Android { elevation, color } => ViewStyle {
                elevation: Some(*elevation),
                shadow_color: Some(color.clone()),
                ..Default::default()
            },
        }
    }
}

impl From<&ShadowFragment> for ViewStyle {
    fn from(fragment: &ShadowFragment) -> Self {
        fragment.to_view_style()
    }
}

/// Build a shadow fragment from explicit parameters
pub fn create_shadow(params: &ShadowParams, platform: Platform) -> ShadowFragment {
    match platform {
        Platform::Ios => ShadowFragment::Ios {
            color: params.color.clone(),
            opacity: params.opacity,
            radius: params.radius,
            offset: params.offset,
        },
        Platform::Android => ShadowFragment::Android {
            elevation: params.elevation,
            color: ANDROID_SHADOW_COLOR.to_string(),
        },
    }
}

static NO_SHADOW: ShadowFragment = ShadowFragment::None;

static SHADOW_TABLE: Lazy<HashMap<(Elevation, Platform), ShadowFragment>> = Lazy::new(|| {
    tracing::debug!("Building shadow table");
    let mut table = HashMap::new();
    for level in Elevation::ALL {
        for platform in Platform::ALL {
            let fragment = match level.params() {
                Some(params) => create_shadow(&params, platform),
                None => ShadowFragment::None,
            };
            table.insert((level, platform), fragment);
        }
    }
    table
});

/// The precomputed shadow fragment for `level` on `platform`
pub fn shadow_for(level: Elevation, platform: Platform) -> &'static ShadowFragment {
    // The table is filled for every (level, platform) pair.
    SHADOW_TABLE.get(&(level, platform)).unwrap_or(&NO_SHADOW)
}

/// Shadow presets for one platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShadowStyles {
    pub none: ViewStyle,
    pub small: ViewStyle,
    pub medium: ViewStyle,
    pub large: ViewStyle,
    pub xl: ViewStyle,
}

impl ShadowStyles {
    /// Collect the presets for `platform` from the shadow table
    pub fn for_platform(platform: Platform) -> Self {
        let style = |level| shadow_for(level, platform).to_view_style();
        Self {
            none: style(Elevation::None),
            small: style(Elevation::Small),
            medium: style(Elevation::Medium),
            large: style(Elevation::Large),
            xl: style(Elevation::Xl),
        }
    }

    /// Preset for `level`
    pub fn get(&self, level: Elevation) -> &ViewStyle {
        match level {
            Elevation::None => &self.none,
            Elevation::Small => &self.small,
            Elevation::Medium => &self.medium,
            Elevation::Large => &self.large,
            Elevation::Xl => &self.xl,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_medium_on_ios() {
        match shadow_for(Elevation::Medium, Platform::Ios) {
            ShadowFragment::Ios {
                color,
                opacity,
                radius,
                offset,
            } => {
                assert_eq!(color, colors::SHADOW);
                assert_eq!(*opacity, 0.15);
                assert_eq!(*radius, 3.0);
                assert_eq!(*offset, ShadowOffset::new(0.0, 2.0));
            }
            other => panic!("expected iOS fragment, got {:?}", other),
        }
    }

    #[test]
    fn test_medium_on_android() {
        assert_eq!(
            shadow_for(Elevation::Medium, Platform::Android),
            &ShadowFragment::Android {
                elevation: 4,
                color: ANDROID_SHADOW_COLOR.to_string(),
            }
        );
    }

    #[test]
    fn test_none_is_empty_everywhere() {
        for platform in Platform::ALL {
            let fragment = shadow_for(Elevation::None, platform);
            assert_eq!(fragment, &ShadowFragment::None);
            assert!(fragment.to_view_style().is_empty());
        }
    }

    #[test]
    fn test_elevation_levels_increase() {
        let elevations: Vec<u32> = Elevation::ALL
            .iter()
            .filter_map(|level| level.params())
            .map(|params| params.elevation)
            .collect();
        assert_eq!(elevations, vec![2, 4, 8, 12]);
    }

    #[test]
    fn test_create_shadow_defaults() {
        let params = ShadowParams::default();
        let ios = create_shadow(&params, Platform::Ios).to_view_style();
        assert_eq!(ios.shadow_opacity, Some(0.15));
        assert_eq!(ios.shadow_radius, Some(3.0));
        assert_eq!(ios.elevation, None);

        let android = create_shadow(&params, Platform::Android).to_view_style();
        assert_eq!(android.elevation, Some(2));
        assert_eq!(android.shadow_color.as_deref(), Some(ANDROID_SHADOW_COLOR));
        assert_eq!(android.shadow_opacity, None);
    }

    #[test]
    fn test_shadow_styles() {
        let ios = ShadowStyles::for_platform(Platform::Ios);
        assert_eq!(ios.get(Elevation::Xl).shadow_radius, Some(12.0));
        assert_eq!(ios.small.shadow_offset, Some(ShadowOffset::new(0.0, 1.0)));

        let android = ShadowStyles::for_platform(Platform::Android);
        assert_eq!(android.large.elevation, Some(8));
        assert!(android.none.is_empty());
    }

    #[test]
    fn test_fragment_serialization() {
        let json = serde_json::to_value(shadow_for(Elevation::Small, Platform::Android)).unwrap();
        assert_eq!(json["kind"], "android");
        assert_eq!(json["elevation"], 2);
    }
}
