//! Example screens
//!
//! Two screens built purely from theme tokens, described as element trees
//! the renderer can consume. They double as living documentation of how the
//! tables are meant to be combined.

use crate::colors::{colors, Color};
use crate::helpers::{create_circle, RippleConfig, StatusBarStyle};
use crate::shadows::Elevation;
use crate::style::{Alignment, FlexWrap, JustifyContent, TextStyle, ViewStyle};
use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use style_platform::{Platform, PlatformVariants};

/// Element kinds understood by the renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum NodeKind {
    /// Plain container
    View,
    /// Scrolling container
    ScrollView,
    /// Pressable container
    Touchable {
        /// Opacity while pressed (iOS)
        #[serde(skip_serializing_if = "Option::is_none")]
        active_opacity: Option<f32>,
        /// Ripple effect (Android)
        #[serde(skip_serializing_if = "Option::is_none")]
        ripple: Option<RippleConfig>,
    },
    /// Text run
    Text {
        /// Content
        content: String,
    },
    /// System status bar
    StatusBar {
        /// Icon style
        bar_style: StatusBarStyle,
        /// Bar background
        background_color: Color,
        /// Whether content draws under the bar
        translucent: bool,
    },
}

/// A styled element and its children
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Element kind
    #[serde(flatten)]
    pub kind: NodeKind,
    /// Container style
    #[serde(skip_serializing_if = "ViewStyle::is_empty", default)]
    pub style: ViewStyle,
    /// Text style, for text nodes
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub text_style: Option<TextStyle>,
    /// Child elements
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub children: Vec<Node>,
}

impl Node {
    /// A container
    pub fn view(style: ViewStyle) -> Self {
        Self {
            kind: NodeKind::View,
            style,
            text_style: None,
            children: Vec::new(),
        }
    }

    /// A text run
    pub fn text(content: impl Into<String>, style: TextStyle) -> Self {
        Self {
            kind: NodeKind::Text {
                content: content.into(),
            },
            style: ViewStyle::default(),
            text_style: Some(style),
            children: Vec::new(),
        }
    }

    /// Replace the container style
    pub fn with_style(mut self, style: ViewStyle) -> Self {
        self.style = style;
        self
    }

    /// Add a child
    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Add several children
    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Depth-first search for the first text node with `content`
    pub fn find_text(&self, content: &str) -> Option<&Node> {
        if matches!(&self.kind, NodeKind::Text { content: c } if c == content) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find_text(content))
    }

    /// Number of nodes in this subtree
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Node::count).sum::<usize>()
    }
}

fn margin_bottom(value: f32) -> ViewStyle {
    ViewStyle::new().with_margin_bottom(value)
}

/// A section heading followed by a card holding `body`
fn section(theme: &Theme, heading: &str, card: ViewStyle, body: Vec<Node>) -> Vec<Node> {
    let sp = &theme.spacing;
    vec![
        Node::text(heading, theme.typography.text_style.h5.clone())
            .with_style(margin_bottom(sp.md)),
        Node::view(card).children(body),
    ]
}

/// Basic usage: heading, card, color swatches, button and circle badge
pub fn example_screen(theme: &Theme) -> Node {
    let sp = &theme.spacing;
    let text = &theme.typography.text_style;
    let containers = &theme.containers;

    let card = containers
        .card
        .merge(theme.shadows.get(Elevation::Medium))
        .merge(&margin_bottom(sp.xl));

    let light_swatches = ["primaryLight", "successLight", "dangerLight"];
    let swatches = theme.colors.swatches().into_iter().map(|(name, value)| {
        let label_color = if light_swatches.contains(&name) {
            colors::TEXT
        } else {
            colors::TEXT_INVERSE
        };
        Node::view(
            ViewStyle::new()
                .with_width(80.0)
                .with_padding(sp.sm)
                .with_background(value)
                .with_border_radius(theme.border_radius.sm)
                .with_align_items(Alignment::Center),
        )
        .child(Node::text(name, text.caption.merge(&TextStyle::new().with_color(label_color))))
    });

    let button = ViewStyle::new()
        .with_background(colors::PRIMARY)
        .with_border_radius(theme.border_radius.md)
        .with_padding_vertical(sp.md)
        .with_padding_horizontal(sp.xl)
        .with_align_items(Alignment::Center)
        .merge(&theme.shadows.small);

    Node::view(containers.screen_padded.clone())
        .child(Node::text("Style System Example", text.h2.clone()))
        .child(
            Node::text(
                "This example shows how to use the styling system with your components.",
                text.body.clone(),
            )
            .with_style(ViewStyle::new().with_margin_top(sp.sm).with_margin_bottom(sp.xl)),
        )
        .child(
            Node::view(card)
                .child(Node::text("Card Component", text.h4.clone()))
                .child(
                    Node::text(
                        "This is a card with predefined styles and shadows.",
                        text.body_sm.clone(),
                    )
                    .with_style(ViewStyle::new().with_margin_top(sp.xs)),
                ),
        )
        .child(Node::text("Color Examples", text.h5.clone()).with_style(margin_bottom(sp.md)))
        .child(
            Node::view(
                containers.row.merge(
                    &ViewStyle::new()
                        .with_flex_wrap(FlexWrap::Wrap)
                        .with_gap(sp.sm)
                        .with_margin_bottom(sp.xl),
                ),
            )
            .children(swatches),
        )
        .child(
            touchable(theme, button)
                .child(Node::text("Primary Button", text.button.clone())),
        )
        .child(
            Node::view(containers.center.clone().with_margin_top(sp.xl)).child(
                Node::view(create_circle(64.0, colors::PRIMARY_DARK)).child(Node::text(
                    "✓",
                    text.h4.merge(&TextStyle::new().with_color(colors::TEXT_INVERSE)),
                )),
            ),
        )
}

/// A touchable with the platform's press feedback
fn touchable(theme: &Theme, style: ViewStyle) -> Node {
    let kind = match theme.platform {
        Platform::Ios => NodeKind::Touchable {
            active_opacity: Some(theme.touch_feedback.active_opacity),
            ripple: None,
        },
        Platform::Android => NodeKind::Touchable {
            active_opacity: None,
            ripple: Some(theme.ripple.clone()),
        },
    };
    Node {
        kind,
        style,
        text_style: None,
        children: Vec::new(),
    }
}

/// Platform-specific features: shadows, fonts, touch feedback and padding
pub fn cross_platform_screen(theme: &Theme) -> Node {
    let platform = theme.platform;
    let sp = &theme.spacing;
    let text = &theme.typography.text_style;
    let containers = &theme.containers;

    let status_bar = Node {
        kind: NodeKind::StatusBar {
            bar_style: theme.status_bar.dark,
            background_color: theme.colors.background.clone(),
            translucent: platform == Platform::Android,
        },
        style: ViewStyle::default(),
        text_style: None,
        children: Vec::new(),
    };

    let badge = Node::view(
        ViewStyle::new()
            .with_background(colors::PRIMARY_LIGHT)
            .with_padding_horizontal(sp.md)
            .with_padding_vertical(sp.xs)
            .with_border_radius(theme.border_radius.pill),
    )
    .child(Node::text(
        platform.label(),
        text.label.merge(&TextStyle::new().with_color(colors::PRIMARY)),
    ));

    let header = Node::view(
        containers
            .row
            .merge(&ViewStyle::new().with_justify_content(JustifyContent::SpaceBetween))
            .merge(&margin_bottom(sp.xl)),
    )
    .child(Node::text("Cross-Platform UI", text.h2.clone()))
    .child(badge);

    let shadow_note = PlatformVariants::new("Using default shadow properties")
        .ios("Using iOS shadow properties for smooth rendering")
        .android("Using Android elevation with additional shadow color")
        .resolve(platform);
    let shadow_card = Node::view(
        containers
            .card
            .merge(theme.shadows.get(Elevation::Medium))
            .merge(&margin_bottom(sp.xl)),
    )
    .child(Node::text("Optimized Shadows", text.h5.clone()))
    .child(
        Node::text(shadow_note, text.body_sm.clone())
            .with_style(ViewStyle::new().with_margin_top(sp.xs)),
    );

    let font_note = PlatformVariants::new("System default")
        .ios("San Francisco (iOS)")
        .android("Roboto (Android)")
        .resolve(platform);
    let typography = section(
        theme,
        "Typography Optimizations",
        containers.card.merge(&margin_bottom(sp.xl)),
        vec![
            Node::text(format!("Platform-specific font: {}", font_note), text.body.clone()),
            Node::text(
                "Line heights are adjusted to look consistent on both platforms.",
                text.body.clone(),
            )
            .with_style(ViewStyle::new().with_margin_top(sp.md)),
        ],
    );

    let button_base = ViewStyle::new()
        .with_background(colors::PRIMARY)
        .with_border_radius(theme.border_radius.md)
        .with_padding_vertical(sp.md)
        .with_align_items(Alignment::Center)
        .with_margin_bottom(sp.lg);
    let (button_style, button_label) = match platform {
        Platform::Ios => (button_base.merge(&theme.shadows.small), "iOS-Style Button"),
        Platform::Android => (
            button_base.with_elevation(4),
            "Android-Style Button (Ripple)",
        ),
    };
    let button = touchable(theme, button_style).child(Node::text(button_label, text.button.clone()));

    let padded_card = containers.card.merge(
        &PlatformVariants::new(ViewStyle::new().with_padding(sp.lg))
            .ios(ViewStyle::new().with_padding_horizontal(sp.xl))
            .android(ViewStyle::new().with_padding_horizontal(sp.lg))
            .resolve(platform),
    );
    let layout = section(
        theme,
        "Platform-Specific Layout",
        padded_card,
        vec![Node::text(
            "This card has platform-specific padding to account for platform UI differences.",
            text.body.clone(),
        )],
    );

    let content = Node {
        kind: NodeKind::ScrollView,
        style: ViewStyle::new().with_padding(sp.lg),
        text_style: None,
        children: Vec::new(),
    }
    .child(header)
    .child(
        Node::text("Platform-Specific Features", text.h4.clone())
            .with_style(margin_bottom(sp.md)),
    )
    .child(shadow_card)
    .children(typography)
    .child(
        Node::text("Platform Touch Feedback", text.h5.clone()).with_style(margin_bottom(sp.md)),
    )
    .child(button)
    .children(layout);

    Node::view(containers.safe_screen.clone())
        .child(status_bar)
        .child(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::theme_for;

    #[test]
    fn test_example_screen_structure() {
        let screen = example_screen(theme_for(Platform::Ios));
        assert_eq!(screen.style.padding, Some(16.0));
        assert!(screen.find_text("Style System Example").is_some());
        assert!(screen.find_text("Primary Button").is_some());
        assert!(screen.find_text("primaryDark").is_some());
        assert!(screen.find_text("✓").is_some());
    }

    #[test]
    fn test_example_screen_card_uses_medium_shadow() {
        let ios = example_screen(theme_for(Platform::Ios));
        let card = &ios.children[2];
        assert_eq!(card.style.shadow_opacity, Some(0.15));
        assert_eq!(card.style.margin_bottom, Some(24.0));

        let android = example_screen(theme_for(Platform::Android));
        assert_eq!(android.children[2].style.elevation, Some(4));
    }

    #[test]
    fn test_swatch_label_colors() {
        let screen = example_screen(theme_for(Platform::Ios));
        let light = screen.find_text("primaryLight").unwrap();
        let dark = screen.find_text("primary").unwrap();
        assert_eq!(
            light.text_style.as_ref().and_then(|s| s.color.as_deref()),
            Some(colors::TEXT)
        );
        assert_eq!(
            dark.text_style.as_ref().and_then(|s| s.color.as_deref()),
            Some(colors::TEXT_INVERSE)
        );
    }

    #[test]
    fn test_cross_platform_badge_and_button() {
        let ios = cross_platform_screen(theme_for(Platform::Ios));
        assert!(ios.find_text("iOS").is_some());
        assert!(ios.find_text("iOS-Style Button").is_some());
        assert!(ios.find_text("Android-Style Button (Ripple)").is_none());

        let android = cross_platform_screen(theme_for(Platform::Android));
        assert!(android.find_text("Android").is_some());
        assert!(android.find_text("Android-Style Button (Ripple)").is_some());
        assert!(android
            .find_text("Platform-specific font: Roboto (Android)")
            .is_some());
    }

    #[test]
    fn test_touchable_feedback_per_platform() {
        let ios = example_screen(theme_for(Platform::Ios));
        let android = example_screen(theme_for(Platform::Android));

        match &ios.children[5].kind {
            NodeKind::Touchable {
                active_opacity,
                ripple,
            } => {
                assert_eq!(*active_opacity, Some(0.7));
                assert!(ripple.is_none());
            }
            other => panic!("expected touchable, got {:?}", other),
        }

        match &android.children[5].kind {
            NodeKind::Touchable {
                active_opacity,
                ripple,
            } => {
                assert!(active_opacity.is_none());
                assert_eq!(ripple.as_ref(), Some(&RippleConfig::default()));
            }
            other => panic!("expected touchable, got {:?}", other),
        }

        let json = serde_json::to_value(&android.children[5]).unwrap();
        assert_eq!(json["type"], "touchable");
        assert_eq!(json["ripple"]["color"], "rgba(0, 0, 0, 0.1)");
        assert_eq!(json["ripple"]["borderless"], false);
    }

    #[test]
    fn test_cross_platform_status_bar() {
        let android = cross_platform_screen(theme_for(Platform::Android));
        match &android.children[0].kind {
            NodeKind::StatusBar {
                bar_style,
                translucent,
                ..
            } => {
                assert_eq!(*bar_style, StatusBarStyle::DarkContent);
                assert!(*translucent);
            }
            other => panic!("expected status bar, got {:?}", other),
        }
        assert_eq!(android.style.padding_top, Some(8.0));
    }

    #[test]
    fn test_screen_serialization() {
        let screen = cross_platform_screen(theme_for(Platform::Ios));
        let json = serde_json::to_value(&screen).unwrap();
        assert_eq!(json["type"], "view");
        assert_eq!(json["children"][0]["type"], "statusBar");
        assert_eq!(json["children"][0]["barStyle"], "dark-content");

        let deserialized: Node = serde_json::from_value(json).unwrap();
        assert_eq!(deserialized.count(), screen.count());
    }
}
