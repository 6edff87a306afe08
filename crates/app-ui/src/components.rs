//! Render-tree primitives for NutriTrack
//!
//! The page template does not draw anything itself. It produces a tree of
//! [`Node`] values that a frontend (or a test) walks: containers with a
//! layout role and style, text runs, icon glyph references and pressable
//! regions carrying their [`Handler`].
//!
//! # Component Design
//!
//! Components are plain Rust structs with builder methods, serializable so a
//! webview frontend can consume the tree as JSON. Handlers are skipped during
//! serialization; they only exist on the Rust side.
//!
//! # Available Components
//!
//! - [`Container`] - Layout container with a [`ContainerRole`]
//! - [`Text`] - Text run with a [`TypographyVariant`]
//! - [`Icon`] - Icon glyph reference (resolved by the frontend's icon set)
//! - [`Pressable`] - Tappable region that invokes a [`Handler`]

use crate::theme::{Color, Gradient};
use crate::tokens::Shadow;
use crate::typography::TypographyVariant;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

// =============================================================================
// Event Handlers
// =============================================================================

/// A callback wired to a pressable element
///
/// Equality is reference identity: two handlers are equal only when they
/// share the same underlying closure.
#[derive(Clone)]
pub struct Handler(Arc<dyn Fn() + Send + Sync>);

impl Handler {
    /// Wrap a closure
    pub fn new(f: impl Fn() + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Invoke the callback
    pub fn call(&self) {
        (self.0)()
    }

    /// Whether both handlers share the same closure
    pub fn ptr_eq(&self, other: &Handler) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Handler {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handler({:p})", Arc::as_ptr(&self.0))
    }
}

// =============================================================================
// Common Types
// =============================================================================

/// Dimension value (pixels, percentage, auto)
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(untagged)]
pub enum Dimension {
    /// Fixed pixel value
    Pixels(f32),
    /// Percentage of parent
    Percent(String),
    /// Auto-size
    #[default]
    Auto,
}

impl Dimension {
    /// Create a pixel dimension
    pub fn px(value: f32) -> Self {
        Dimension::Pixels(value)
    }

    /// Create a percentage dimension
    pub fn percent(value: f32) -> Self {
        Dimension::Percent(format!("{}%", value))
    }
}

/// Cross-axis alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Stretch to fill
    #[default]
    Stretch,
    /// Align to start
    Start,
    /// Align to center
    Center,
    /// Align to end
    End,
}

/// Flex direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlexDirection {
    /// Vertical stacking
    #[default]
    Column,
    /// Horizontal stacking
    Row,
}

/// Text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    /// Left aligned
    #[default]
    Left,
    /// Centered
    Center,
}

/// Style properties that can be applied to containers
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StyleProps {
    /// Width constraint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Dimension>,
    /// Height constraint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<Dimension>,
    /// Flex grow factor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex: Option<f32>,
    /// Background color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    /// Background gradient
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient: Option<Gradient>,
    /// Uniform padding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<f32>,
    /// Gap between children
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<f32>,
    /// Space below the element
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<f32>,
    /// Border radius
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f32>,
    /// Drop shadow
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<Shadow>,
}

// =============================================================================
// Container Component
// =============================================================================

/// Layout role of a container in the page tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContainerRole {
    /// Whole screen (safe area)
    Screen,
    /// Gradient header region
    Header,
    /// Row holding back button, icon, titles and trailing slot
    HeaderTop,
    /// Back button in the header
    BackButton,
    /// Icon badge in the header
    HeaderIcon,
    /// Title and subtitle column
    HeaderText,
    /// Caller-supplied trailing header content
    HeaderRight,
    /// Scrollable body
    Body,
    /// One page section
    Section,
    /// Wrapping grid of stat tiles
    StatsGrid,
    /// One stat tile
    StatCard,
    /// Wrapping grid of action tiles
    ActionsGrid,
    /// One action tile
    ActionCard,
    /// Vertical list of metric cards
    MetricsList,
    /// One metric card
    MetricCard,
    /// Text column inside a metric card
    MetricContent,
    /// Colored square behind an icon
    IconBadge,
    /// Caller-built content
    Custom,
}

/// Layout container
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Container {
    /// Layout role
    pub role: ContainerRole,
    /// Main axis
    pub direction: FlexDirection,
    /// Whether children wrap onto new lines
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub wrap: bool,
    /// Cross-axis alignment of children
    pub align: Alignment,
    /// Style properties
    #[serde(flatten)]
    pub style: StyleProps,
    /// Children in render order
    pub children: Vec<Node>,
}

impl Container {
    /// Create a column container
    pub fn new(role: ContainerRole) -> Self {
        Self {
            role,
            direction: FlexDirection::Column,
            wrap: false,
            align: Alignment::Stretch,
            style: StyleProps::default(),
            children: Vec::new(),
        }
    }

    /// Create a row container
    pub fn row(role: ContainerRole) -> Self {
        Self::new(role).with_direction(FlexDirection::Row)
    }

    /// Set flex direction
    pub fn with_direction(mut self, direction: FlexDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Enable wrapping
    pub fn wrap(mut self) -> Self {
        self.wrap = true;
        self
    }

    /// Set cross-axis alignment
    pub fn with_align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Set style properties
    pub fn with_style(mut self, style: StyleProps) -> Self {
        self.style = style;
        self
    }

    /// Append a child
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Append a child when present
    pub fn child_opt(mut self, node: Option<impl Into<Node>>) -> Self {
        if let Some(node) = node {
            self.children.push(node.into());
        }
        self
    }

    /// Append several children
    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }
}

// =============================================================================
// Text Component
// =============================================================================

/// Text run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Text {
    /// Text content
    pub content: String,
    /// Typography variant
    pub variant: TypographyVariant,
    /// Font size after scaling
    pub font_size: f32,
    /// Font weight
    pub font_weight: u16,
    /// Text color
    pub color: Color,
    /// Alignment
    pub align: TextAlign,
}

impl Text {
    /// Create a text run; size and weight come from the variant's unscaled style
    pub fn new(content: impl Into<String>, variant: TypographyVariant) -> Self {
        let style = variant.style();
        Self {
            content: content.into(),
            variant,
            font_size: style.font_size,
            font_weight: style.font_weight,
            color: String::new(),
            align: TextAlign::Left,
        }
    }

    /// Set the text color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Set alignment
    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// Override size and weight (applies a font scale)
    pub fn with_style(mut self, style: &crate::typography::TextStyle) -> Self {
        self.font_size = style.font_size;
        self.font_weight = style.font_weight;
        self
    }
}

// =============================================================================
// Icon Component
// =============================================================================

/// Icon glyph reference
///
/// The name is passed through untouched; the frontend's icon set resolves it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Icon {
    /// Icon name (e.g., "flame", "barbell")
    pub name: String,
    /// Size in pixels
    pub size: f32,
    /// Glyph color
    pub color: Color,
}

impl Icon {
    /// Create an icon
    pub fn new(name: impl Into<String>, size: f32, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            color: color.into(),
        }
    }
}

// =============================================================================
// Pressable Component
// =============================================================================

/// Tappable region
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pressable {
    /// Layout role
    pub role: ContainerRole,
    /// Callback invoked on press
    #[serde(skip)]
    pub on_press: Option<Handler>,
    /// Style properties
    #[serde(flatten)]
    pub style: StyleProps,
    /// Children in render order
    pub children: Vec<Node>,
}

impl Pressable {
    /// Create a pressable region
    pub fn new(role: ContainerRole, on_press: Option<Handler>) -> Self {
        Self {
            role,
            on_press,
            style: StyleProps::default(),
            children: Vec::new(),
        }
    }

    /// Set style properties
    pub fn with_style(mut self, style: StyleProps) -> Self {
        self.style = style;
        self
    }

    /// Append a child
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }
}

// =============================================================================
// Node
// =============================================================================

/// One element of the render tree
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    /// Layout container
    View(Container),
    /// Text run
    Text(Text),
    /// Icon glyph
    Icon(Icon),
    /// Tappable region
    Pressable(Pressable),
    /// Renders nothing
    Empty,
}

impl From<Container> for Node {
    fn from(c: Container) -> Self {
        Node::View(c)
    }
}

impl From<Text> for Node {
    fn from(t: Text) -> Self {
        Node::Text(t)
    }
}

impl From<Icon> for Node {
    fn from(i: Icon) -> Self {
        Node::Icon(i)
    }
}

impl From<Pressable> for Node {
    fn from(p: Pressable) -> Self {
        Node::Pressable(p)
    }
}

impl Node {
    /// Layout role of a container or pressable
    pub fn role(&self) -> Option<ContainerRole> {
        match self {
            Node::View(c) => Some(c.role),
            Node::Pressable(p) => Some(p.role),
            _ => None,
        }
    }

    /// Style of a container or pressable
    pub fn style(&self) -> Option<&StyleProps> {
        match self {
            Node::View(c) => Some(&c.style),
            Node::Pressable(p) => Some(&p.style),
            _ => None,
        }
    }

    /// Direct children
    pub fn children(&self) -> &[Node] {
        match self {
            Node::View(c) => &c.children,
            Node::Pressable(p) => &p.children,
            _ => &[],
        }
    }

    /// Descendants (self included) with the given role, depth-first
    pub fn find_all(&self, role: ContainerRole) -> Vec<&Node> {
        let mut found = Vec::new();
        self.collect_role(role, &mut found);
        found
    }

    fn collect_role<'a>(&'a self, role: ContainerRole, found: &mut Vec<&'a Node>) {
        if self.role() == Some(role) {
            found.push(self);
        }
        for child in self.children() {
            child.collect_role(role, found);
        }
    }

    /// First descendant (self included) with the given role
    pub fn find(&self, role: ContainerRole) -> Option<&Node> {
        if self.role() == Some(role) {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find(role))
    }

    /// All text content, depth-first
    pub fn texts(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_texts(&mut out);
        out
    }

    fn collect_texts<'a>(&'a self, out: &mut Vec<&'a str>) {
        if let Node::Text(t) = self {
            out.push(&t.content);
        }
        for child in self.children() {
            child.collect_texts(out);
        }
    }

    /// All icons, depth-first
    pub fn icons(&self) -> Vec<&Icon> {
        let mut out = Vec::new();
        self.collect_icons(&mut out);
        out
    }

    fn collect_icons<'a>(&'a self, out: &mut Vec<&'a Icon>) {
        if let Node::Icon(i) = self {
            out.push(i);
        }
        for child in self.children() {
            child.collect_icons(out);
        }
    }

    /// Invoke the press handler; false when this is not a wired pressable
    pub fn press(&self) -> bool {
        match self {
            Node::Pressable(Pressable {
                on_press: Some(handler),
                ..
            }) => {
                handler.call();
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // ==========================================================================
    // Handler Tests
    // ==========================================================================

    #[test]
    fn test_handler_identity() {
        let a = Handler::new(|| {});
        let b = a.clone();
        let c = Handler::new(|| {});

        assert!(a.ptr_eq(&b));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_handler_call() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = count.clone();
        let handler = Handler::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        handler.call();
        handler.call();
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    // ==========================================================================
    // Tree Tests
    // ==========================================================================

    fn sample_tree(handler: Handler) -> Node {
        Container::new(ContainerRole::Body)
            .child(
                Container::row(ContainerRole::StatsGrid)
                    .wrap()
                    .child(Container::new(ContainerRole::StatCard).child(Text::new(
                        "1500",
                        TypographyVariant::StatValue,
                    )))
                    .child(Container::new(ContainerRole::StatCard).child(Text::new(
                        "80g",
                        TypographyVariant::StatValue,
                    ))),
            )
            .child(
                Pressable::new(ContainerRole::ActionCard, Some(handler))
                    .child(Icon::new("camera", 28.0, "#10B981"))
                    .child(Text::new("Scan Food", TypographyVariant::ActionLabel)),
            )
            .into()
    }

    #[test]
    fn test_find_all_and_texts() {
        let tree = sample_tree(Handler::new(|| {}));

        assert_eq!(tree.find_all(ContainerRole::StatCard).len(), 2);
        assert_eq!(tree.texts(), vec!["1500", "80g", "Scan Food"]);
        assert_eq!(tree.icons()[0].name, "camera");
        assert!(tree.find(ContainerRole::MetricsList).is_none());
    }

    #[test]
    fn test_press() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = count.clone();
        let tree = sample_tree(Handler::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        let action = tree.find(ContainerRole::ActionCard).unwrap();
        assert!(action.press());
        assert!(!tree.press());
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_child_opt() {
        let none: Option<Text> = None;
        let container = Container::new(ContainerRole::MetricContent)
            .child_opt(Some(Text::new("Title", TypographyVariant::MetricTitle)))
            .child_opt(none);
        assert_eq!(container.children.len(), 1);
    }

    #[test]
    fn test_dimension_percent() {
        assert_eq!(Dimension::percent(48.0), Dimension::Percent("48%".to_string()));
    }

    #[test]
    fn test_node_serialization_skips_handlers() {
        let tree = sample_tree(Handler::new(|| {}));
        let json = serde_json::to_value(&tree).unwrap();

        assert_eq!(json["type"], "view");
        assert_eq!(json["role"], "body");
        let action = &json["children"][1];
        assert_eq!(action["type"], "pressable");
        assert!(action.get("on_press").is_none());
        assert_eq!(action["children"][1]["content"], "Scan Food");
    }
}
