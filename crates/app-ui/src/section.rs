//! Page section model
//!
//! A page body is an ordered list of [`PageSection`] values. The variant
//! decides which payload is legal and which renderer draws it; the order of
//! the list is the top-to-bottom order on screen.

use crate::components::{Handler, Node};
use crate::error::{Result, UiError};
use crate::theme::{Color, Theme};
use std::fmt;
use std::sync::Arc;

// =============================================================================
// Columns
// =============================================================================

/// Column count of a stats grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatColumns {
    /// Two tiles per row
    #[default]
    Two,
    /// Three tiles per row
    Three,
    /// Four tiles per row
    Four,
}

impl StatColumns {
    /// Number of columns
    pub fn count(&self) -> u8 {
        match self {
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
        }
    }

    /// Width of each tile as a percentage of the grid
    pub fn width_percent(&self) -> f32 {
        grid_width_percent(self.count())
    }
}

impl TryFrom<u8> for StatColumns {
    type Error = UiError;

    fn try_from(columns: u8) -> Result<Self> {
        match columns {
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            _ => Err(UiError::InvalidColumns {
                kind: SectionKind::Stats.as_str(),
                columns,
            }),
        }
    }
}

/// Column count of an actions grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActionColumns {
    /// Two tiles per row
    #[default]
    Two,
    /// Three tiles per row
    Three,
}

impl ActionColumns {
    /// Number of columns
    pub fn count(&self) -> u8 {
        match self {
            Self::Two => 2,
            Self::Three => 3,
        }
    }

    /// Width of each tile as a percentage of the grid
    pub fn width_percent(&self) -> f32 {
        grid_width_percent(self.count())
    }
}

impl TryFrom<u8> for ActionColumns {
    type Error = UiError;

    fn try_from(columns: u8) -> Result<Self> {
        match columns {
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            _ => Err(UiError::InvalidColumns {
                kind: SectionKind::Actions.as_str(),
                columns,
            }),
        }
    }
}

/// Fixed tile widths; the remainder of each row is taken by the grid gap
fn grid_width_percent(columns: u8) -> f32 {
    match columns {
        3 => 31.0,
        4 => 23.0,
        _ => 48.0,
    }
}

// =============================================================================
// Items
// =============================================================================

/// One tile of a stats grid
#[derive(Debug, Clone, PartialEq)]
pub struct StatItem {
    /// Icon name
    pub icon: String,
    /// Label under the value
    pub label: String,
    /// Display value, already formatted
    pub value: String,
    /// Accent color
    pub color: Option<Color>,
}

impl StatItem {
    /// Create a stat tile
    pub fn new(icon: impl Into<String>, label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            label: label.into(),
            value: value.into(),
            color: None,
        }
    }

    /// Set the accent color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// One tile of an actions grid
#[derive(Debug, Clone, PartialEq)]
pub struct ActionItem {
    /// Icon name
    pub icon: String,
    /// Label under the icon
    pub label: String,
    /// Callback invoked on press
    pub on_press: Handler,
    /// Accent color
    pub color: Option<Color>,
}

impl ActionItem {
    /// Create an action tile
    pub fn new(icon: impl Into<String>, label: impl Into<String>, on_press: Handler) -> Self {
        Self {
            icon: icon.into(),
            label: label.into(),
            on_press,
            color: None,
        }
    }

    /// Set the accent color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// One card of a metrics list
#[derive(Debug, Clone, PartialEq)]
pub struct MetricItem {
    /// Title line
    pub title: String,
    /// Display value, already formatted
    pub value: String,
    /// Caption under the value
    pub subtitle: Option<String>,
    /// Icon name; no badge is drawn without one
    pub icon: Option<String>,
    /// Accent color
    pub color: Option<Color>,
}

impl MetricItem {
    /// Create a metric card
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            subtitle: None,
            icon: None,
            color: None,
        }
    }

    /// Set the caption
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Set the icon
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set the accent color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

// =============================================================================
// Section Payloads
// =============================================================================

/// Grid of stat tiles
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StatSection {
    /// Tiles in display order
    pub items: Vec<StatItem>,
    /// Tiles per row
    pub columns: StatColumns,
}

/// Grid of action tiles
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ActionSection {
    /// Tiles in display order
    pub items: Vec<ActionItem>,
    /// Tiles per row
    pub columns: ActionColumns,
}

/// Vertical list of metric cards
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MetricsSection {
    /// Cards in display order
    pub items: Vec<MetricItem>,
}

// =============================================================================
// Opaque Content
// =============================================================================

/// Caller-supplied content for calendar and custom sections
///
/// The page template passes it through without looking inside.
#[derive(Clone)]
pub enum Content {
    /// Already rendered tree
    Node(Node),
    /// Rendered when the page is rendered, against the active theme
    Deferred(Arc<dyn Fn(&Theme) -> Node + Send + Sync>),
}

impl Content {
    /// Wrap a pre-rendered tree
    pub fn node(node: impl Into<Node>) -> Self {
        Content::Node(node.into())
    }

    /// Wrap a render callback
    pub fn deferred(render: impl Fn(&Theme) -> Node + Send + Sync + 'static) -> Self {
        Content::Deferred(Arc::new(render))
    }

    /// Produce the tree
    pub fn render(&self, theme: &Theme) -> Node {
        match self {
            Content::Node(node) => node.clone(),
            Content::Deferred(render) => render(theme),
        }
    }
}

impl PartialEq for Content {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Content::Node(a), Content::Node(b)) => a == b,
            (Content::Deferred(a), Content::Deferred(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Content::Node(node) => f.debug_tuple("Node").field(node).finish(),
            Content::Deferred(render) => write!(f, "Deferred({:p})", Arc::as_ptr(render)),
        }
    }
}

impl From<Node> for Content {
    fn from(node: Node) -> Self {
        Content::Node(node)
    }
}

// =============================================================================
// Page Section
// =============================================================================

/// Section variant tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    /// Stat tiles
    Stats,
    /// Action tiles
    Actions,
    /// Calendar widget
    Calendar,
    /// Metric cards
    Metrics,
    /// Arbitrary content
    Custom,
}

impl SectionKind {
    /// Tag name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stats => "stats",
            Self::Actions => "actions",
            Self::Calendar => "calendar",
            Self::Metrics => "metrics",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One unit of a page's vertical content
#[derive(Debug, Clone, PartialEq)]
pub enum PageSection {
    /// Grid of stat tiles
    Stats(StatSection),
    /// Grid of action tiles
    Actions(ActionSection),
    /// Caller-supplied calendar widget
    Calendar(Content),
    /// Vertical list of metric cards
    Metrics(MetricsSection),
    /// Arbitrary content
    Custom(Content),
}

impl PageSection {
    /// Variant tag
    pub fn kind(&self) -> SectionKind {
        match self {
            PageSection::Stats(_) => SectionKind::Stats,
            PageSection::Actions(_) => SectionKind::Actions,
            PageSection::Calendar(_) => SectionKind::Calendar,
            PageSection::Metrics(_) => SectionKind::Metrics,
            PageSection::Custom(_) => SectionKind::Custom,
        }
    }

    /// Number of items; calendar and custom sections count as one
    pub fn item_count(&self) -> usize {
        match self {
            PageSection::Stats(s) => s.items.len(),
            PageSection::Actions(s) => s.items.len(),
            PageSection::Metrics(s) => s.items.len(),
            PageSection::Calendar(_) | PageSection::Custom(_) => 1,
        }
    }
}
