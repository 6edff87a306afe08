//! Page descriptors
//!
//! Pages can be declared as JSON data instead of code. A descriptor carries
//! the chrome and a list of sections tagged by `"type"`; callbacks and opaque
//! widgets are referenced by name and looked up in a [`Bindings`] registry
//! when the descriptor is resolved into a [`PageTemplate`].
//!
//! ```json
//! {
//!   "pageName": "home",
//!   "title": "NutriTrack",
//!   "sections": [
//!     { "type": "stats", "columns": 2, "items": [
//!         { "icon": "flame", "label": "Calories", "value": "1500" } ] },
//!     { "type": "actions", "items": [
//!         { "icon": "camera", "label": "Scan Food", "action": "scan" } ] },
//!     { "type": "custom", "slot": "recent-meals" }
//!   ]
//! }
//! ```
//!
//! Resolution rules:
//! - sections with an unrecognized `"type"` resolve to nothing
//! - action items whose name has no binding are left out
//! - calendar and custom sections whose slot has no binding are left out
//! - illegal column counts fail, or fall back to 2 columns when the config
//!   disables strict columns

use crate::components::Handler;
use crate::config::UiConfig;
use crate::error::{Result, UiError};
use crate::section::{
    ActionColumns, ActionItem, ActionSection, Content, MetricItem, MetricsSection, PageSection,
    StatColumns, StatItem, StatSection,
};
use crate::template::{HeaderGradient, PageTemplate};
use crate::theme::Color;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Action name bound to the back button
pub const BACK_ACTION: &str = "back";

/// Slot name bound to the trailing header content
pub const HEADER_RIGHT_SLOT: &str = "header-right";

// =============================================================================
// Descriptor Types
// =============================================================================

/// Stat tile declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatItemDescriptor {
    /// Icon name
    pub icon: String,
    /// Label
    pub label: String,
    /// Display value
    pub value: String,
    /// Accent color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

/// Action tile declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionItemDescriptor {
    /// Icon name
    pub icon: String,
    /// Label
    pub label: String,
    /// Name of the bound handler
    pub action: String,
    /// Accent color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

/// Metric card declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricItemDescriptor {
    /// Title line
    pub title: String,
    /// Display value
    pub value: String,
    /// Caption
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Icon name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Accent color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

/// Section declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SectionDescriptor {
    /// Grid of stat tiles
    Stats {
        /// Tiles
        items: Vec<StatItemDescriptor>,
        /// Tiles per row
        #[serde(default, skip_serializing_if = "Option::is_none")]
        columns: Option<u8>,
    },
    /// Grid of action tiles
    Actions {
        /// Tiles
        items: Vec<ActionItemDescriptor>,
        /// Tiles per row
        #[serde(default, skip_serializing_if = "Option::is_none")]
        columns: Option<u8>,
    },
    /// List of metric cards
    Metrics {
        /// Cards
        items: Vec<MetricItemDescriptor>,
    },
    /// Bound calendar widget
    Calendar {
        /// Slot name
        slot: String,
    },
    /// Bound arbitrary content
    Custom {
        /// Slot name
        slot: String,
    },
    /// Any tag this version does not know
    #[serde(other)]
    Unknown,
}

/// Page declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDescriptor {
    /// Descriptive page identifier
    pub page_name: String,
    /// Header title
    pub title: String,
    /// Header subtitle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Header icon name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_icon: Option<String>,
    /// Header gradient colors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_gradient: Option<Vec<Color>>,
    /// Whether a back button is drawn
    #[serde(default)]
    pub show_back_button: bool,
    /// Sections, top to bottom
    #[serde(default)]
    pub sections: Vec<SectionDescriptor>,
}

// =============================================================================
// Bindings
// =============================================================================

/// Named handlers and content referenced by descriptors
#[derive(Debug, Clone, Default)]
pub struct Bindings {
    actions: HashMap<String, Handler>,
    slots: HashMap<String, Content>,
}

impl Bindings {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind an action name
    pub fn with_action(mut self, name: impl Into<String>, handler: Handler) -> Self {
        self.actions.insert(name.into(), handler);
        self
    }

    /// Bind a slot name
    pub fn with_slot(mut self, name: impl Into<String>, content: impl Into<Content>) -> Self {
        self.slots.insert(name.into(), content.into());
        self
    }

    /// Look up an action
    pub fn action(&self, name: &str) -> Option<&Handler> {
        self.actions.get(name)
    }

    /// Look up a slot
    pub fn slot(&self, name: &str) -> Option<&Content> {
        self.slots.get(name)
    }
}

// =============================================================================
// Resolution
// =============================================================================

fn stat_columns(columns: Option<u8>, strict: bool) -> Result<StatColumns> {
    match columns.map(StatColumns::try_from) {
        None => Ok(StatColumns::default()),
        Some(Ok(columns)) => Ok(columns),
        Some(Err(e)) if strict => Err(e),
        Some(Err(e)) => {
            tracing::debug!("{}, using 2 columns", e);
            Ok(StatColumns::default())
        }
    }
}

fn action_columns(columns: Option<u8>, strict: bool) -> Result<ActionColumns> {
    match columns.map(ActionColumns::try_from) {
        None => Ok(ActionColumns::default()),
        Some(Ok(columns)) => Ok(columns),
        Some(Err(e)) if strict => Err(e),
        Some(Err(e)) => {
            tracing::debug!("{}, using 2 columns", e);
            Ok(ActionColumns::default())
        }
    }
}

impl SectionDescriptor {
    /// Resolve into a section; `None` when the section renders nothing
    pub fn resolve(&self, bindings: &Bindings, config: &UiConfig) -> Result<Option<PageSection>> {
        let section = match self {
            SectionDescriptor::Stats { items, columns } => Some(PageSection::Stats(StatSection {
                items: items
                    .iter()
                    .map(|item| StatItem {
                        icon: item.icon.clone(),
                        label: item.label.clone(),
                        value: item.value.clone(),
                        color: item.color.clone(),
                    })
                    .collect(),
                columns: stat_columns(*columns, config.strict_columns)?,
            })),
            SectionDescriptor::Actions { items, columns } => {
                Some(PageSection::Actions(ActionSection {
                    items: items
                        .iter()
                        .filter_map(|item| {
                            bindings.action(&item.action).map(|handler| ActionItem {
                                icon: item.icon.clone(),
                                label: item.label.clone(),
                                on_press: handler.clone(),
                                color: item.color.clone(),
                            })
                        })
                        .collect(),
                    columns: action_columns(*columns, config.strict_columns)?,
                }))
            }
            SectionDescriptor::Metrics { items } => Some(PageSection::Metrics(MetricsSection {
                items: items
                    .iter()
                    .map(|item| MetricItem {
                        title: item.title.clone(),
                        value: item.value.clone(),
                        subtitle: item.subtitle.clone(),
                        icon: item.icon.clone(),
                        color: item.color.clone(),
                    })
                    .collect(),
            })),
            SectionDescriptor::Calendar { slot } => {
                bindings.slot(slot).cloned().map(PageSection::Calendar)
            }
            SectionDescriptor::Custom { slot } => {
                bindings.slot(slot).cloned().map(PageSection::Custom)
            }
            SectionDescriptor::Unknown => None,
        };

        Ok(section)
    }
}

impl PageDescriptor {
    /// Parse a JSON descriptor
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Resolve into a page template
    pub fn resolve(&self, bindings: &Bindings, config: &UiConfig) -> Result<PageTemplate> {
        let mut template = PageTemplate::new(self.page_name.as_str(), self.title.as_str());
        template.subtitle = self.subtitle.clone();
        template.header_icon = self.header_icon.clone();

        if let Some(colors) = &self.header_gradient {
            template.header_gradient = Some(HeaderGradient::new(colors.iter().cloned())?);
        }

        if self.show_back_button {
            template = template.with_back_button(bindings.action(BACK_ACTION).cloned());
        }

        if let Some(content) = bindings.slot(HEADER_RIGHT_SLOT) {
            template = template.with_header_right(content.clone());
        }

        for section in &self.sections {
            if let Some(section) = section.resolve(bindings, config)? {
                template.sections.push(section);
            }
        }

        Ok(template)
    }
}

impl std::str::FromStr for PageDescriptor {
    type Err = UiError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_json(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{ContainerRole, Node, Text};
    use crate::section::SectionKind;
    use crate::theme::light_theme;
    use crate::typography::TypographyVariant;

    const HOME: &str = r##"{
        "pageName": "home",
        "title": "NutriTrack",
        "subtitle": "Your Health Dashboard",
        "headerIcon": "home",
        "sections": [
            { "type": "stats", "columns": 3, "items": [
                { "icon": "flame", "label": "Calories", "value": "1500", "color": "#EF4444" },
                { "icon": "barbell", "label": "Protein", "value": "80g" }
            ] },
            { "type": "carousel", "items": [1, 2, 3] },
            { "type": "actions", "items": [
                { "icon": "camera", "label": "Scan Food", "action": "scan" },
                { "icon": "restaurant", "label": "View Menus", "action": "menus" }
            ] },
            { "type": "metrics", "items": [
                { "title": "Total XP", "value": "1200", "subtitle": "Experience points" }
            ] },
            { "type": "custom", "slot": "recent-meals" }
        ]
    }"##;

    fn kinds(template: &PageTemplate) -> Vec<SectionKind> {
        template.sections.iter().map(PageSection::kind).collect()
    }

    #[test]
    fn test_parse_descriptor() {
        let descriptor = PageDescriptor::from_json(HOME).unwrap();
        assert_eq!(descriptor.page_name, "home");
        assert_eq!(descriptor.sections.len(), 5);
        assert_eq!(descriptor.sections[1], SectionDescriptor::Unknown);
        assert!(!descriptor.show_back_button);
    }

    #[test]
    fn test_unknown_and_unbound_sections_are_dropped() {
        let descriptor = PageDescriptor::from_json(HOME).unwrap();
        let bindings = Bindings::new().with_action("scan", Handler::new(|| {}));

        let template = descriptor.resolve(&bindings, &UiConfig::default()).unwrap();
        assert_eq!(
            kinds(&template),
            vec![SectionKind::Stats, SectionKind::Actions, SectionKind::Metrics]
        );
        // Only the bound action survives
        assert_eq!(template.sections[1].item_count(), 1);
    }

    #[test]
    fn test_bound_slot_is_passed_through() {
        let descriptor = PageDescriptor::from_json(HOME).unwrap();
        let content = Content::node(Text::new("Oatmeal", TypographyVariant::StatLabel));
        let bindings = Bindings::new().with_slot("recent-meals", content.clone());

        let template = descriptor.resolve(&bindings, &UiConfig::default()).unwrap();
        assert_eq!(template.sections.last(), Some(&PageSection::Custom(content)));

        let page = template.render(&light_theme());
        assert_eq!(page.sections().last().unwrap().texts(), vec!["Oatmeal"]);
    }

    #[test]
    fn test_action_handler_is_bound_reference() {
        let descriptor = PageDescriptor::from_json(HOME).unwrap();
        let scan = Handler::new(|| {});
        let bindings = Bindings::new().with_action("scan", scan.clone());

        let template = descriptor.resolve(&bindings, &UiConfig::default()).unwrap();
        let PageSection::Actions(actions) = &template.sections[1] else {
            panic!("expected actions");
        };
        assert!(actions.items[0].on_press.ptr_eq(&scan));
    }

    #[test]
    fn test_illegal_columns_strict() {
        let json = r#"{
            "pageName": "grid", "title": "Grid",
            "sections": [ { "type": "actions", "columns": 4, "items": [] } ]
        }"#;
        let descriptor = PageDescriptor::from_json(json).unwrap();

        let result = descriptor.resolve(&Bindings::new(), &UiConfig::default());
        assert!(matches!(
            result,
            Err(UiError::InvalidColumns {
                kind: "actions",
                columns: 4
            })
        ));
    }

    #[test]
    fn test_illegal_columns_lenient() {
        let json = r#"{
            "pageName": "grid", "title": "Grid",
            "sections": [ { "type": "stats", "columns": 7, "items": [] } ]
        }"#;
        let descriptor = PageDescriptor::from_json(json).unwrap();
        let config = UiConfig {
            strict_columns: false,
            ..Default::default()
        };

        let template = descriptor.resolve(&Bindings::new(), &config).unwrap();
        let PageSection::Stats(stats) = &template.sections[0] else {
            panic!("expected stats");
        };
        assert_eq!(stats.columns, StatColumns::Two);
        assert!(stats.items.is_empty());
    }

    #[test]
    fn test_chrome_and_back_button() {
        let json = r##"{
            "pageName": "detail", "title": "Meal",
            "headerGradient": ["#0EA5E9", "#0284C7"],
            "showBackButton": true
        }"##;
        let descriptor: PageDescriptor = json.parse().unwrap();
        let back = Handler::new(|| {});
        let bindings = Bindings::new()
            .with_action(BACK_ACTION, back.clone())
            .with_slot(HEADER_RIGHT_SLOT, Node::Empty);

        let template = descriptor.resolve(&bindings, &UiConfig::default()).unwrap();
        assert!(template.show_back_button);
        assert!(template.on_back_press.as_ref().unwrap().ptr_eq(&back));
        assert_eq!(template.header_gradient.as_ref().unwrap().colors().len(), 2);

        let page = template.render(&light_theme());
        assert!(page.root.find(ContainerRole::HeaderRight).is_some());
    }

    #[test]
    fn test_short_gradient_rejected() {
        let json = r##"{ "pageName": "p", "title": "P", "headerGradient": ["#000000"] }"##;
        let descriptor = PageDescriptor::from_json(json).unwrap();
        let result = descriptor.resolve(&Bindings::new(), &UiConfig::default());
        assert!(matches!(result, Err(UiError::InvalidGradient(1))));
    }

    #[test]
    fn test_malformed_descriptor() {
        assert!(matches!(
            PageDescriptor::from_json(r#"{ "title": 3 }"#),
            Err(UiError::Descriptor(_))
        ));
    }
}
