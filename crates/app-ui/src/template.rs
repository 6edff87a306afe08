//! Page template
//!
//! [`PageTemplate`] is the single rendering engine for section-based pages.
//! It draws the header chrome once (gradient, optional back button, icon,
//! title and subtitle, optional trailing slot) and then dispatches every
//! [`PageSection`] to its renderer, in order, inside a scrollable body.
//!
//! Rendering is a pure function of the template and the theme. The only
//! side effects are the callbacks the caller wired in, which run when the
//! frontend reports a press or a pull-to-refresh.
//!
//! # Example
//!
//! ```rust
//! use app_ui::builders::{nutrition_stats, NutritionStatsInput};
//! use app_ui::template::PageTemplate;
//! use app_ui::theme::light_theme;
//!
//! let page = PageTemplate::new("home", "NutriTrack")
//!     .with_subtitle("Your Health Dashboard")
//!     .with_section(nutrition_stats(NutritionStatsInput::default()))
//!     .render(&light_theme());
//!
//! assert_eq!(page.sections().len(), 1);
//! assert_eq!(page.header_texts(), vec!["NutriTrack", "Your Health Dashboard"]);
//! ```

use crate::components::{
    Alignment, Container, ContainerRole, Dimension, Handler, Icon, Node, Pressable, StyleProps,
    Text, TextAlign,
};
use crate::config::UiConfig;
use crate::error::{Result, UiError};
use crate::section::{ActionSection, Content, MetricsSection, PageSection, StatSection};
use crate::theme::{Color, Gradient, Theme};
use crate::tokens::{radius, shadows, sizing, spacing};
use crate::typography::{Typography, TypographyVariant};
use serde::Serialize;

/// Icon shown in the back button
pub const BACK_ICON: &str = "arrow-back";

// =============================================================================
// Header Gradient
// =============================================================================

/// Header gradient colors, at least two
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderGradient(Vec<Color>);

impl HeaderGradient {
    /// Validate a color list
    pub fn new<S: Into<String>>(colors: impl IntoIterator<Item = S>) -> Result<Self> {
        let colors: Vec<Color> = colors.into_iter().map(Into::into).collect();
        if colors.len() < 2 {
            return Err(UiError::InvalidGradient(colors.len()));
        }
        Ok(Self(colors))
    }

    /// Colors in order
    pub fn colors(&self) -> &[Color] {
        &self.0
    }

    /// Evenly spaced gradient over the colors
    pub fn to_gradient(&self) -> Gradient {
        Gradient::from_colors(&self.0)
    }
}

// =============================================================================
// Page Template
// =============================================================================

/// Inputs of one section-based page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageTemplate {
    /// Descriptive page identifier, never used for logic
    pub page_name: String,
    /// Header title
    pub title: String,
    /// Header subtitle
    pub subtitle: Option<String>,
    /// Header icon name
    pub header_icon: Option<String>,
    /// Body sections, top to bottom
    pub sections: Vec<PageSection>,
    /// Whether the refresh indicator is showing
    pub refreshing: bool,
    /// Pull-to-refresh callback
    pub on_refresh: Option<Handler>,
    /// Header gradient; theme default when absent
    pub header_gradient: Option<HeaderGradient>,
    /// Whether a back button is drawn
    pub show_back_button: bool,
    /// Back button callback
    pub on_back_press: Option<Handler>,
    /// Trailing header content
    pub header_right: Option<Content>,
}

impl PageTemplate {
    /// Create a page with a name and title
    pub fn new(page_name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            page_name: page_name.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set the subtitle
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Set the header icon
    pub fn with_header_icon(mut self, icon: impl Into<String>) -> Self {
        self.header_icon = Some(icon.into());
        self
    }

    /// Append a section
    pub fn with_section(mut self, section: PageSection) -> Self {
        self.sections.push(section);
        self
    }

    /// Append several sections
    pub fn with_sections(mut self, sections: impl IntoIterator<Item = PageSection>) -> Self {
        self.sections.extend(sections);
        self
    }

    /// Wire pull-to-refresh
    pub fn with_refresh(mut self, refreshing: bool, on_refresh: Handler) -> Self {
        self.refreshing = refreshing;
        self.on_refresh = Some(on_refresh);
        self
    }

    /// Set the header gradient
    pub fn with_header_gradient(mut self, gradient: HeaderGradient) -> Self {
        self.header_gradient = Some(gradient);
        self
    }

    /// Show the back button
    pub fn with_back_button(mut self, on_back_press: Option<Handler>) -> Self {
        self.show_back_button = true;
        self.on_back_press = on_back_press;
        self
    }

    /// Set trailing header content
    pub fn with_header_right(mut self, content: Content) -> Self {
        self.header_right = Some(content);
        self
    }

    /// Render against a theme at the default font scale
    pub fn render(&self, theme: &Theme) -> RenderedPage {
        self.render_parts(theme, &Typography::default(), None)
    }

    /// Render with the theme, font scale and gradient override from a config
    pub fn render_with_config(&self, config: &UiConfig) -> RenderedPage {
        let theme = config.theme();
        self.render_parts(&theme, &config.typography(), config.header_gradient())
    }

    fn render_parts(
        &self,
        theme: &Theme,
        typography: &Typography,
        gradient_override: Option<HeaderGradient>,
    ) -> RenderedPage {
        tracing::debug!(
            "Rendering page {} with {} sections",
            self.page_name,
            self.sections.len()
        );

        let gradient = self
            .header_gradient
            .as_ref()
            .or(gradient_override.as_ref())
            .map(HeaderGradient::to_gradient)
            .unwrap_or_else(|| theme.default_header_gradient());

        let renderer = Renderer { theme, typography };

        let body = Container::new(ContainerRole::Body)
            .with_style(StyleProps {
                flex: Some(1.0),
                padding: Some(spacing::XL),
                gap: Some(spacing::XL),
                ..Default::default()
            })
            .children(self.sections.iter().enumerate().map(|(index, section)| {
                tracing::trace!("Dispatching section {} ({})", index, section.kind());
                renderer.section(section)
            }));

        let root = Container::new(ContainerRole::Screen)
            .with_style(StyleProps {
                flex: Some(1.0),
                background_color: Some(theme.surface.background.clone()),
                ..Default::default()
            })
            .child(renderer.header(self, gradient))
            .child(body);

        let refresh = self.on_refresh.clone().map(|on_refresh| RefreshControl {
            refreshing: self.refreshing,
            tint: theme.primary(500).to_string(),
            on_refresh,
        });

        RenderedPage {
            page_name: self.page_name.clone(),
            root: root.into(),
            refresh,
        }
    }
}

// =============================================================================
// Rendered Output
// =============================================================================

/// Pull-to-refresh control attached to the body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RefreshControl {
    /// Whether the indicator is showing
    pub refreshing: bool,
    /// Indicator color
    pub tint: Color,
    /// Callback the frontend invokes on pull
    #[serde(skip)]
    pub on_refresh: Handler,
}

/// Result of rendering a page template
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedPage {
    /// Descriptive page identifier
    pub page_name: String,
    /// Screen tree
    pub root: Node,
    /// Refresh control, when a refresh callback was wired
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh: Option<RefreshControl>,
}

impl RenderedPage {
    /// Section containers of the body, top to bottom
    pub fn sections(&self) -> Vec<&Node> {
        self.root
            .find(ContainerRole::Body)
            .map(|body| body.children().iter().collect())
            .unwrap_or_default()
    }

    /// Title and subtitle text
    pub fn header_texts(&self) -> Vec<&str> {
        self.root
            .find(ContainerRole::HeaderText)
            .map(Node::texts)
            .unwrap_or_default()
    }

    /// Invoke the refresh callback; false when none is wired
    pub fn trigger_refresh(&self) -> bool {
        match &self.refresh {
            Some(control) => {
                control.on_refresh.call();
                true
            }
            None => false,
        }
    }
}

// =============================================================================
// Renderer
// =============================================================================

struct Renderer<'a> {
    theme: &'a Theme,
    typography: &'a Typography,
}

impl Renderer<'_> {
    fn text(&self, content: &str, variant: TypographyVariant, color: &str) -> Text {
        Text::new(content, variant)
            .with_style(&self.typography.get(variant))
            .with_color(color)
    }

    fn header(&self, page: &PageTemplate, gradient: Gradient) -> Container {
        let surface = &self.theme.surface;

        let back_button = page.show_back_button.then(|| {
            Pressable::new(ContainerRole::BackButton, page.on_back_press.clone())
                .with_style(square(sizing::badge::SM, radius::MD, &surface.header_overlay))
                .child(Icon::new(BACK_ICON, sizing::icon::MD, surface.on_header.as_str()))
        });

        let header_icon = non_empty(&page.header_icon).map(|icon| {
            Container::new(ContainerRole::HeaderIcon)
                .with_align(Alignment::Center)
                .with_style(square(sizing::badge::LG, radius::LG, &surface.header_overlay))
                .child(Icon::new(icon, sizing::icon::XL, surface.on_header.as_str()))
        });

        let header_text = Container::new(ContainerRole::HeaderText)
            .with_style(StyleProps {
                flex: Some(1.0),
                ..Default::default()
            })
            .child(self.text(&page.title, TypographyVariant::HeaderTitle, &surface.on_header))
            .child_opt(non_empty(&page.subtitle).map(|subtitle| {
                self.text(subtitle, TypographyVariant::HeaderSubtitle, &surface.on_header_muted)
            }));

        let header_right = page
            .header_right
            .as_ref()
            .map(|content| Container::new(ContainerRole::HeaderRight).child(content.render(self.theme)));

        let top = Container::row(ContainerRole::HeaderTop)
            .with_align(Alignment::Center)
            .with_style(StyleProps {
                gap: Some(spacing::MD),
                ..Default::default()
            })
            .child_opt(back_button)
            .child_opt(header_icon)
            .child(header_text)
            .child_opt(header_right);

        Container::new(ContainerRole::Header)
            .with_style(StyleProps {
                gradient: Some(gradient),
                padding: Some(spacing::XL),
                gap: Some(spacing::LG),
                ..Default::default()
            })
            .child(top)
    }

    fn section(&self, section: &PageSection) -> Node {
        let body: Node = match section {
            PageSection::Stats(stats) => self.stats(stats).into(),
            PageSection::Actions(actions) => self.actions(actions).into(),
            PageSection::Metrics(metrics) => self.metrics(metrics).into(),
            PageSection::Calendar(content) | PageSection::Custom(content) => {
                content.render(self.theme)
            }
        };

        Container::new(ContainerRole::Section)
            .with_style(StyleProps {
                gap: Some(spacing::LG),
                ..Default::default()
            })
            .child(body)
            .into()
    }

    fn stats(&self, section: &StatSection) -> Container {
        let width = section.columns.width_percent();
        let surface = &self.theme.surface;

        Container::row(ContainerRole::StatsGrid)
            .wrap()
            .with_style(grid_style())
            .children(section.items.iter().map(|item| {
                Container::new(ContainerRole::StatCard)
                    .with_align(Alignment::Center)
                    .with_style(self.card_style(Some(width), spacing::LG))
                    .child(self.icon_badge(
                        &item.icon,
                        item.color.as_deref(),
                        sizing::badge::MD,
                        sizing::icon::MD,
                        radius::MD,
                    ))
                    .child(self.text(&item.value, TypographyVariant::StatValue, &surface.text))
                    .child(
                        self.text(&item.label, TypographyVariant::StatLabel, &surface.text_muted)
                            .with_align(TextAlign::Center),
                    )
                    .into()
            }))
    }

    fn actions(&self, section: &ActionSection) -> Container {
        let width = section.columns.width_percent();
        let surface = &self.theme.surface;

        Container::row(ContainerRole::ActionsGrid)
            .wrap()
            .with_style(grid_style())
            .children(section.items.iter().map(|item| {
                Pressable::new(ContainerRole::ActionCard, Some(item.on_press.clone()))
                    .with_style(self.card_style(Some(width), spacing::XL))
                    .child(self.icon_badge(
                        &item.icon,
                        item.color.as_deref(),
                        sizing::badge::LG,
                        sizing::icon::LG,
                        radius::LG,
                    ))
                    .child(
                        self.text(&item.label, TypographyVariant::ActionLabel, &surface.text)
                            .with_align(TextAlign::Center),
                    )
                    .into()
            }))
    }

    fn metrics(&self, section: &MetricsSection) -> Container {
        let surface = &self.theme.surface;

        Container::new(ContainerRole::MetricsList)
            .with_style(StyleProps {
                gap: Some(spacing::MD),
                ..Default::default()
            })
            .children(section.items.iter().map(|item| {
                let badge = non_empty(&item.icon).map(|icon| {
                    self.icon_badge(
                        icon,
                        item.color.as_deref(),
                        sizing::badge::MD,
                        sizing::icon::MD,
                        radius::MD,
                    )
                });

                let content = Container::new(ContainerRole::MetricContent)
                    .with_style(StyleProps {
                        flex: Some(1.0),
                        ..Default::default()
                    })
                    .child(self.text(&item.title, TypographyVariant::MetricTitle, &surface.text_muted))
                    .child(self.text(&item.value, TypographyVariant::MetricValue, &surface.text))
                    .child_opt(non_empty(&item.subtitle).map(|subtitle| {
                        self.text(subtitle, TypographyVariant::MetricSubtitle, &surface.text_subtle)
                    }));

                let mut card_style = self.card_style(None, spacing::LG);
                card_style.gap = Some(spacing::LG);

                Container::row(ContainerRole::MetricCard)
                    .with_align(Alignment::Center)
                    .with_style(card_style)
                    .child_opt(badge)
                    .child(content)
                    .into()
            }))
    }

    fn card_style(&self, width_percent: Option<f32>, padding: f32) -> StyleProps {
        StyleProps {
            width: width_percent.map(Dimension::percent),
            background_color: Some(self.theme.surface.card.clone()),
            padding: Some(padding),
            border_radius: Some(radius::LG),
            shadow: Some(shadows::md()),
            ..Default::default()
        }
    }

    /// Square badge behind an icon; the item color tints both when set
    fn icon_badge(
        &self,
        icon: &str,
        color: Option<&str>,
        badge_size: f32,
        icon_size: f32,
        corner: f32,
    ) -> Container {
        let background = color.unwrap_or_else(|| self.theme.primary(100));
        let glyph = color.unwrap_or_else(|| self.theme.primary(600));

        let mut style = square(badge_size, corner, background);
        style.margin_bottom = Some(spacing::MD);

        Container::new(ContainerRole::IconBadge)
            .with_align(Alignment::Center)
            .with_style(style)
            .child(Icon::new(icon, icon_size, glyph))
    }
}

fn square(size: f32, corner: f32, background: &str) -> StyleProps {
    StyleProps {
        width: Some(Dimension::px(size)),
        height: Some(Dimension::px(size)),
        background_color: Some(background.to_string()),
        border_radius: Some(corner),
        ..Default::default()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn grid_style() -> StyleProps {
    StyleProps {
        gap: Some(spacing::MD),
        ..Default::default()
    }
}
