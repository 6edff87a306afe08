//! User interface for NutriTrack
//!
//! This crate provides the section-based page composition layer: the design
//! system, render-tree primitives, the page section model, the page template
//! that renders it, and the builders and presets screens use to assemble
//! their pages.
//!
//! # Page Composition
//!
//! A screen gathers its data, passes it through section builders (or a
//! preset), and hands the resulting sections to a [`PageTemplate`]:
//!
//! ```rust
//! use app_ui::builders::WeeklyProgressInput;
//! use app_ui::presets::{statistics, PresetPage, StatisticsPageConfig};
//! use app_ui::theme::light_theme;
//!
//! let sections = statistics(StatisticsPageConfig {
//!     weekly: WeeklyProgressInput {
//!         avg_calories: Some(1800),
//!         ..Default::default()
//!     },
//!     ..Default::default()
//! });
//!
//! let page = PresetPage::Statistics.template(sections).render(&light_theme());
//! assert_eq!(page.sections().len(), 2);
//! ```
//!
//! # Modules
//!
//! - [`theme`] - Theme provider, color palettes, and gradients
//! - [`tokens`] - Design tokens (spacing, sizing, radius, shadows)
//! - [`typography`] - Typography system and text styles
//! - [`components`] - Render-tree primitives
//! - [`section`] - Page section model
//! - [`template`] - Page template renderer
//! - [`builders`] - Section builders
//! - [`presets`] - Preset pages
//! - [`descriptor`] - JSON page descriptors
//! - [`config`] - UI configuration

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod builders;
pub mod components;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod presets;
pub mod section;
pub mod template;
pub mod theme;
pub mod tokens;
pub mod typography;

// Re-export commonly used types
pub use theme::{
    colors, dark_theme, get_theme, light_theme, Gradient, Palette, Theme, ThemeName,
};

pub use tokens::{radius, shadows, sizing, spacing, Shadow};

pub use typography::{font_size, TextStyle, Typography, TypographyVariant};

pub use components::{ContainerRole, Handler, Node};

pub use section::{
    ActionColumns, ActionItem, Content, MetricItem, PageSection, SectionKind, StatColumns,
    StatItem,
};

pub use template::{HeaderGradient, PageTemplate, RefreshControl, RenderedPage};

pub use presets::PresetPage;

pub use descriptor::{Bindings, PageDescriptor};

pub use config::UiConfig;

pub use error::{Result, UiError};
