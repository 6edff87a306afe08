//! Typography system for NutriTrack
//!
//! One [`TypographyVariant`] per text role the page template renders, each
//! mapped to a size and weight on the shared type scale. [`Typography`]
//! applies the user's font scale to all of them at once.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Type Scale
// =============================================================================

/// Font size scale in pixels
pub mod font_size {
    /// Extra small (12px)
    pub const XS: f32 = 12.0;
    /// Small (14px)
    pub const SM: f32 = 14.0;
    /// Base (16px)
    pub const BASE: f32 = 16.0;
    /// Large (18px)
    pub const LG: f32 = 18.0;
    /// Extra large (20px)
    pub const XL: f32 = 20.0;
    /// 2x large (24px)
    pub const XXL: f32 = 24.0;
    /// 3x large (30px)
    pub const XXXL: f32 = 30.0;
}

/// Font weights
pub mod font_weight {
    /// Regular (400)
    pub const NORMAL: u16 = 400;
    /// Medium (500)
    pub const MEDIUM: u16 = 500;
    /// Semi-bold (600)
    pub const SEMI_BOLD: u16 = 600;
    /// Bold (700)
    pub const BOLD: u16 = 700;
}

/// Scale bounds accepted by [`Typography::set_scale`]
pub const MIN_SCALE: f32 = 0.5;
/// Upper scale bound
pub const MAX_SCALE: f32 = 2.0;

// =============================================================================
// Text Style
// =============================================================================

/// A typography style definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in pixels
    pub font_size: f32,
    /// Font weight (400, 500, 600, 700)
    pub font_weight: u16,
}

impl TextStyle {
    /// Create a new text style
    pub fn new(font_size: f32, font_weight: u16) -> Self {
        Self {
            font_size,
            font_weight,
        }
    }

    /// Scale the font size by a multiplier
    pub fn scale(&self, multiplier: f32) -> Self {
        Self {
            font_size: self.font_size * multiplier,
            font_weight: self.font_weight,
        }
    }
}

// =============================================================================
// Typography Variants
// =============================================================================

/// Text roles rendered by the page template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TypographyVariant {
    /// Page title in the header
    HeaderTitle,
    /// Page subtitle in the header
    HeaderSubtitle,
    /// Value on a stat tile
    StatValue,
    /// Label under a stat value
    StatLabel,
    /// Label on an action tile
    ActionLabel,
    /// Title line of a metric card
    MetricTitle,
    /// Value of a metric card
    MetricValue,
    /// Caption under a metric value
    MetricSubtitle,
}

impl TypographyVariant {
    /// Every variant, in rendering order
    pub const ALL: [TypographyVariant; 8] = [
        Self::HeaderTitle,
        Self::HeaderSubtitle,
        Self::StatValue,
        Self::StatLabel,
        Self::ActionLabel,
        Self::MetricTitle,
        Self::MetricValue,
        Self::MetricSubtitle,
    ];

    /// Get the unscaled text style for this variant
    pub fn style(&self) -> TextStyle {
        match self {
            Self::HeaderTitle => TextStyle::new(font_size::XXXL, font_weight::BOLD),
            Self::HeaderSubtitle => TextStyle::new(font_size::BASE, font_weight::MEDIUM),
            Self::StatValue | Self::MetricValue => {
                TextStyle::new(font_size::XXL, font_weight::BOLD)
            }
            Self::StatLabel | Self::MetricTitle => {
                TextStyle::new(font_size::SM, font_weight::NORMAL)
            }
            Self::ActionLabel => TextStyle::new(font_size::BASE, font_weight::SEMI_BOLD),
            Self::MetricSubtitle => TextStyle::new(font_size::XS, font_weight::NORMAL),
        }
    }
}

// =============================================================================
// Typography System
// =============================================================================

/// All text styles at one font scale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Typography {
    /// Font scale multiplier (for accessibility)
    pub scale: f32,
    /// All text styles
    pub styles: HashMap<TypographyVariant, TextStyle>,
}

impl Default for Typography {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Typography {
    /// Create a typography system at the given scale
    pub fn new(scale: f32) -> Self {
        let scale = scale.clamp(MIN_SCALE, MAX_SCALE);
        let styles = TypographyVariant::ALL
            .iter()
            .map(|v| (*v, v.style().scale(scale)))
            .collect();

        Self { scale, styles }
    }

    /// Get a text style by variant
    pub fn get(&self, variant: TypographyVariant) -> TextStyle {
        self.styles
            .get(&variant)
            .cloned()
            .unwrap_or_else(|| variant.style().scale(self.scale))
    }

    /// Set the font scale and recalculate all styles
    pub fn set_scale(&mut self, scale: f32) {
        *self = Self::new(scale);
    }
}
