//! Design tokens for NutriTrack
//!
//! Spacing, sizing, radius and shadow primitives shared by every renderer.

use serde::{Deserialize, Serialize};

// =============================================================================
// Spacing Tokens
// =============================================================================

/// Spacing scale in pixels
pub mod spacing {
    /// 4px - Extra small
    pub const XS: f32 = 4.0;
    /// 8px - Small
    pub const SM: f32 = 8.0;
    /// 12px - Medium
    pub const MD: f32 = 12.0;
    /// 16px - Large
    pub const LG: f32 = 16.0;
    /// 20px - Extra large
    pub const XL: f32 = 20.0;
    /// 24px - 2x large
    pub const XXL: f32 = 24.0;
    /// 32px - 3x large
    pub const XXXL: f32 = 32.0;

    /// Get spacing value by name
    pub fn get(name: &str) -> Option<f32> {
        match name {
            "xs" => Some(XS),
            "sm" => Some(SM),
            "md" => Some(MD),
            "lg" => Some(LG),
            "xl" => Some(XL),
            "2xl" => Some(XXL),
            "3xl" => Some(XXXL),
            _ => None,
        }
    }
}

// =============================================================================
// Sizing Tokens
// =============================================================================

/// Size tokens for component dimensions
pub mod sizing {
    /// Icon glyph sizes
    pub mod icon {
        /// Medium icon (24px): stat tiles, metric cards, back button
        pub const MD: f32 = 24.0;
        /// Large icon (28px): action tiles
        pub const LG: f32 = 28.0;
        /// Extra large icon (32px): header icon
        pub const XL: f32 = 32.0;
    }

    /// Square containers that hold an icon
    pub mod badge {
        /// Back button (40px)
        pub const SM: f32 = 40.0;
        /// Stat and metric icon badge (48px)
        pub const MD: f32 = 48.0;
        /// Action and header icon badge (56px)
        pub const LG: f32 = 56.0;
    }
}

// =============================================================================
// Border Radius Tokens
// =============================================================================

/// Border radius tokens
pub mod radius {
    /// No radius (0px)
    pub const NONE: f32 = 0.0;
    /// Small radius (4px)
    pub const SM: f32 = 4.0;
    /// Medium radius (8px)
    pub const MD: f32 = 8.0;
    /// Large radius (12px)
    pub const LG: f32 = 12.0;
    /// Extra large radius (16px)
    pub const XL: f32 = 16.0;
}

// =============================================================================
// Shadow Tokens
// =============================================================================

/// Shadow definitions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    /// Horizontal offset
    pub offset_x: f32,
    /// Vertical offset
    pub offset_y: f32,
    /// Blur radius
    pub blur: f32,
    /// Shadow color (with alpha)
    pub color: String,
    /// Android elevation equivalent
    pub elevation: f32,
}

impl Shadow {
    /// Create a new shadow
    pub fn new(offset_x: f32, offset_y: f32, blur: f32, color: &str, elevation: f32) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            color: color.to_string(),
            elevation,
        }
    }
}

/// Shadow presets
pub mod shadows {
    use super::Shadow;

    /// No shadow
    pub fn none() -> Shadow {
        Shadow::new(0.0, 0.0, 0.0, "transparent", 0.0)
    }

    /// Small shadow
    pub fn sm() -> Shadow {
        Shadow::new(0.0, 1.0, 2.0, "rgba(0, 0, 0, 0.05)", 1.0)
    }

    /// Medium shadow, used by every card the page template renders
    pub fn md() -> Shadow {
        Shadow::new(0.0, 2.0, 8.0, "rgba(0, 0, 0, 0.08)", 3.0)
    }
}
