//! Design system and theme provider for NutriTrack
//!
//! Every renderer reads its colors from a [`Theme`]: the color scales
//! (primary, neutral, success, warning, error), the chart accents used by
//! nutrition metrics, and the surface colors of the page chrome.
//!
//! # Themes
//!
//! Two themes are supported:
//! - Light: white cards on a near-white background
//! - Dark: dark cards on a near-black background
//!
//! Accent colors (the scales at 500/600 and the chart colors) are identical in
//! both themes, which is what lets section builders pick colors from the
//! [`colors`] constants without knowing the active theme.
//!
//! # Usage
//!
//! ```rust
//! use app_ui::theme::{get_theme, ThemeName};
//!
//! let theme = get_theme(ThemeName::Light);
//! let header = theme.default_header_gradient();
//! assert_eq!(header.stops.len(), 3);
//! ```

use serde::{Deserialize, Serialize};

// =============================================================================
// Color Types
// =============================================================================

/// A color represented as a hex string (e.g., "#FFFFFF") or an rgba() string
pub type Color = String;

// =============================================================================
// Accent Colors
// =============================================================================

/// Accent colors shared by all themes
pub mod colors {
    use app_core::branding::colors as brand;

    /// Primary 100 (icon badge fallback background)
    pub const PRIMARY_100: &str = "#D1FAE5";
    /// Primary 500 (brand emerald)
    pub const PRIMARY_500: &str = brand::PRIMARY;
    /// Primary 600 (icon fallback color)
    pub const PRIMARY_600: &str = brand::PRIMARY_DARK;
    /// Primary 700
    pub const PRIMARY_700: &str = brand::PRIMARY_DEEP;

    /// Success 500
    pub const SUCCESS_500: &str = "#22C55E";
    /// Success 600
    pub const SUCCESS_600: &str = "#16A34A";

    /// Warning 500
    pub const WARNING_500: &str = "#F59E0B";

    /// Error 500
    pub const ERROR_500: &str = "#EF4444";
    /// Error 600
    pub const ERROR_600: &str = "#DC2626";

    /// Neutral 600 (muted gray)
    pub const NEUTRAL_600: &str = "#4B5563";

    /// Chart color for protein
    pub const CHART_PROTEIN: &str = "#8B5CF6";
    /// Chart color for carbohydrates
    pub const CHART_CARBS: &str = "#F59E0B";
    /// Chart color for fats
    pub const CHART_FATS: &str = "#10B981";
    /// Chart color for water
    pub const CHART_WATER: &str = "#3B82F6";

    /// White
    pub const WHITE: &str = "#FFFFFF";
}

// =============================================================================
// Color Scale
// =============================================================================

/// A color scale with 10 stops from lightest (50) to darkest (900)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorScale {
    /// Very light (50)
    pub s50: Color,
    /// Light (100)
    pub s100: Color,
    /// Light-medium (200)
    pub s200: Color,
    /// Medium-light (300)
    pub s300: Color,
    /// Medium (400)
    pub s400: Color,
    /// Base (500)
    pub s500: Color,
    /// Medium-dark (600)
    pub s600: Color,
    /// Dark-medium (700)
    pub s700: Color,
    /// Dark (800)
    pub s800: Color,
    /// Darkest (900)
    pub s900: Color,
}

impl ColorScale {
    /// Build a scale from its ten stops, lightest first
    pub fn from_stops(stops: [&str; 10]) -> Self {
        let [s50, s100, s200, s300, s400, s500, s600, s700, s800, s900] = stops.map(String::from);
        Self {
            s50,
            s100,
            s200,
            s300,
            s400,
            s500,
            s600,
            s700,
            s800,
            s900,
        }
    }

    /// Get a color by its numeric stop (50, 100, ..., 900)
    pub fn get(&self, stop: u16) -> Option<&Color> {
        match stop {
            50 => Some(&self.s50),
            100 => Some(&self.s100),
            200 => Some(&self.s200),
            300 => Some(&self.s300),
            400 => Some(&self.s400),
            500 => Some(&self.s500),
            600 => Some(&self.s600),
            700 => Some(&self.s700),
            800 => Some(&self.s800),
            900 => Some(&self.s900),
            _ => None,
        }
    }

    /// Get a color by stop, falling back to the 500 stop
    pub fn stop(&self, stop: u16) -> &str {
        self.get(stop).unwrap_or(&self.s500)
    }

    /// The same scale, darkest first
    pub fn reversed(&self) -> Self {
        Self {
            s50: self.s900.clone(),
            s100: self.s800.clone(),
            s200: self.s700.clone(),
            s300: self.s600.clone(),
            s400: self.s500.clone(),
            s500: self.s400.clone(),
            s600: self.s300.clone(),
            s700: self.s200.clone(),
            s800: self.s100.clone(),
            s900: self.s50.clone(),
        }
    }
}

/// Chart accent colors for macro nutrients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartColors {
    /// Protein
    pub protein: Color,
    /// Carbohydrates
    pub carbs: Color,
    /// Fats
    pub fats: Color,
    /// Water
    pub water: Color,
}

impl Default for ChartColors {
    fn default() -> Self {
        Self {
            protein: colors::CHART_PROTEIN.to_string(),
            carbs: colors::CHART_CARBS.to_string(),
            fats: colors::CHART_FATS.to_string(),
            water: colors::CHART_WATER.to_string(),
        }
    }
}

/// Complete color palette for a theme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    /// Primary brand scale (emerald)
    pub primary: ColorScale,
    /// Neutral grays
    pub neutral: ColorScale,
    /// Success greens
    pub success: ColorScale,
    /// Warning ambers
    pub warning: ColorScale,
    /// Error reds
    pub error: ColorScale,
    /// Chart accents
    pub charts: ChartColors,
}

fn primary_scale() -> ColorScale {
    ColorScale::from_stops([
        "#ECFDF5",
        colors::PRIMARY_100,
        "#A7F3D0",
        "#6EE7B7",
        "#34D399",
        colors::PRIMARY_500,
        colors::PRIMARY_600,
        colors::PRIMARY_700,
        "#065F46",
        "#064E3B",
    ])
}

fn neutral_scale() -> ColorScale {
    ColorScale::from_stops([
        "#F9FAFB",
        "#F3F4F6",
        "#E5E7EB",
        "#D1D5DB",
        "#9CA3AF",
        "#6B7280",
        colors::NEUTRAL_600,
        "#374151",
        "#1F2937",
        "#111827",
    ])
}

fn accent_palette(neutral: ColorScale) -> Palette {
    Palette {
        primary: primary_scale(),
        neutral,
        success: ColorScale::from_stops([
            "#F0FDF4",
            "#DCFCE7",
            "#BBF7D0",
            "#86EFAC",
            "#4ADE80",
            colors::SUCCESS_500,
            colors::SUCCESS_600,
            "#15803D",
            "#166534",
            "#14532D",
        ]),
        warning: ColorScale::from_stops([
            "#FFFBEB",
            "#FEF3C7",
            "#FDE68A",
            "#FCD34D",
            "#FBBF24",
            colors::WARNING_500,
            "#D97706",
            "#B45309",
            "#92400E",
            "#78350F",
        ]),
        error: ColorScale::from_stops([
            "#FEF2F2",
            "#FEE2E2",
            "#FECACA",
            "#FCA5A5",
            "#F87171",
            colors::ERROR_500,
            colors::ERROR_600,
            "#B91C1C",
            "#991B1B",
            "#7F1D1D",
        ]),
        charts: ChartColors::default(),
    }
}

// =============================================================================
// Surface Colors
// =============================================================================

/// Colors of page surfaces and chrome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceColors {
    /// Screen background
    pub background: Color,
    /// Card background (stat tiles, action tiles, metric cards)
    pub card: Color,
    /// Primary text on cards
    pub text: Color,
    /// Secondary text (labels, titles)
    pub text_muted: Color,
    /// Tertiary text (subtitles)
    pub text_subtle: Color,
    /// Text and icons on the header gradient
    pub on_header: Color,
    /// Subtitle text on the header gradient
    pub on_header_muted: Color,
    /// Translucent fill behind header buttons and the header icon
    pub header_overlay: Color,
}

// =============================================================================
// Gradients
// =============================================================================

/// A gradient stop with position and color
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Position from 0.0 to 1.0
    pub position: f32,
    /// Color at this position
    pub color: Color,
}

/// A linear gradient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gradient {
    /// Gradient stops
    pub stops: Vec<GradientStop>,
}

impl Gradient {
    /// Create a gradient with explicit stop positions
    pub fn new(stops: Vec<(f32, &str)>) -> Self {
        Self {
            stops: stops
                .into_iter()
                .map(|(pos, color)| GradientStop {
                    position: pos,
                    color: color.to_string(),
                })
                .collect(),
        }
    }

    /// Spread colors evenly from 0.0 to 1.0
    pub fn from_colors<S: AsRef<str>>(colors: &[S]) -> Self {
        let last = colors.len().saturating_sub(1).max(1) as f32;
        Self {
            stops: colors
                .iter()
                .enumerate()
                .map(|(i, color)| GradientStop {
                    position: i as f32 / last,
                    color: color.as_ref().to_string(),
                })
                .collect(),
        }
    }

    /// Colors of the stops in order
    pub fn colors(&self) -> Vec<&str> {
        self.stops.iter().map(|stop| stop.color.as_str()).collect()
    }
}

// =============================================================================
// Theme Definition
// =============================================================================

/// Theme name enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Light theme
    #[default]
    Light,
    /// Dark theme
    Dark,
}

impl ThemeName {
    /// Get the color scheme name
    pub fn color_scheme(&self) -> &'static str {
        match self {
            ThemeName::Light => "light",
            ThemeName::Dark => "dark",
        }
    }
}

impl std::fmt::Display for ThemeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeName::Light => write!(f, "Light"),
            ThemeName::Dark => write!(f, "Dark"),
        }
    }
}

impl std::str::FromStr for ThemeName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ThemeName::Light),
            "dark" => Ok(ThemeName::Dark),
            _ => Err(format!("Unknown theme: {}", s)),
        }
    }
}

/// Complete theme definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Theme name
    pub name: ThemeName,
    /// Color palette
    pub palette: Palette,
    /// Surface and chrome colors
    pub surface: SurfaceColors,
}

impl Theme {
    /// Check if this is a dark theme
    pub fn is_dark(&self) -> bool {
        matches!(self.name, ThemeName::Dark)
    }

    /// Get a primary color by stop (50-900), falling back to 500
    pub fn primary(&self, stop: u16) -> &str {
        self.palette.primary.stop(stop)
    }

    /// Get a neutral color by stop (50-900), falling back to 500
    pub fn neutral(&self, stop: u16) -> &str {
        self.palette.neutral.stop(stop)
    }

    /// Three-stop brand gradient used when a page does not choose its own
    pub fn default_header_gradient(&self) -> Gradient {
        Gradient::from_colors(&[self.primary(500), self.primary(600), self.primary(700)])
    }
}

/// Create the light theme
pub fn light_theme() -> Theme {
    let palette = accent_palette(neutral_scale());
    let surface = SurfaceColors {
        background: palette.neutral.s50.clone(),
        card: colors::WHITE.to_string(),
        text: palette.neutral.s900.clone(),
        text_muted: palette.neutral.s600.clone(),
        text_subtle: palette.neutral.s500.clone(),
        on_header: colors::WHITE.to_string(),
        on_header_muted: "rgba(255, 255, 255, 0.9)".to_string(),
        header_overlay: "rgba(255, 255, 255, 0.2)".to_string(),
    };

    Theme {
        name: ThemeName::Light,
        palette,
        surface,
    }
}

/// Create the dark theme
///
/// The neutral scale is mirrored so that `neutral(900)` stays the
/// highest-contrast text color against the background.
pub fn dark_theme() -> Theme {
    let palette = accent_palette(neutral_scale().reversed());
    let surface = SurfaceColors {
        background: "#0B0F14".to_string(),
        card: palette.neutral.s100.clone(),
        text: palette.neutral.s900.clone(),
        text_muted: palette.neutral.s600.clone(),
        text_subtle: palette.neutral.s500.clone(),
        on_header: colors::WHITE.to_string(),
        on_header_muted: "rgba(255, 255, 255, 0.85)".to_string(),
        header_overlay: "rgba(255, 255, 255, 0.15)".to_string(),
    };

    Theme {
        name: ThemeName::Dark,
        palette,
        surface,
    }
}

/// Get a theme by name
pub fn get_theme(name: ThemeName) -> Theme {
    match name {
        ThemeName::Light => light_theme(),
        ThemeName::Dark => dark_theme(),
    }
}
