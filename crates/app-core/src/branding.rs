//! NutriTrack Branding
//!
//! This module contains all branding constants for NutriTrack.
//! Page chrome and the home dashboard pull their default title and tagline
//! from here so every screen names the product the same way.

/// Application name
pub const APP_NAME: &str = "NutriTrack";

/// Application tagline, shown under the home page title
pub const APP_TAGLINE: &str = "Your Health Dashboard";

/// Application version (from Cargo.toml)
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Brand colors; the theme's primary scale is built on these
pub mod colors {
    /// Primary brand color (emerald)
    pub const PRIMARY: &str = "#10B981";

    /// Darker primary, used for the middle header gradient stop
    pub const PRIMARY_DARK: &str = "#059669";

    /// Deepest primary, used for the last header gradient stop
    pub const PRIMARY_DEEP: &str = "#047857";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_name() {
        assert_eq!(APP_NAME, "NutriTrack");
        assert_eq!(APP_TAGLINE, "Your Health Dashboard");
    }

    #[test]
    fn test_app_version() {
        assert!(!APP_VERSION.is_empty());
        let parts: Vec<&str> = APP_VERSION.split('.').collect();
        assert!(parts.len() >= 2, "Version should have at least major.minor");
    }

    #[test]
    fn test_brand_colors() {
        let color_list = [
            colors::PRIMARY,
            colors::PRIMARY_DARK,
            colors::PRIMARY_DEEP,
        ];

        for color in &color_list {
            assert!(color.starts_with('#'), "Color should start with #: {}", color);
            assert_eq!(color.len(), 7, "Color should be #RRGGBB: {}", color);
        }
    }
}
