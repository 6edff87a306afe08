//! UI configuration
//!
//! User-facing presentation settings, stored as camelCase JSON:
//!
//! ```json
//! {
//!   "theme": "dark",
//!   "fontScale": 1.25,
//!   "headerGradient": ["#0EA5E9", "#0284C7"],
//!   "strictColumns": false
//! }
//! ```
//!
//! Every field is optional; a missing file yields the defaults.

use crate::error::{Result, UiError};
use crate::template::HeaderGradient;
use crate::theme::{get_theme, Color, Theme, ThemeName};
use crate::typography::{Typography, MAX_SCALE, MIN_SCALE};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;

/// Presentation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UiConfig {
    /// Active theme
    pub theme: ThemeName,
    /// Font scale multiplier
    pub font_scale: f32,
    /// Header gradient override for pages that do not set their own
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_gradient: Option<Vec<Color>>,
    /// Reject illegal descriptor column counts instead of falling back to 2
    pub strict_columns: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: ThemeName::Light,
            font_scale: 1.0,
            header_gradient: None,
            strict_columns: true,
        }
    }
}

impl UiConfig {
    /// Parse and validate a JSON config
    pub fn from_json_str(json: &str) -> Result<Self> {
        let mut config: UiConfig = serde_json::from_str(json)?;
        config.font_scale = config.font_scale.clamp(MIN_SCALE, MAX_SCALE);
        if let Some(colors) = &config.header_gradient {
            HeaderGradient::new(colors.iter().cloned())?;
        }
        Ok(config)
    }

    /// Load from a file, falling back to defaults when it does not exist
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading UI config from {}", path.display());

        match fs::read_to_string(path).await {
            Ok(contents) => Self::from_json_str(&contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!("UI config not found at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(UiError::Io(e)),
        }
    }

    /// Write to a file as pretty JSON
    pub async fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).await?;
        Ok(())
    }

    /// Resolved theme
    pub fn theme(&self) -> Theme {
        get_theme(self.theme)
    }

    /// Typography at the configured scale
    pub fn typography(&self) -> Typography {
        Typography::new(self.font_scale)
    }

    /// Gradient override, when one with enough colors is set
    pub fn header_gradient(&self) -> Option<HeaderGradient> {
        self.header_gradient
            .as_ref()
            .and_then(|colors| HeaderGradient::new(colors.iter().cloned()).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // ==========================================================================
    // Parsing Tests
    // ==========================================================================

    #[test]
    fn test_defaults() {
        let config = UiConfig::default();
        assert_eq!(config.theme, ThemeName::Light);
        assert_eq!(config.font_scale, 1.0);
        assert!(config.strict_columns);
        assert!(config.header_gradient().is_none());
    }

    #[test]
    fn test_from_json_partial() {
        let config = UiConfig::from_json_str(r#"{"theme": "dark"}"#).unwrap();
        assert_eq!(config.theme, ThemeName::Dark);
        assert_eq!(config.font_scale, 1.0);
        assert!(config.strict_columns);
        assert!(config.theme().is_dark());
    }

    #[test]
    fn test_from_json_full() {
        let config = UiConfig::from_json_str(
            r##"{
                "theme": "light",
                "fontScale": 1.25,
                "headerGradient": ["#0EA5E9", "#0284C7"],
                "strictColumns": false
            }"##,
        )
        .unwrap();

        assert_eq!(config.font_scale, 1.25);
        assert!(!config.strict_columns);
        assert_eq!(
            config.header_gradient().unwrap().colors(),
            &["#0EA5E9".to_string(), "#0284C7".to_string()]
        );
        assert_eq!(config.typography().scale, 1.25);
    }

    #[test]
    fn test_font_scale_clamped() {
        let config = UiConfig::from_json_str(r#"{"fontScale": 5.0}"#).unwrap();
        assert_eq!(config.font_scale, MAX_SCALE);
    }

    #[test]
    fn test_single_color_gradient_rejected() {
        let result = UiConfig::from_json_str(r##"{"headerGradient": ["#0EA5E9"]}"##);
        assert!(matches!(result, Err(UiError::InvalidGradient(1))));
    }

    #[test]
    fn test_malformed_json() {
        let result = UiConfig::from_json_str("{ not json");
        assert!(matches!(result, Err(UiError::Descriptor(_))));
    }

    // ==========================================================================
    // File Tests
    // ==========================================================================

    #[tokio::test]
    async fn test_load_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = UiConfig::load(dir.path().join("ui.json")).await.unwrap();
        assert_eq!(config, UiConfig::default());
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ui.json");

        let config = UiConfig {
            theme: ThemeName::Dark,
            font_scale: 1.5,
            header_gradient: Some(vec!["#111111".into(), "#222222".into()]),
            strict_columns: false,
        };
        config.save(&path).await.unwrap();

        let loaded = UiConfig::load(&path).await.unwrap();
        assert_eq!(loaded, config);
    }
}
