//! UI error types

use thiserror::Error;

/// Errors raised while composing pages
#[derive(Debug, Error)]
pub enum UiError {
    /// A grid section declared a column count its kind does not support
    #[error("Invalid column count {columns} for {kind} section")]
    InvalidColumns {
        /// Section kind ("stats" or "actions")
        kind: &'static str,
        /// Declared column count
        columns: u8,
    },

    /// A header gradient needs at least two colors
    #[error("Header gradient needs at least 2 colors, got {0}")]
    InvalidGradient(usize),

    /// A preset name did not match any page archetype
    #[error("Unknown preset page: {0}")]
    UnknownPreset(String),

    /// A page descriptor or config file failed to parse
    #[error("Descriptor error: {0}")]
    Descriptor(#[from] serde_json::Error),

    /// IO error while reading configuration
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
