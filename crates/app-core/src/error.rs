//! Error types for core screen logic

use thiserror::Error;

/// Errors raised by screen data handling
#[derive(Debug, Error)]
pub enum CoreError {
    /// A data source failed to produce data
    #[error("Data source error: {0}")]
    Source(String),

    /// Data was requested before any load completed
    #[error("Screen data not loaded")]
    NotLoaded,
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
