//! Error types for layout persistence

use thiserror::Error;

/// Errors raised while saving or loading a layout
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for layout persistence
pub type LayoutResult<T> = Result<T, LayoutError>;
