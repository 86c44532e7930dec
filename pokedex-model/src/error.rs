//! Error types for loading a dataset.

use thiserror::Error;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors that can occur while loading a dataset.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The data file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The content is not JSON of the expected shape.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}
