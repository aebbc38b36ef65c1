//! Error types for builder operations.

use thiserror::Error;

/// Result type for builder operations.
pub type BuilderResult<T> = Result<T, BuilderError>;

/// Errors that can occur in builder operations.
#[derive(Debug, Error)]
pub enum BuilderError {
    /// Block not found in the page.
    #[error("Block not found: {0}")]
    BlockNotFound(String),

    /// Text-edit mode was requested for a block that is not selected.
    #[error("Block must be selected before editing: {0}")]
    EditWithoutSelection(String),

    /// Page serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
