//! Error types for the todo core.

use uuid::Uuid;

/// Persistence errors — the only fallible seam in the core.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage backend unavailable: {0}")]
    Backend(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Duplicate todo id: {id}")]
    DuplicateId { id: Uuid },

    #[error("Todo not found: {id}")]
    NotFound { id: Uuid },
}

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, StorageError>;
