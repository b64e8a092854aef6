use thiserror::Error;

use crate::Version;

/// Errors that can occur when interacting with the list store.
#[derive(Debug, Error)]
pub enum ListStoreError {
    /// The snapshot being saved was loaded from a version that is no longer
    /// current: a concurrent command saved first.
    #[error("version conflict: snapshot at version {expected}, store at version {actual}")]
    VersionConflict { expected: Version, actual: Version },

    /// The storage backend failed.
    #[error("storage backend error: {0}")]
    Backend(String),

    /// A serialization/deserialization error occurred.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for list store operations.
pub type Result<T> = std::result::Result<T, ListStoreError>;
