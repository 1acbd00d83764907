//! Error types for list-store

use thiserror::Error;

use crate::backend::BackendError;

/// Result type alias for list-store operations
pub type Result<T> = std::result::Result<T, ListStoreError>;

/// Errors surfaced by [`crate::PersistentList`]
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ListStoreError {
    /// Stored value under `key` is not a valid serialized list
    #[error("Stored list at '{key}' is not valid: {source}")]
    Parse {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Backend refused the read
    #[error("Failed to read '{key}': {source}")]
    StorageRead {
        key: String,
        #[source]
        source: BackendError,
    },

    /// Backend refused the write (quota exceeded, storage disabled)
    #[error("Failed to write '{key}': {source}")]
    StorageWrite {
        key: String,
        #[source]
        source: BackendError,
    },

    #[error("Failed to serialize list: {0}")]
    Serialize(#[from] serde_json::Error),
}
