use thiserror::Error;

/// Failure to reach or write the key-value backend.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StorageError {
    #[error("storage backend is not available")]
    Unavailable,

    #[error("failed to write {key}: {reason}")]
    Write { key: String, reason: String },

    #[error("failed to serialize user record: {0}")]
    Serialize(String),
}
