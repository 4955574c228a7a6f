//! Token storage error types

use thiserror::Error;

/// Errors raised by a [`TokenStore`](super::TokenStore) backend
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The backing store cannot be reached (e.g. storage disabled by the browser)
    #[error("Token storage unavailable")]
    Unavailable,

    /// Writing a key failed (quota exceeded, private mode, ...)
    #[error("Failed to write {key}: {reason}")]
    Write { key: String, reason: String },

    /// Reading a key failed
    #[error("Failed to read {key}: {reason}")]
    Read { key: String, reason: String },
}

/// Result type for token storage operations
pub type StorageResult<T> = Result<T, StorageError>;
