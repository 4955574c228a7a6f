//! Login error types
//!
//! Every failure of a login attempt is recoverable: the form stays
//! interactive and the user may resubmit.

use thiserror::Error;

use crate::session::StorageError;

/// Shown when the server rejects the credentials without a message
pub const DEFAULT_REJECTION_MESSAGE: &str = "Invalid email or password.";

/// Shown for transport, parse and storage failures
pub const RETRY_LATER_MESSAGE: &str =
    "An error occurred while trying to log in. Please try again later.";

/// Errors that can end a login attempt
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoginError {
    /// Server answered with a non-success status
    #[error("Login rejected (status {status})")]
    Rejected { status: u16, message: Option<String> },

    /// Request never produced a response
    #[error("Network error: {0}")]
    Transport(String),

    /// Response body could not be decoded
    #[error("Parse error: {0}")]
    Parse(String),

    /// Tokens could not be persisted
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl LoginError {
    /// Text for the inline error region
    pub fn user_message(&self) -> String {
        match self {
            LoginError::Rejected { message, .. } => message
                .clone()
                .unwrap_or_else(|| DEFAULT_REJECTION_MESSAGE.to_string()),
            LoginError::Transport(_) | LoginError::Parse(_) | LoginError::Storage(_) => {
                RETRY_LATER_MESSAGE.to_string()
            }
        }
    }

    pub fn is_rejection(&self) -> bool {
        matches!(self, LoginError::Rejected { .. })
    }
}
