//! Error types for memo-core

use thiserror::Error;

/// Result type alias using memo-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in memo-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Empty title or content; caught before any remote call
    #[error("Invalid note: {0}")]
    Validation(String),

    /// Referenced note does not exist in the remote collection
    #[error("Note not found: {0}")]
    NotFound(String),

    /// The current identity does not own the referenced note
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Remote collection unreachable or the operation failed remotely
    #[error("Network error: {0}")]
    Network(String),
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Self::Network(error.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Network(format!("malformed document payload: {error}"))
    }
}

impl Error {
    /// Whether this failure is recoverable by resubmitting the form.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}
