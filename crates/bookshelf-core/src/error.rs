//! Error types for the bookshelf library.
//!
//! Every asynchronous call site in this crate converts failures into one of
//! these variants; the view layer maps them to JSON-RPC error codes.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for bookshelf operations.
#[derive(Debug, Error)]
pub enum BookshelfError {
    // Network errors
    #[error("Network error: {message}")]
    Network {
        message: String,
        /// Optional cause description
        cause: Option<String>,
    },

    #[error("Request timeout after {0:?}")]
    Timeout(std::time::Duration),

    // File system errors
    #[error("IO error at {path:?}: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    // Serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    // Catalog errors
    #[error("Book not found: {book_id}")]
    BookNotFound { book_id: String },

    // Validation errors
    #[error("Invalid shelf: {value}")]
    InvalidShelf { value: String },

    #[error("Invalid params: {message}")]
    InvalidParams { message: String },

    // Generic errors
    #[error("{0}")]
    Other(String),
}

/// Result type alias for bookshelf operations.
pub type Result<T> = std::result::Result<T, BookshelfError>;

// Conversion implementations for common error types

impl From<std::io::Error> for BookshelfError {
    fn from(err: std::io::Error) -> Self {
        BookshelfError::Io {
            message: err.to_string(),
            path: None,
            source: Some(err),
        }
    }
}

impl From<serde_json::Error> for BookshelfError {
    fn from(err: serde_json::Error) -> Self {
        BookshelfError::Json {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl From<reqwest::Error> for BookshelfError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            BookshelfError::Timeout(std::time::Duration::from_secs(0))
        } else {
            BookshelfError::Network {
                message: err.to_string(),
                cause: Some(err.to_string()),
            }
        }
    }
}

impl BookshelfError {
    /// Convert to a JSON-RPC error code.
    ///
    /// Standard JSON-RPC error codes:
    /// - -32602: Invalid params
    /// - -32603: Internal error
    ///
    /// Custom error codes (application-defined, -32000 to -32099):
    /// - -32000: Network/connectivity error
    /// - -32002: Book not found
    /// - -32005: Validation error
    pub fn to_rpc_error_code(&self) -> i32 {
        match self {
            BookshelfError::Network { .. } | BookshelfError::Timeout(_) => -32000,

            BookshelfError::BookNotFound { .. } => -32002,

            BookshelfError::InvalidShelf { .. } => -32005,

            BookshelfError::InvalidParams { .. } => -32602,

            // All other errors are internal errors
            _ => -32603,
        }
    }

    /// Check if this error should trigger a retry.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            BookshelfError::Network { .. } | BookshelfError::Timeout(_)
        )
    }
}
