//! Error types for opine.

use thiserror::Error;

/// Common error type for opine.
#[derive(Error, Debug)]
pub enum OpineError {
    /// Database error.
    ///
    /// This is a generic database error that wraps errors from any storage
    /// backend. Database errors from sqlx are automatically converted.
    #[error("database error: {0}")]
    Database(String),

    /// Database connection error.
    #[error("database connection error: {0}")]
    DatabaseConnection(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// Comments are disabled for the target post.
    #[error("comments are not allowed on this post")]
    CommentsNotAllowed,

    /// Validation error for user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

// Conversion from sqlx errors
impl From<sqlx::Error> for OpineError {
    fn from(e: sqlx::Error) -> Self {
        OpineError::Database(e.to_string())
    }
}

/// Result type alias for opine operations.
pub type Result<T> = std::result::Result<T, OpineError>;
