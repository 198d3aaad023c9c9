//! Error types for tourlog.

use thiserror::Error;

/// Result type alias using tourlog's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for tourlog operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation failed (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Visit not found
    #[error("Visit not found: {0}")]
    VisitNotFound(uuid::Uuid),

    /// Note not found
    #[error("Note not found: {0}")]
    NoteNotFound(uuid::Uuid),

    /// Photo not found
    #[error("Photo not found: {0}")]
    PhotoNotFound(uuid::Uuid),

    /// Report not found
    #[error("Report not found: {0}")]
    ReportNotFound(uuid::Uuid),

    /// Object storage operation failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// File I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
