//! Error types for notecard-core

use thiserror::Error;

use crate::models::NoteId;

/// Result type alias using notecard-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in notecard-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Note content was empty after trimming
    #[error("Note content must not be empty")]
    EmptyContent,

    /// Note not found
    #[error("Note not found: {0}")]
    NotFound(NoteId),

    /// The hosting store refused or failed an operation
    #[error("Store error: {0}")]
    Store(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
