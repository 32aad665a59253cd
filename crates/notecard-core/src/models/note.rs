//! Note model

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A unique identifier for a note, using UUID v7 (time-sortable)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoteId(Uuid);

impl NoteId {
    /// Create a new unique note ID using UUID v7
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A note as owned by the store.
///
/// Cards only ever read notes; identity and timestamps are assigned here,
/// on the store side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Unique identifier
    pub id: NoteId,
    /// Plain text content
    pub content: String,
    /// Creation timestamp (Unix ms)
    pub created_at: i64,
}

impl Note {
    /// Create a new note with the given content, stamped with a fresh id and
    /// the current time
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self::with_id(
            NoteId::new(),
            content,
            chrono::Utc::now().timestamp_millis(),
        )
    }

    /// Build a note from already-known parts
    #[must_use]
    pub fn with_id(id: NoteId, content: impl Into<String>, created_at: i64) -> Self {
        Self {
            id,
            content: content.into(),
            created_at,
        }
    }
}

/// True when `text` holds nothing but whitespace.
#[must_use]
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
