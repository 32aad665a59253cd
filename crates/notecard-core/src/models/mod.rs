//! Data models for Notecard

mod note;
mod settings;

pub use note::{is_blank, Note, NoteId};
pub use settings::{DraftPolicy, Settings, ThemeMode};
