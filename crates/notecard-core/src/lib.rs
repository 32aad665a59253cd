//! notecard-core - Core library for Notecard
//!
//! This crate contains the note model, the note card state machine and the
//! store contract it reports to, plus the in-memory notebook and JSON storage
//! used by the desktop app.

pub mod card;
pub mod dialog;
pub mod error;
pub mod models;
pub mod notebook;
pub mod storage;
pub mod store;
pub mod time;

pub use card::{CardMode, CardState, NoteCard, SaveOutcome};
pub use error::{Error, Result};
pub use models::{Note, NoteId};
pub use notebook::NoteBook;
pub use store::NoteStore;
