//! UI Components
//!
//! Reusable UI components for the desktop application.

mod button;
mod dialog;
mod header;
mod new_note;
mod note_card;
mod note_list;
mod search_bar;

pub use header::Header;
pub use new_note::NewNoteCard;
pub use note_card::NoteCard;
pub use note_list::NoteList;
pub use search_bar::SearchBar;
