//! In-memory note collection backing the app's card list.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{is_blank, Note, NoteId};
use crate::store::NoteStore;

/// Notes ordered newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteBook {
    notes: Vec<Note>,
}

impl NoteBook {
    /// Empty notebook
    #[must_use]
    pub const fn new() -> Self {
        Self { notes: Vec::new() }
    }

    /// Build from existing notes, restoring newest-first order
    #[must_use]
    pub fn from_notes(mut notes: Vec<Note>) -> Self {
        notes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Self { notes }
    }

    /// Create a note and put it at the front
    pub fn create(&mut self, content: &str) -> Result<Note> {
        if is_blank(content) {
            return Err(Error::EmptyContent);
        }

        let note = Note::new(content);
        tracing::info!("Created note: {}", note.id);
        self.notes.insert(0, note.clone());
        Ok(note)
    }

    /// Get a note by ID
    #[must_use]
    pub fn get(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == *id)
    }

    /// All notes, newest first
    pub fn iter(&self) -> impl Iterator<Item = &Note> {
        self.notes.iter()
    }

    /// Number of notes
    #[must_use]
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Whether there are no notes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Notes whose content contains `query`, ignoring case.
    /// A blank query matches everything.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<Note> {
        let query = query.trim().to_lowercase();
        self.notes
            .iter()
            .filter(|note| query.is_empty() || note.content.to_lowercase().contains(&query))
            .cloned()
            .collect()
    }
}

impl NoteStore for NoteBook {
    fn update_note(&mut self, id: &NoteId, content: &str) -> Result<()> {
        if is_blank(content) {
            return Err(Error::EmptyContent);
        }

        let note = self
            .notes
            .iter_mut()
            .find(|note| note.id == *id)
            .ok_or(Error::NotFound(*id))?;
        note.content = content.to_string();
        tracing::info!("Updated note: {}", id);
        Ok(())
    }

    fn delete_note(&mut self, id: &NoteId) -> Result<()> {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != *id);
        if self.notes.len() == before {
            return Err(Error::NotFound(*id));
        }
        tracing::info!("Deleted note: {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn contents(book: &NoteBook) -> Vec<&str> {
        book.iter().map(|note| note.content.as_str()).collect()
    }

    #[test]
    fn create_puts_newest_first() {
        let mut book = NoteBook::new();
        book.create("first").unwrap();
        book.create("second").unwrap();
        assert_eq!(contents(&book), vec!["second", "first"]);
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn create_rejects_blank() {
        let mut book = NoteBook::new();
        assert!(matches!(book.create("  \n"), Err(Error::EmptyContent)));
        assert!(book.is_empty());
    }

    #[test]
    fn from_notes_sorts_by_creation() {
        let old = Note::with_id(NoteId::new(), "old", 1);
        let new = Note::with_id(NoteId::new(), "new", 2);
        let book = NoteBook::from_notes(vec![old, new]);
        assert_eq!(contents(&book), vec!["new", "old"]);
    }

    #[test]
    fn update_replaces_content() {
        let mut book = NoteBook::new();
        let note = book.create("Buy milk").unwrap();
        book.update_note(&note.id, "Buy milk and eggs").unwrap();
        assert_eq!(book.get(&note.id).unwrap().content, "Buy milk and eggs");
        assert_eq!(book.get(&note.id).unwrap().created_at, note.created_at);
    }

    #[test]
    fn update_unknown_and_blank_fail() {
        let mut book = NoteBook::new();
        let note = book.create("Buy milk").unwrap();
        assert!(matches!(
            book.update_note(&NoteId::new(), "x"),
            Err(Error::NotFound(_))
        ));
        assert!(matches!(
            book.update_note(&note.id, " "),
            Err(Error::EmptyContent)
        ));
        assert_eq!(book.get(&note.id).unwrap().content, "Buy milk");
    }

    #[test]
    fn delete_removes_once() {
        let mut book = NoteBook::new();
        let note = book.create("Buy milk").unwrap();
        book.delete_note(&note.id).unwrap();
        assert!(book.get(&note.id).is_none());
        assert!(matches!(
            book.delete_note(&note.id),
            Err(Error::NotFound(id)) if id == note.id
        ));
    }

    #[test]
    fn search_is_case_insensitive() {
        let mut book = NoteBook::new();
        book.create("Buy MILK").unwrap();
        book.create("Call mom").unwrap();

        let hits = book.search("milk");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].content, "Buy MILK");
        assert_eq!(book.search("   ").len(), 2);
    }
}
