//! Application state management
//!
//! Global state accessible via Dioxus context providers.

use dioxus::prelude::*;

use notecard_core::models::{Note, NoteId, Settings};
use notecard_core::{NoteBook, NoteStore, Result};

use crate::services::StorageService;
use crate::theme::{resolve_theme, ResolvedTheme, ThemeMode};

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// All notes, newest first
    pub notebook: Signal<NoteBook>,
    /// Current search query
    pub search_query: Signal<String>,
    /// Application settings
    pub settings: Signal<Settings>,
    /// Resolved theme (light/dark based on settings and system preference)
    pub theme: Signal<ResolvedTheme>,
    /// File storage, set once the notes file has been read successfully
    pub storage: Signal<Option<StorageService>>,
    /// Whether the initial load has finished
    pub loaded: Signal<bool>,
}

impl AppState {
    /// Notes matching the search query
    #[must_use]
    pub fn visible_notes(&self) -> Vec<Note> {
        self.notebook.read().search(&self.search_query.read())
    }

    /// Add a note from the capture card
    pub fn create_note(&mut self, content: &str) -> Result<Note> {
        let note = self.notebook.write().create(content)?;
        self.persist_notes();
        Ok(note)
    }

    /// Switch theme mode and remember it
    pub fn set_theme_mode(&mut self, mode: ThemeMode) {
        self.theme.set(resolve_theme(mode));
        self.settings.write().theme = mode;

        let settings = self.settings.read().clone();
        let storage = self.storage.read().clone();
        spawn(async move {
            if let Some(storage) = storage {
                if let Err(e) = storage.save_settings(settings).await {
                    tracing::error!("Failed to save settings: {}", e);
                }
            }
        });
    }

    /// Write the current notebook in the background
    fn persist_notes(&self) {
        let Some(storage) = self.storage.read().clone() else {
            return;
        };
        // Numbered here, in mutation order, not when the task first runs
        let snapshot = storage.next_snapshot();
        let book = self.notebook.read().clone();
        spawn(async move {
            if let Err(e) = storage.save_notes(snapshot, book).await {
                tracing::error!("Failed to persist notes: {}", e);
            }
        });
    }
}

impl NoteStore for AppState {
    fn update_note(&mut self, id: &NoteId, content: &str) -> Result<()> {
        self.notebook.write().update_note(id, content)?;
        self.persist_notes();
        Ok(())
    }

    fn delete_note(&mut self, id: &NoteId) -> Result<()> {
        self.notebook.write().delete_note(id)?;
        self.persist_notes();
        Ok(())
    }
}
