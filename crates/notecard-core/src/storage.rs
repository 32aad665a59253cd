//! JSON files for notes and settings.
//!
//! A missing file loads as the default value. Writes go to a sibling temp
//! file first and are renamed into place.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;
use crate::models::{Note, Settings};
use crate::notebook::NoteBook;

/// Notes file name inside the data directory
pub const NOTES_FILE_NAME: &str = "notes.json";
/// Settings file name inside the data directory
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Persisted notebook
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesFile {
    path: PathBuf,
}

impl NotesFile {
    /// Notes file at an explicit path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Notes file inside `dir`
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(NOTES_FILE_NAME))
    }

    /// Location on disk
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the notebook, empty if the file does not exist yet
    pub fn load(&self) -> Result<NoteBook> {
        let notes: Vec<Note> = load_json(&self.path)?;
        tracing::debug!("Loaded {} notes from {}", notes.len(), self.path.display());
        Ok(NoteBook::from_notes(notes))
    }

    /// Write the whole notebook
    pub fn save(&self, book: &NoteBook) -> Result<()> {
        save_json(&self.path, book)?;
        tracing::debug!("Saved {} notes to {}", book.len(), self.path.display());
        Ok(())
    }
}

/// Persisted settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsFile {
    path: PathBuf,
}

impl SettingsFile {
    /// Settings file at an explicit path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Settings file inside `dir`
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(SETTINGS_FILE_NAME))
    }

    /// Read settings, defaults if the file does not exist yet
    pub fn load(&self) -> Result<Settings> {
        load_json(&self.path)
    }

    /// Write settings
    pub fn save(&self, settings: &Settings) -> Result<()> {
        save_json(&self.path, settings)
    }
}

fn load_json<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    match fs::read_to_string(path) {
        Ok(raw) => Ok(serde_json::from_str(&raw)?),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(T::default()),
        Err(e) => Err(e.into()),
    }
}

fn save_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let payload = serde_json::to_string_pretty(value)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, payload)?;
    fs::rename(&tmp, path)?;
    Ok(())
}
