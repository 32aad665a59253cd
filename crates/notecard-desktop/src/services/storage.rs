//! Storage service for the desktop application

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use notecard_core::error::{Error, Result};
use notecard_core::models::Settings;
use notecard_core::storage::{NotesFile, SettingsFile};
use notecard_core::NoteBook;

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "NOTECARD_DATA_DIR";

/// Service for reading and writing the notes and settings files
///
/// File IO runs on tokio's blocking pool. Note snapshots are numbered by
/// [`StorageService::next_snapshot`] when they are taken, and a snapshot older
/// than one already written is skipped.
#[derive(Clone, Debug)]
pub struct StorageService {
    notes: NotesFile,
    settings: SettingsFile,
    queued: Arc<AtomicU64>,
    written: Arc<Mutex<u64>>,
}

impl StorageService {
    /// Service rooted at the configured data directory
    pub fn from_env() -> Self {
        let dir = Self::default_data_dir();
        tracing::info!("Using data directory: {}", dir.display());
        Self::in_dir(dir)
    }

    /// Service rooted at `dir`
    pub fn in_dir(dir: PathBuf) -> Self {
        Self {
            notes: NotesFile::in_dir(&dir),
            settings: SettingsFile::in_dir(&dir),
            queued: Arc::new(AtomicU64::new(0)),
            written: Arc::new(Mutex::new(0)),
        }
    }

    /// `NOTECARD_DATA_DIR` if set, otherwise the platform data directory
    pub fn default_data_dir() -> PathBuf {
        if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|dir| !dir.is_empty()) {
            return PathBuf::from(dir);
        }

        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("notecard")
    }

    pub async fn load_notes(&self) -> Result<NoteBook> {
        let file = self.notes.clone();
        run_blocking(move || file.load()).await
    }

    /// Sequence number for a notebook snapshot taken now
    pub fn next_snapshot(&self) -> u64 {
        self.queued.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Write the notebook snapshot numbered `snapshot`
    pub async fn save_notes(&self, snapshot: u64, book: NoteBook) -> Result<()> {
        let file = self.notes.clone();
        let written = Arc::clone(&self.written);

        run_blocking(move || {
            let mut last = written
                .lock()
                .map_err(|_| Error::Store("notes writer lock poisoned".to_string()))?;
            if *last > snapshot {
                tracing::debug!("Skipping stale notes snapshot {}", snapshot);
                return Ok(());
            }
            file.save(&book)?;
            *last = snapshot;
            Ok(())
        })
        .await
    }

    pub async fn load_settings(&self) -> Result<Settings> {
        let file = self.settings.clone();
        run_blocking(move || file.load()).await
    }

    pub async fn save_settings(&self, settings: Settings) -> Result<()> {
        let file = self.settings.clone();
        run_blocking(move || file.save(&settings)).await
    }
}

async fn run_blocking<T, F>(task: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T> + Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|e| Error::Store(format!("storage task failed: {e}")))?
}
