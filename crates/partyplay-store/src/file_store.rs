//! Profile-directory implementation of the `KeyValueStore` trait.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use partyplay_core::error::DomainError;
use partyplay_core::storage::KeyValueStore;
use tracing::{debug, warn};

use crate::schema::{PROGRESS_FILE, PROGRESS_TEMP_FILE, ProgressDocument};

/// Stores every key in `{profile_dir}/progress.json`.
///
/// Writes go to a scratch file first and are renamed into place, so a
/// crash mid-write leaves the previous document intact.
#[derive(Debug)]
pub struct FileStore {
    profile_dir: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    /// Creates a store rooted at `profile_dir`. The directory is created on
    /// first write.
    #[must_use]
    pub fn new(profile_dir: impl Into<PathBuf>) -> Self {
        Self {
            profile_dir: profile_dir.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Returns the profile directory.
    #[must_use]
    pub fn profile_dir(&self) -> &Path {
        &self.profile_dir
    }

    fn path(&self) -> PathBuf {
        self.profile_dir.join(PROGRESS_FILE)
    }

    fn read_document(&self) -> Result<ProgressDocument, DomainError> {
        let path = self.path();
        match std::fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).map_err(|e| {
                DomainError::Infrastructure(format!("{}: {e}", path.display()))
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(ProgressDocument::default()),
            Err(e) => Err(DomainError::Infrastructure(format!("{}: {e}", path.display()))),
        }
    }

    fn write_document(&self, document: &ProgressDocument) -> Result<(), DomainError> {
        let io_error = |e: std::io::Error| DomainError::Infrastructure(e.to_string());
        std::fs::create_dir_all(&self.profile_dir).map_err(io_error)?;
        let raw = serde_json::to_vec_pretty(document)
            .map_err(|e| DomainError::Infrastructure(e.to_string()))?;
        let temp = self.profile_dir.join(PROGRESS_TEMP_FILE);
        std::fs::write(&temp, raw).map_err(io_error)?;
        std::fs::rename(&temp, self.path()).map_err(io_error)
    }

    fn update(&self, apply: impl FnOnce(&mut ProgressDocument)) -> Result<(), DomainError> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|e| DomainError::Infrastructure(e.to_string()))?;
        let mut document = self.read_document().unwrap_or_else(|e| {
            warn!(error = %e, "replacing unreadable progress file");
            ProgressDocument::default()
        });
        apply(&mut document);
        self.write_document(&document)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        Ok(self.read_document()?.entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), DomainError> {
        self.update(|document| {
            document.entries.insert(key.to_owned(), value.to_owned());
        })?;
        debug!(key, value, "stored");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), DomainError> {
        self.update(|document| {
            document.entries.remove(key);
        })?;
        debug!(key, "removed");
        Ok(())
    }
}
