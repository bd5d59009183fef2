//! Cursor persistence over a [`KeyValueStore`].
//!
//! Storage is best effort: unreadable or malformed values read as absent,
//! and failed writes are logged and dropped.

use std::sync::Arc;

use partyplay_core::storage::KeyValueStore;
use tracing::{debug, warn};

use crate::domain::progress_key::ProgressKey;

/// Loads, saves and clears persisted cursors.
#[derive(Clone)]
pub struct ProgressStore {
    store: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for ProgressStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressStore").finish_non_exhaustive()
    }
}

impl ProgressStore {
    /// Wraps a key-value store.
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// The stored cursor for `key`, or `None` when nothing usable is stored.
    #[must_use]
    pub fn load(&self, key: &ProgressKey) -> Option<usize> {
        let storage_key = key.storage_key();
        let raw = match self.store.get(&storage_key) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!(key = %storage_key, error = %e, "progress unreadable, starting over");
                return None;
            }
        };
        let raw = raw.trim();
        match raw.parse::<usize>() {
            Ok(cursor) => Some(cursor),
            // Too large for usize; still past any real sequence.
            Err(_) if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) => Some(usize::MAX),
            Err(_) => {
                warn!(key = %storage_key, value = %raw, "ignoring malformed stored progress");
                None
            }
        }
    }

    /// Persists `cursor` for `key`.
    pub fn save(&self, key: &ProgressKey, cursor: usize) {
        let storage_key = key.storage_key();
        match self.store.set(&storage_key, &cursor.to_string()) {
            Ok(()) => debug!(key = %storage_key, cursor, "progress saved"),
            Err(e) => warn!(key = %storage_key, cursor, error = %e, "progress not saved"),
        }
    }

    /// Removes any stored cursor for `key`.
    pub fn clear(&self, key: &ProgressKey) {
        let storage_key = key.storage_key();
        match self.store.remove(&storage_key) {
            Ok(()) => debug!(key = %storage_key, "progress cleared"),
            Err(e) => warn!(key = %storage_key, error = %e, "progress not cleared"),
        }
    }
}
