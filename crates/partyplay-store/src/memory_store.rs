//! In-process `KeyValueStore`.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use partyplay_core::error::DomainError;
use partyplay_core::storage::KeyValueStore;

/// Volatile store backed by a `HashMap`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn values(&self) -> Result<MutexGuard<'_, HashMap<String, String>>, DomainError> {
        self.values
            .lock()
            .map_err(|e| DomainError::Infrastructure(e.to_string()))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        Ok(self.values()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), DomainError> {
        self.values()?.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), DomainError> {
        self.values()?.remove(key);
        Ok(())
    }
}
