//! Test stores — mock `KeyValueStore` implementations for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use partyplay_core::error::DomainError;
use partyplay_core::storage::KeyValueStore;

/// A write recorded by [`RecordingStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreOp {
    /// `set(key, value)`.
    Set(String, String),
    /// `remove(key)`.
    Remove(String),
}

/// An in-memory store that records every `set` and `remove` call.
#[derive(Debug, Default)]
pub struct RecordingStore {
    values: Mutex<HashMap<String, String>>,
    operations: Mutex<Vec<StoreOp>>,
}

impl RecordingStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a value without recording an operation.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn with_value(self, key: &str, value: &str) -> Self {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_owned(), value.to_owned());
        self
    }

    /// Returns the current value under `key`.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn value(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    /// Returns a snapshot of all recorded writes, oldest first.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn operations(&self) -> Vec<StoreOp> {
        self.operations.lock().unwrap().clone()
    }
}

impl KeyValueStore for RecordingStore {
    fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        Ok(self.values.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), DomainError> {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_owned(), value.to_owned());
        self.operations
            .lock()
            .unwrap()
            .push(StoreOp::Set(key.to_owned(), value.to_owned()));
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), DomainError> {
        self.values.lock().unwrap().remove(key);
        self.operations
            .lock()
            .unwrap()
            .push(StoreOp::Remove(key.to_owned()));
        Ok(())
    }
}

/// A store whose every call fails with an infrastructure error. Useful for
/// checking that storage trouble never reaches the player.
#[derive(Debug, Default)]
pub struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, DomainError> {
        Err(DomainError::Infrastructure("storage disabled".into()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure("quota exceeded".into()))
    }

    fn remove(&self, _key: &str) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure("storage disabled".into()))
    }
}
