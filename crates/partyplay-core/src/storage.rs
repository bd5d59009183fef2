//! Key-value persistence port.
//!
//! Models the per-browsing-context storage a player's progress lives in:
//! synchronous, string keyed, string valued, with no durability promise.

use crate::error::DomainError;

/// Synchronous key → string storage surface.
///
/// Implementations use interior mutability so a single store can be shared
/// behind an `Arc` by every controller in the process.
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the medium cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, DomainError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the medium cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), DomainError>;

    /// Removes `key`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the medium cannot be written.
    fn remove(&self, key: &str) -> Result<(), DomainError>;
}
