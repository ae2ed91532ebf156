//! Persistent key-value store port definition.

use crate::domain::errors::StorageError;

/// Port for durable string key-value storage.
///
/// Access is synchronous; values survive process restarts. The store is a
/// single shared mutable resource and assumes exclusive single-process
/// access, so no locking or versioning is performed here.
pub trait KeyValueStorePort: Send + Sync {
    /// Returns the value stored under `key`, if any.
    ///
    /// # Errors
    /// Returns an error if the backing medium cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    /// Returns an error if the backing medium cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes the value stored under `key`. Removing an absent key is a
    /// no-op.
    ///
    /// # Errors
    /// Returns an error if the backing medium cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Checks whether `key` is present.
    ///
    /// # Errors
    /// Returns an error if the backing medium cannot be read.
    fn contains(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.get(key)?.is_some())
    }
}
