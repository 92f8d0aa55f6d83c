use crate::error::StorageError;

/// Durable string key-value surface shared by the session tracker and the
/// message log.
///
/// Writes are last-write-wins; there is a single writer per store.
pub trait KeyValueStore: Send + Sync {
    /// Backend identifier (e.g. "file", "memory").
    fn name(&self) -> &str;

    /// Returns `Ok(None)` when the key has never been written or was removed.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Keys become file names, so only a conservative alphabet is accepted.
pub fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-'));
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}
