use super::traits::KeyValueStore;
use crate::error::StorageError;

/// Stands in for an environment with no persistence surface at all.
///
/// Every call fails with [`StorageError::Unavailable`]; callers are expected
/// to degrade to ephemeral defaults.
#[derive(Debug, Default)]
pub struct UnavailableStore;

impl UnavailableStore {
    fn unavailable() -> StorageError {
        StorageError::Unavailable("no persistent storage in this context".into())
    }
}

impl KeyValueStore for UnavailableStore {
    fn name(&self) -> &str {
        "unavailable"
    }

    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(Self::unavailable())
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(Self::unavailable())
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(Self::unavailable())
    }
}
