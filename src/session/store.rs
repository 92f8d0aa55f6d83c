use super::types::Session;
use crate::error::StorageError;
use crate::storage::{KeyValueStore, SESSION_KEY};
use std::sync::Arc;

/// Typed access to the session record under [`SESSION_KEY`].
pub struct SessionStore {
    store: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// `Ok(None)` when nothing is stored or the stored value does not parse.
    ///
    /// An unparsable record is treated like a missing one so the caller
    /// starts a fresh window and overwrites it.
    pub fn load(&self) -> Result<Option<Session>, StorageError> {
        let Some(raw) = self.store.get(SESSION_KEY)? else {
            return Ok(None);
        };

        match serde_json::from_str::<Session>(&raw) {
            Ok(session) => Ok(Some(session)),
            Err(error) => {
                tracing::warn!(%error, "discarding unreadable stored session");
                Ok(None)
            }
        }
    }

    pub fn save(&self, session: &Session) -> Result<(), StorageError> {
        let json = serde_json::to_string(session)?;
        self.store.set(SESSION_KEY, &json)
    }

    pub fn backend_name(&self) -> &str {
        self.store.name()
    }
}
