use super::types::Message;
use crate::session::Resolution;
use crate::storage::{KeyValueStore, MESSAGES_KEY};
use std::sync::Arc;

/// Persistence wrapper for the conversation under [`MESSAGES_KEY`].
///
/// Storage failures are logged and absorbed: loading degrades to an empty
/// log, saving and clearing become no-ops.
pub struct MessageLog {
    store: Arc<dyn KeyValueStore>,
}

impl MessageLog {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn save_messages(&self, messages: &[Message]) {
        let json = match serde_json::to_string(messages) {
            Ok(json) => json,
            Err(error) => {
                tracing::warn!(%error, "failed to serialize message log");
                return;
            }
        };

        if let Err(error) = self.store.set(MESSAGES_KEY, &json) {
            tracing::warn!(%error, backend = self.store.name(), "failed to persist message log");
        }
    }

    pub fn load_messages(&self) -> Vec<Message> {
        let raw = match self.store.get(MESSAGES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(error) => {
                tracing::debug!(%error, "message log unavailable, starting empty");
                return Vec::new();
            }
        };

        serde_json::from_str(&raw).unwrap_or_else(|error| {
            tracing::warn!(%error, "discarding unreadable message log");
            Vec::new()
        })
    }

    pub fn clear_messages(&self) {
        if let Err(error) = self.store.remove(MESSAGES_KEY) {
            tracing::warn!(%error, backend = self.store.name(), "failed to clear message log");
        }
    }

    /// Clear the log when `resolution` replaced a throttled session, so a
    /// renewed window never resumes the previous conversation.
    pub fn discard_if_renewed(&self, resolution: &Resolution) -> bool {
        let Resolution::Reset { previous, .. } = resolution else {
            return false;
        };
        tracing::debug!(
            previous_session_id = %previous.session_id,
            "dropping conversation of renewed session"
        );
        self.clear_messages();
        true
    }
}
