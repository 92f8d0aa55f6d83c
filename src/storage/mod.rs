pub mod file;
pub mod memory;
pub mod traits;
pub mod unavailable;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use traits::KeyValueStore;
pub use unavailable::UnavailableStore;

/// Key holding the JSON-serialized rate-limit session.
pub const SESSION_KEY: &str = "cv_rag_session";

/// Key holding the JSON-serialized message log.
pub const MESSAGES_KEY: &str = "chat_messages";
