mod chat;
mod core;
mod http;
mod session;
mod storage;

pub use chat::ChatConfig;
pub use self::core::{Config, SUPPORTED_LOCALES};
pub use http::HttpConfig;
pub use session::SessionConfig;
pub use storage::StorageConfig;
