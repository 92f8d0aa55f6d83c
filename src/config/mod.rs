pub mod schema;

pub use schema::{ChatConfig, Config, HttpConfig, SessionConfig, StorageConfig};
