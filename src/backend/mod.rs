pub mod assets;
pub mod client;
pub mod http;
pub mod traits;
pub mod types;

pub use assets::CvAssets;
pub use client::build_backend_client;
pub use http::HttpChatBackend;
pub use traits::{BackendFuture, ChatBackend};
pub use types::{ChatRequest, ChatResponse};
