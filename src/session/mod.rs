pub mod format;
pub mod limiter;
pub mod manager;
pub mod store;
pub mod types;

pub use format::format_remaining_time;
pub use limiter::Resolution;
pub use manager::SessionManager;
pub use store::SessionStore;
pub use types::{RateLimitPolicy, Session, SessionStatus};
