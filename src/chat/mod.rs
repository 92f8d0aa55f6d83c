pub mod history;
pub mod orchestrator;
pub mod types;

pub use history::MessageLog;
pub use orchestrator::{
    ChatOptions, ChatOrchestrator, PendingQuestion, RejectReason, SendOutcome, TickOutcome,
};
pub use types::{Message, MessageRole, Source, SourceKind};
