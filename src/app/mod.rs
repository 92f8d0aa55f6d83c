pub mod dispatch;
pub mod repl;
pub mod status;

pub use dispatch::dispatch;
