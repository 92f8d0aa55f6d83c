#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::new_without_default,
    clippy::return_self_not_must_use
)]

#[macro_use]
extern crate rust_i18n;

i18n!("locales", fallback = "en");

pub mod app;
pub mod backend;
pub mod chat;
pub mod cli;
pub mod config;
pub mod error;
pub mod platform;
pub mod session;
pub mod storage;
pub mod ui;

pub use chat::{ChatOrchestrator, Message, MessageLog};
pub use cli::{Cli, Commands};
pub use config::Config;
pub use session::{RateLimitPolicy, Session, SessionManager};
