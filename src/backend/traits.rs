use super::types::{ChatRequest, ChatResponse};
use crate::error::TransportError;
use std::future::Future;
use std::pin::Pin;

pub type BackendFuture<'a> =
    Pin<Box<dyn Future<Output = Result<ChatResponse, TransportError>> + Send + 'a>>;

/// The external RAG service, reached through a single chat endpoint.
pub trait ChatBackend: Send + Sync {
    /// Backend identifier (e.g. "http").
    fn name(&self) -> &str;

    /// One question, one answer. Never retried by the caller.
    fn ask<'a>(&'a self, request: &'a ChatRequest) -> BackendFuture<'a>;
}
