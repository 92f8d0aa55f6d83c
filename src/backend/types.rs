use crate::chat::Source;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    pub message: String,
    pub session_id: String,
}

/// Successful chat payload.
///
/// Only `response` and `sources` drive the conversation; the remaining
/// fields are informational and tolerated when absent.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub query_id: Option<String>,
    pub response: String,
    #[serde(default)]
    pub sources: Vec<Source>,
    #[serde(default)]
    pub tokens_used: Option<u64>,
    #[serde(default)]
    pub cost: Option<f64>,
    #[serde(default)]
    pub provider_used: Option<String>,
    #[serde(default)]
    pub questions_count: Option<u32>,
    #[serde(default)]
    pub questions_remaining: Option<u32>,
}

impl ChatResponse {
    pub fn text(response: impl Into<String>) -> Self {
        Self {
            query_id: None,
            response: response.into(),
            sources: Vec::new(),
            tokens_used: None,
            cost: None,
            provider_used: None,
            questions_count: None,
            questions_remaining: None,
        }
    }

    pub fn with_sources(mut self, sources: Vec<Source>) -> Self {
        self.sources = sources;
        self
    }
}

/// Error payload of a failed call, e.g. `{"detail": "..."}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}
