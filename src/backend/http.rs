use super::client::build_backend_client;
use super::traits::{BackendFuture, ChatBackend};
use super::types::{ChatRequest, ChatResponse, ErrorBody};
use crate::config::Config;
use crate::error::TransportError;
use reqwest::Client;

const MAX_ERROR_DETAIL_CHARS: usize = 200;

/// Talks to `POST {base_url}/api/chat/`.
pub struct HttpChatBackend {
    base_url: String,
    /// Pre-computed chat endpoint (avoids `format!` per request).
    chat_url: String,
    client: Client,
}

impl HttpChatBackend {
    pub fn new(base_url: &str, client: Client) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        let chat_url = format!("{base_url}/api/chat/");
        Self {
            base_url,
            chat_url,
            client,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.api_url, build_backend_client(&config.http))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn chat_url(&self) -> &str {
        &self.chat_url
    }

    async fn call_api(&self, request: &ChatRequest) -> Result<ChatResponse, TransportError> {
        let response = self
            .client
            .post(&self.chat_url)
            .json(request)
            .send()
            .await
            .map_err(|error| TransportError::Network(error.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|error| TransportError::Network(error.to_string()))?;

        if !status.is_success() {
            return Err(status_error(status.as_u16(), &body));
        }

        serde_json::from_str(&body).map_err(|error| TransportError::Decode(error.to_string()))
    }
}

impl ChatBackend for HttpChatBackend {
    fn name(&self) -> &str {
        "http"
    }

    fn ask<'a>(&'a self, request: &'a ChatRequest) -> BackendFuture<'a> {
        Box::pin(self.call_api(request))
    }
}

/// Error for a non-success status: the body's string `detail` when there is
/// one, `HTTP {status}` otherwise.
pub(crate) fn status_error(status: u16, body: &str) -> TransportError {
    let detail = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.detail)
        .and_then(|detail| match detail {
            serde_json::Value::String(text) if !text.trim().is_empty() => Some(text),
            _ => None,
        });

    let message = match detail {
        Some(text) => truncate_detail(&text),
        None => format!("HTTP {status}"),
    };
    TransportError::Status { status, message }
}

fn truncate_detail(text: &str) -> String {
    match text.char_indices().nth(MAX_ERROR_DETAIL_CHARS) {
        Some((idx, _)) => format!("{}...", text[..idx].trim_end()),
        None => text.to_string(),
    }
}
