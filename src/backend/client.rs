use crate::config::HttpConfig;
use reqwest::Client;
use std::time::Duration;

/// Shared client for backend calls.
///
/// No overall request timeout unless one is configured: a slow answer keeps
/// the conversation waiting rather than failing it.
pub fn build_backend_client(config: &HttpConfig) -> Client {
    let mut builder = Client::builder()
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .pool_max_idle_per_host(4)
        .pool_idle_timeout(Duration::from_secs(90))
        .tcp_keepalive(Duration::from_secs(60));

    if let Some(timeout_secs) = config.request_timeout_secs {
        builder = builder.timeout(Duration::from_secs(timeout_secs));
    }

    builder.build().unwrap_or_else(|error| {
        tracing::warn!(%error, "falling back to default HTTP client");
        Client::new()
    })
}
