use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Timeout applied to every outbound call. A hung upstream must not pin
/// the calling task.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Failure modes for an outbound call to an upstream service.
///
/// `Request` covers transport-level failures (connection refused, DNS,
/// timeout); `Status` and `Body` cover responses that arrived but were
/// not usable. All three collapse to the same generic error at the HTTP
/// boundary, the distinction only shows up in logs.
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("upstream returned status {0}")]
    Status(StatusCode),

    #[error("invalid upstream body: {0}")]
    Body(#[from] serde_json::Error),
}

/// Thin HTTP client for calling the next service up the chain.
///
/// Cheap to clone; the consumer's poller and its request handlers each
/// hold their own copy.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: reqwest::Client,
    base_url: String,
}

impl UpstreamClient {
    /// Build a client for `http://{host}:{port}`.
    pub fn new(host: &str, port: u16) -> Self {
        Self::with_base_url(format!("http://{}:{}", host, port))
    }

    /// Build a client against an explicit base URL (no trailing slash).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `path` and decode the JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, UpstreamError> {
        let body = self.get(path).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// GET `path` and return the raw body, so callers can pass an
    /// upstream response through verbatim.
    pub async fn get_text(&self, path: &str) -> Result<String, UpstreamError> {
        self.get(path).await
    }

    async fn get(&self, path: &str) -> Result<String, UpstreamError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(UpstreamError::Status(response.status()));
        }

        Ok(response.text().await?)
    }
}
