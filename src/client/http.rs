use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use super::{Answer, Responder};
use crate::consts::{DEFAULT_ENDPOINT, LOGIC_PROMPT};

/// Body the API is expected to return.
#[derive(Debug, Deserialize)]
struct ApiPayload {
    status: Option<f64>,
    result: Option<String>,
}

/// Asks the text-generation API with a single GET per query.
///
/// No timeout and no retry: a request that hangs keeps the caller waiting.
pub struct HttpResponder {
    client: reqwest::Client,
    endpoint: String,
    logic: String,
}

impl HttpResponder {
    pub fn new(endpoint: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            logic: LOGIC_PROMPT.to_string(),
        }
    }

    /// Use a preconfigured client (proxy, TLS, headers).
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// `<endpoint>?q=<query>&logic=<literal>`, both values URL-encoded.
    pub fn request_url(&self, query: &str) -> Result<reqwest::Url> {
        reqwest::Url::parse_with_params(
            &self.endpoint,
            &[("q", query), ("logic", self.logic.as_str())],
        )
        .with_context(|| format!("invalid endpoint URL: {}", self.endpoint))
    }
}

/// Map a response body to an answer. Only `{"status": 200, "result": "<non-empty>"}`
/// yields text.
pub fn interpret(body: &str) -> Answer {
    match serde_json::from_str::<ApiPayload>(body) {
        Ok(ApiPayload {
            status: Some(status),
            result: Some(text),
        }) if status == 200.0 && !text.is_empty() => Answer::Text(text),
        Ok(payload) => {
            debug!(status = ?payload.status, "API returned no usable result");
            Answer::Unprocessable
        }
        Err(e) => {
            warn!("malformed API payload: {e}");
            Answer::Unprocessable
        }
    }
}

#[async_trait]
impl Responder for HttpResponder {
    async fn ask(&self, query: &str) -> Result<Answer> {
        let url = self.request_url(query)?;
        debug!(%url, "sending chat request");

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .context("request failed")?;

        if !resp.status().is_success() {
            bail!("API returned HTTP {}", resp.status());
        }

        let body = resp.text().await.context("failed to read response body")?;
        Ok(interpret(&body))
    }
}
