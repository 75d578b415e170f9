//! Brain client.
//!
//! The brain accepts `{"context": "<prompt>"}` and answers with a JSON
//! object carrying the decision either at the top level or wrapped in a
//! `body` object (older deployments proxied through a Lambda-style envelope).

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use suzieq_core::{BrainPort, PortError};
use url::Url;

use crate::config::ClientConfig;
use crate::error::ClientResult;
use crate::http::{build_client, ensure_success};

const SERVICE: &str = "brain";

/// Decision returned when the brain's answer carries none.
pub const NO_DECISION: &str = "No decision.";

#[derive(Serialize)]
struct BrainRequest<'a> {
    context: &'a str,
}

/// HTTP client for the brain service.
pub struct BrainClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl BrainClient {
    /// Create a client posting to `endpoint`.
    pub fn new(endpoint: &str, config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self {
            client: build_client(config)?,
            endpoint: Url::parse(endpoint)?,
        })
    }

    /// Endpoint this client posts to.
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn request_decision(&self, context: &str) -> ClientResult<String> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&BrainRequest { context })
            .send()
            .await?;
        let response = ensure_success(response).await?;
        let body: Value = response.json().await?;
        Ok(extract_decision(&body))
    }
}

/// Pull the decision out of a brain response.
///
/// Looks at `decision`, then `body.decision`, and falls back to
/// [`NO_DECISION`].
pub(crate) fn extract_decision(body: &Value) -> String {
    body.get("decision")
        .and_then(decision_text)
        .or_else(|| {
            body.get("body")
                .and_then(|inner| inner.get("decision"))
                .and_then(decision_text)
        })
        .unwrap_or_else(|| NO_DECISION.to_string())
}

/// Only non-empty strings count as a decision.
fn decision_text(value: &Value) -> Option<String> {
    value
        .as_str()
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[async_trait]
impl BrainPort for BrainClient {
    async fn decide(&self, context: &str) -> Result<String, PortError> {
        tracing::debug!(prompt_len = context.len(), "asking brain");
        self.request_decision(context)
            .await
            .map_err(|e| e.into_port_error(SERVICE))
    }
}
