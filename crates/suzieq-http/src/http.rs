//! Shared reqwest plumbing for the adapters.

use serde::Deserialize;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// Build a pooled reqwest client from the shared configuration.
pub fn build_client(config: &ClientConfig) -> ClientResult<reqwest::Client> {
    let client = reqwest::Client::builder()
        .timeout(config.timeout)
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(client)
}

/// Parse and normalise a base URL so that joining never drops a segment.
pub fn parse_base_url(raw: &str) -> ClientResult<Url> {
    let mut url = Url::parse(raw)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Fail on non-success statuses, keeping any error description the body has.
pub async fn ensure_success(response: reqwest::Response) -> ClientResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(ClientError::Status {
        status: status.as_u16(),
        detail: error_detail(&body),
    })
}

/// Acknowledgement envelope used by both Slack and Telegram.
///
/// Slack reports failures in `error`, Telegram in `description`.
#[derive(Debug, Default, Deserialize)]
pub struct ApiAck {
    #[serde(default)]
    pub ok: bool,
    pub error: Option<String>,
    pub description: Option<String>,
}

impl ApiAck {
    /// Turn an `ok: false` acknowledgement into an error.
    pub fn into_result(self) -> ClientResult<()> {
        if self.ok {
            Ok(())
        } else {
            Err(ClientError::Api(
                self.error
                    .or(self.description)
                    .unwrap_or_else(|| "unknown error".to_string()),
            ))
        }
    }
}

/// Read an acknowledgement body after checking the status.
pub async fn read_ack(response: reqwest::Response) -> ClientResult<()> {
    let response = ensure_success(response).await?;
    let ack: ApiAck = response.json().await?;
    ack.into_result()
}

fn error_detail(body: &str) -> Option<String> {
    let ack: ApiAck = serde_json::from_str(body).ok()?;
    ack.error.or(ack.description)
}
