//! Slack Web API messenger.

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue};
use serde::Serialize;
use suzieq_core::{PortError, SlackMessengerPort};
use url::Url;

use crate::config::ClientConfig;
use crate::error::ClientResult;
use crate::http::{build_client, parse_base_url, read_ack};

const SERVICE: &str = "slack";

/// Base URL of the Slack Web API.
pub const DEFAULT_SLACK_API_URL: &str = "https://slack.com/api";

#[derive(Serialize)]
struct PostMessage<'a> {
    channel: &'a str,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    thread_ts: Option<&'a str>,
}

/// Posts messages through `chat.postMessage` with a bot token.
pub struct SlackClient {
    client: reqwest::Client,
    post_message_url: Url,
    auth: HeaderValue,
}

impl SlackClient {
    /// Create a client against the public Slack API.
    pub fn new(bot_token: &str, config: &ClientConfig) -> ClientResult<Self> {
        Self::with_base_url(DEFAULT_SLACK_API_URL, bot_token, config)
    }

    /// Create a client against a custom API base (tests, proxies).
    pub fn with_base_url(base_url: &str, bot_token: &str, config: &ClientConfig) -> ClientResult<Self> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {bot_token}"))
            .unwrap_or_else(|_| HeaderValue::from_static("Bearer"));
        auth.set_sensitive(true);

        Ok(Self {
            client: build_client(config)?,
            post_message_url: parse_base_url(base_url)?.join("chat.postMessage")?,
            auth,
        })
    }

    async fn post(&self, message: &PostMessage<'_>) -> ClientResult<()> {
        let response = self
            .client
            .post(self.post_message_url.clone())
            .header(AUTHORIZATION, self.auth.clone())
            .header(CONTENT_TYPE, "application/json;charset=utf-8")
            .json(message)
            .send()
            .await?;
        read_ack(response).await
    }
}

#[async_trait]
impl SlackMessengerPort for SlackClient {
    async fn post_message(
        &self,
        channel: &str,
        text: &str,
        thread_ts: Option<&str>,
    ) -> Result<(), PortError> {
        tracing::debug!(channel, threaded = thread_ts.is_some(), "posting to slack");
        self.post(&PostMessage {
            channel,
            text,
            thread_ts,
        })
        .await
        .map_err(|e| e.into_port_error(SERVICE))
    }
}
