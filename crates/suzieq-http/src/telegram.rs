//! Telegram Bot API messenger.

use async_trait::async_trait;
use serde::Serialize;
use suzieq_core::{PortError, TelegramMessengerPort};
use url::Url;

use crate::config::ClientConfig;
use crate::error::ClientResult;
use crate::http::{build_client, parse_base_url, read_ack};

const SERVICE: &str = "telegram";

/// Base URL of the Telegram Bot API.
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

#[derive(Serialize)]
struct SendMessage<'a> {
    chat_id: i64,
    text: &'a str,
}

/// Sends messages through `sendMessage` for one bot.
pub struct TelegramClient {
    client: reqwest::Client,
    // Contains the bot token; never log it.
    send_message_url: Url,
}

impl TelegramClient {
    /// Create a client against the public Bot API.
    pub fn new(bot_token: &str, config: &ClientConfig) -> ClientResult<Self> {
        Self::with_base_url(DEFAULT_TELEGRAM_API_URL, bot_token, config)
    }

    /// Create a client against a custom API base (tests, local Bot API server).
    pub fn with_base_url(base_url: &str, bot_token: &str, config: &ClientConfig) -> ClientResult<Self> {
        // Tokens look like `123:ABC`; the `./` keeps the colon from being
        // read as a URL scheme.
        let send_message_url =
            parse_base_url(base_url)?.join(&format!("./bot{bot_token}/sendMessage"))?;

        Ok(Self {
            client: build_client(config)?,
            send_message_url,
        })
    }

    async fn send(&self, message: &SendMessage<'_>) -> ClientResult<()> {
        let response = self
            .client
            .post(self.send_message_url.clone())
            .json(message)
            .send()
            .await?;
        read_ack(response).await
    }
}

#[async_trait]
impl TelegramMessengerPort for TelegramClient {
    async fn send_message(&self, chat_id: i64, text: &str) -> Result<(), PortError> {
        tracing::debug!(chat_id, "sending telegram message");
        self.send(&SendMessage { chat_id, text })
            .await
            .map_err(|e| e.into_port_error(SERVICE))
    }
}
