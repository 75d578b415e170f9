//! Outbound chat messenger ports.

use async_trait::async_trait;

use super::PortError;

/// Port for posting messages to Slack.
#[async_trait]
pub trait SlackMessengerPort: Send + Sync {
    /// Post `text` to `channel`, threaded under `thread_ts` when given.
    async fn post_message(
        &self,
        channel: &str,
        text: &str,
        thread_ts: Option<&str>,
    ) -> Result<(), PortError>;
}

/// Port for sending messages through the Telegram bot.
#[async_trait]
pub trait TelegramMessengerPort: Send + Sync {
    /// Send `text` to the chat identified by `chat_id`.
    async fn send_message(&self, chat_id: i64, text: &str) -> Result<(), PortError>;
}

/// Slack messenger used when no bot token is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSlackMessenger;

#[async_trait]
impl SlackMessengerPort for NoopSlackMessenger {
    async fn post_message(
        &self,
        channel: &str,
        _text: &str,
        _thread_ts: Option<&str>,
    ) -> Result<(), PortError> {
        tracing::debug!(channel, "slack bot token not set, skipping post");
        Ok(())
    }
}

/// Telegram messenger used when no bot token is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTelegramMessenger;

#[async_trait]
impl TelegramMessengerPort for NoopTelegramMessenger {
    async fn send_message(&self, chat_id: i64, _text: &str) -> Result<(), PortError> {
        tracing::debug!(chat_id, "telegram bot token not set, skipping send");
        Ok(())
    }
}
