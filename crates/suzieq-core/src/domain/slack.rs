//! Slack Events API envelope.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{is_truthy, non_empty_str};

/// Envelope type sent by Slack when the request URL is first registered.
pub const URL_VERIFICATION: &str = "url_verification";

/// Outer envelope of a Slack Events API callback.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SlackEventEnvelope {
    pub token: Option<String>,
    pub team_id: Option<String>,
    pub api_app_id: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub challenge: Option<String>,
    pub event: Option<Map<String, Value>>,
}

/// The parts of an inner Slack event the office acts on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlackMessage {
    /// Message text, empty when the event carried none.
    pub text: String,
    pub channel: Option<String>,
    /// Thread to reply into: `thread_ts` if set, otherwise the message `ts`.
    pub thread_ts: Option<String>,
    /// Whether the event was produced by a bot (including ourselves).
    pub from_bot: bool,
}

impl SlackEventEnvelope {
    /// Whether this is the one-off URL verification handshake.
    pub fn is_url_verification(&self) -> bool {
        self.kind.as_deref() == Some(URL_VERIFICATION)
    }

    /// Challenge token to echo back, empty if Slack sent none.
    pub fn challenge(&self) -> &str {
        self.challenge.as_deref().unwrap_or_default()
    }

    /// Extract the message fields from the inner event.
    pub fn message(&self) -> SlackMessage {
        let empty = Map::new();
        let event = self.event.as_ref().unwrap_or(&empty);

        let thread_ts = non_empty_str(event, "thread_ts")
            .or_else(|| non_empty_str(event, "ts"))
            .map(str::to_string);

        SlackMessage {
            text: non_empty_str(event, "text").unwrap_or_default().to_string(),
            channel: non_empty_str(event, "channel").map(str::to_string),
            thread_ts,
            from_bot: is_truthy(event.get("bot_id")),
        }
    }
}
