//! Telegram bot webhook update.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::non_empty_str;

/// A Telegram `Update` object, reduced to what the office reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TelegramUpdate {
    pub update_id: Option<i64>,
    pub message: Option<Map<String, Value>>,
}

impl TelegramUpdate {
    /// Message text, empty for stickers, photos and service messages.
    pub fn text(&self) -> &str {
        self.message
            .as_ref()
            .and_then(|m| non_empty_str(m, "text"))
            .unwrap_or_default()
    }

    /// Chat to answer into. A zero id is treated as absent.
    pub fn chat_id(&self) -> Option<i64> {
        self.message
            .as_ref()
            .and_then(|m| m.get("chat"))
            .and_then(|chat| chat.get("id"))
            .and_then(Value::as_i64)
            .filter(|id| *id != 0)
    }
}
