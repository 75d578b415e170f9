//! Domain types for the office webhooks.
//!
//! Inbound payloads are kept permissive: every field the platforms may omit
//! is optional, and nested event objects stay as raw JSON maps so unknown
//! keys never cause a rejection.

mod agent;
mod memory;
mod slack;
mod telegram;

pub use agent::{AgentAddress, AgentInvokePayload, AgentReply};
pub use memory::{MemoryEntry, MemoryRecord, MemorySource};
pub use slack::{SlackEventEnvelope, SlackMessage};
pub use telegram::TelegramUpdate;

use serde_json::{Map, Value};

/// Read a string field, treating missing, null and empty values alike.
pub(crate) fn non_empty_str<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    map.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// JSON truthiness for optional flags such as Slack's `bot_id`.
pub(crate) fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::Array(a)) => !a.is_empty(),
        Some(Value::Object(o)) => !o.is_empty(),
    }
}
