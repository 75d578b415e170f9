//! Memory log entries.
//!
//! Every decision the office makes is appended to the `memory` table together
//! with the context that produced it. The daily report reads them back.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::AgentAddress;

/// Where a memory entry came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemorySource {
    Slack,
    Telegram,
    Cron,
    Agent(AgentAddress),
}

impl MemorySource {
    /// Tag stored in the `source` column.
    pub fn tag(&self) -> String {
        match self {
            Self::Slack => "slack".to_string(),
            Self::Telegram => "telegram".to_string(),
            Self::Cron => "cron".to_string(),
            Self::Agent(addr) => addr.source_tag(),
        }
    }
}

/// A row to insert into the memory table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryRecord {
    pub context: String,
    pub decision: String,
    pub source: String,
    /// RFC 3339 UTC timestamp.
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,
}

impl MemoryRecord {
    /// Build a record stamped with the current time.
    pub fn new(context: impl Into<String>, decision: impl Into<String>, source: &MemorySource) -> Self {
        let (department, actor) = match source {
            MemorySource::Agent(addr) => (Some(addr.dept.clone()), Some(addr.name.clone())),
            _ => (None, None),
        };

        Self {
            context: context.into(),
            decision: decision.into(),
            source: source.tag(),
            timestamp: now_utc_rfc3339(),
            department,
            actor,
        }
    }
}

/// A row read back from the memory table.
///
/// The table may carry extra columns (ids, insert times); they are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryEntry {
    pub context: Option<String>,
    pub decision: Option<String>,
    pub source: Option<String>,
    pub timestamp: Option<String>,
}

/// Current UTC time as RFC 3339 with microseconds and a `+00:00` offset.
pub fn now_utc_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, false)
}
