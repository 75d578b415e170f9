//! Response bodies.

use serde::{Deserialize, Serialize};
use suzieq_core::SlackOutcome;

/// Plain acknowledgement, `{"ok": true}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AckResponse {
    pub ok: bool,
}

impl AckResponse {
    pub const OK: Self = Self { ok: true };
}

/// Answer to a Slack Events API callback.
///
/// Slack expects the bare challenge during URL verification and any 2xx
/// otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SlackEventResponse {
    Challenge { challenge: String },
    Ack(AckResponse),
}

impl From<SlackOutcome> for SlackEventResponse {
    fn from(outcome: SlackOutcome) -> Self {
        match outcome {
            SlackOutcome::Challenge(challenge) => Self::Challenge { challenge },
            SlackOutcome::IgnoredBot | SlackOutcome::Answered(_) => Self::Ack(AckResponse::OK),
        }
    }
}

/// Answer to the daily report trigger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyReportResponse {
    pub ok: bool,
    pub summary: String,
}

impl DailyReportResponse {
    pub const fn new(summary: String) -> Self {
        Self { ok: true, summary }
    }
}
