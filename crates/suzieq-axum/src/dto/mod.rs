//! Data Transfer Objects (DTOs) for the HTTP API contract.
//!
//! These types fix the JSON shapes answered to Slack, Telegram and the
//! scheduler, independent of the core domain types.

pub mod responses;

pub use responses::{AckResponse, DailyReportResponse, SlackEventResponse};
