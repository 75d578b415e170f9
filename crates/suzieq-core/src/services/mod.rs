//! Core services - the office's business logic layer.
//!
//! Services here are pure orchestrators over the ports; they don't know
//! about concrete implementations.

mod office;

pub use office::{OfficeService, REPORT_HISTORY_LIMIT, SlackOutcome};
