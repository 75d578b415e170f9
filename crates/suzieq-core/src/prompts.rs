//! Prompt templates sent to the brain.

use std::fmt::Write;

use crate::domain::{AgentAddress, MemoryEntry};

/// Opening line of the daily executive report prompt.
pub const DAILY_REPORT_HEADER: &str = "Summarize the last 24 hours of Suzie Q operations into an executive report with KPIs and next actions.\n";

/// Prefix of the message posted to the CEO channel.
pub const DAILY_REPORT_TITLE: &str = "Daily CEO Report:";

/// Prompt for chat traffic answered by Suzie Q herself.
pub fn ceo_prompt(input: &str) -> String {
    format!("You are Suzie Q (CEO). Respond concisely. Input: {input}")
}

/// Prompt for a departmental agent.
pub fn agent_prompt(address: &AgentAddress, input: &str) -> String {
    format!(
        "You are an AI {} for the {} department named {}. Be specialized and concise. Input: {input}",
        address.role, address.dept, address.name
    )
}

/// Prompt summarising recent memory entries, newest first.
pub fn daily_report_prompt(entries: &[MemoryEntry]) -> String {
    let mut prompt = String::from(DAILY_REPORT_HEADER);
    for entry in entries {
        let context = entry.context.as_deref().unwrap_or_default();
        let decision = entry.decision.as_deref().unwrap_or_default();
        // Writing into a String cannot fail.
        let _ = write!(prompt, "- Context: {context}\n  Decision: {decision}\n");
    }
    prompt
}

/// Message posted to the CEO channel once the report is written.
pub fn daily_report_message(summary: &str) -> String {
    format!("{DAILY_REPORT_TITLE}\n{summary}")
}
