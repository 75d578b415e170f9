//! HTTP request handlers for the Axum web server.
//!
//! Each submodule contains handlers for one webhook source.
//! Handlers are thin wrappers that delegate to `OfficeService`.

pub mod agents;
pub mod cron;
pub mod slack;
pub mod telegram;
