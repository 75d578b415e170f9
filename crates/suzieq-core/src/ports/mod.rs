//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the office expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `reqwest` or `axum` types in any signature
//! - Disabled integrations are expressed as no-op implementations, chosen at
//!   the composition root, never as flags inside the service

pub mod brain;
pub mod memory_store;
pub mod messenger;

use std::sync::Arc;
use thiserror::Error;

pub use brain::BrainPort;
pub use memory_store::{DisabledMemoryStore, MemoryStorePort};
pub use messenger::{
    NoopSlackMessenger, NoopTelegramMessenger, SlackMessengerPort, TelegramMessengerPort,
};

/// Container for all port trait objects the office needs.
#[derive(Clone)]
pub struct OfficePorts {
    /// Remote decision engine.
    pub brain: Arc<dyn BrainPort>,
    /// Memory log storage.
    pub memory: Arc<dyn MemoryStorePort>,
    /// Outbound Slack messages.
    pub slack: Arc<dyn SlackMessengerPort>,
    /// Outbound Telegram messages.
    pub telegram: Arc<dyn TelegramMessengerPort>,
}

impl OfficePorts {
    /// Create a new ports container.
    pub fn new(
        brain: Arc<dyn BrainPort>,
        memory: Arc<dyn MemoryStorePort>,
        slack: Arc<dyn SlackMessengerPort>,
        telegram: Arc<dyn TelegramMessengerPort>,
    ) -> Self {
        Self {
            brain,
            memory,
            slack,
            telegram,
        }
    }
}

/// Errors reported by port implementations.
///
/// Adapters map their transport errors onto these variants at the boundary.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PortError {
    /// The remote service answered with a non-success HTTP status.
    #[error("{service} request failed with status {status}")]
    Status {
        /// Name of the remote service
        service: &'static str,
        /// HTTP status code
        status: u16,
    },

    /// The remote service accepted the request but reported a failure.
    #[error("{service} rejected the request: {message}")]
    Rejected {
        service: &'static str,
        message: String,
    },

    /// Connection, timeout or other transport failure.
    #[error("{service} unreachable: {message}")]
    Network {
        service: &'static str,
        message: String,
    },

    /// The response body could not be understood.
    #[error("Invalid response from {service}: {message}")]
    InvalidResponse {
        service: &'static str,
        message: String,
    },

    /// The adapter is misconfigured (bad URL, bad header value).
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Errors surfaced by the office service to adapters.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A required external service failed.
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Input failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Misconfiguration detected at request time.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Unexpected internal failure.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<PortError> for CoreError {
    fn from(err: PortError) -> Self {
        match err {
            PortError::Configuration { message } => Self::Configuration(message),
            other => Self::ExternalService(other.to_string()),
        }
    }
}
