//! Brain port definition.
//!
//! The brain is a remote service that turns a context prompt into a
//! decision. Its reasoning is opaque to the office.

use async_trait::async_trait;

use super::PortError;

/// Port for asking the brain for a decision.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BrainPort: Send + Sync {
    /// Submit a context prompt and return the decision text.
    async fn decide(&self, context: &str) -> Result<String, PortError>;
}
