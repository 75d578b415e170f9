//! Shared transport configuration for the HTTP adapters.

use std::time::Duration;

/// Configuration shared by every outbound client.
///
/// # Example
///
/// ```
/// use suzieq_http::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::new()
///     .with_timeout(Duration::from_secs(10))
///     .with_user_agent("suzieq-test/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout
    pub(crate) timeout: Duration,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(60),
            user_agent: concat!("suzieq-http/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the request timeout.
    ///
    /// Defaults to 60 seconds; the brain can be slow to answer.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
