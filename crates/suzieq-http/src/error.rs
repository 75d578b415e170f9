//! Error types for the HTTP adapters.
//!
//! `ClientError` is what adapter code produces internally; it is mapped to
//! the core `PortError` when it crosses a port boundary.

use suzieq_core::PortError;
use thiserror::Error;

/// Result type alias for adapter operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors raised while talking to a remote service.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Request completed with an HTTP error status.
    #[error("request failed with status {status}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Error description from the response body, if any
        detail: Option<String>,
    },

    /// The remote API answered `ok: false`.
    #[error("API error: {0}")]
    Api(String),

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ClientError {
    /// Convert into the core port error, tagging the service name.
    pub fn into_port_error(self, service: &'static str) -> PortError {
        match self {
            Self::Status {
                status,
                detail: Some(message),
            } => PortError::Rejected {
                service,
                message: format!("{status}: {message}"),
            },
            Self::Status { status, detail: None } => PortError::Status { service, status },
            Self::Api(message) => PortError::Rejected { service, message },
            Self::Network(e) if e.is_decode() => PortError::InvalidResponse {
                service,
                message: e.to_string(),
            },
            Self::Network(e) => PortError::Network {
                service,
                // without_url keeps bot tokens embedded in paths out of logs
                message: e.without_url().to_string(),
            },
            Self::InvalidUrl(e) => PortError::Configuration {
                message: format!("{service}: {e}"),
            },
        }
    }
}
