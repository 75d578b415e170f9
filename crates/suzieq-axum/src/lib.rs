#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings (used by integration tests)
#[cfg(test)]
use async_trait as _;
#[cfg(test)]
use httpmock as _;

// Used by main.rs binary
use dotenvy as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

// Re-export primary types
pub use bootstrap::{AxumContext, bootstrap, build_ports, serve, start_server};
pub use error::HttpError;
pub use routes::create_router;
pub use state::AppState;
