#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod brain;
mod config;
mod error;
mod http;
mod slack;
mod supabase;
mod telegram;

// ============================================================================
// Public API
// ============================================================================

// Adapters
pub use brain::{BrainClient, NO_DECISION};
pub use slack::{DEFAULT_SLACK_API_URL, SlackClient};
pub use supabase::{MEMORY_TABLE, SupabaseMemoryStore};
pub use telegram::{DEFAULT_TELEGRAM_API_URL, TelegramClient};

// Configuration
pub use config::ClientConfig;

// Errors
pub use error::ClientError;
