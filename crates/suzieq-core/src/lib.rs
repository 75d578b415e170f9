#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod prompts;
pub mod services;
pub mod settings;

// Re-export commonly used types for convenience
pub use domain::{
    AgentAddress, AgentInvokePayload, AgentReply, MemoryEntry, MemoryRecord, MemorySource,
    SlackEventEnvelope, SlackMessage, TelegramUpdate,
};
pub use ports::{
    BrainPort, CoreError, DisabledMemoryStore, MemoryStorePort, NoopSlackMessenger,
    NoopTelegramMessenger, OfficePorts, PortError, SlackMessengerPort, TelegramMessengerPort,
};
pub use services::{OfficeService, SlackOutcome};
pub use settings::{DEFAULT_BRAIN_URL, DEFAULT_HOST, DEFAULT_PORT, Settings, SettingsError};
