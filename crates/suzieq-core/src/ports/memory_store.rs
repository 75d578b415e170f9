//! Memory store port definition.

use async_trait::async_trait;

use super::PortError;
use crate::domain::{MemoryEntry, MemoryRecord};

/// Port for the decision log.
#[async_trait]
pub trait MemoryStorePort: Send + Sync {
    /// Append a record.
    async fn insert(&self, record: &MemoryRecord) -> Result<(), PortError>;

    /// Fetch up to `limit` entries, most recent first.
    async fn recent(&self, limit: usize) -> Result<Vec<MemoryEntry>, PortError>;
}

/// Memory store used when no backing database is configured.
///
/// Inserts are dropped and reads return nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledMemoryStore;

#[async_trait]
impl MemoryStorePort for DisabledMemoryStore {
    async fn insert(&self, record: &MemoryRecord) -> Result<(), PortError> {
        tracing::debug!(source = %record.source, "memory store disabled, dropping record");
        Ok(())
    }

    async fn recent(&self, _limit: usize) -> Result<Vec<MemoryEntry>, PortError> {
        Ok(Vec::new())
    }
}
