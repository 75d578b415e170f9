//! Supabase (PostgREST) memory store.

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use suzieq_core::{MemoryEntry, MemoryRecord, MemoryStorePort, PortError};
use url::Url;

use crate::config::ClientConfig;
use crate::error::ClientResult;
use crate::http::{build_client, ensure_success, parse_base_url};

const SERVICE: &str = "supabase";

/// Table holding the decision log.
pub const MEMORY_TABLE: &str = "memory";

/// Memory store backed by a Supabase table through its REST API.
pub struct SupabaseMemoryStore {
    client: reqwest::Client,
    table_url: Url,
    headers: HeaderMap,
}

impl SupabaseMemoryStore {
    /// Create a store for the `memory` table of the project at `base_url`.
    pub fn new(base_url: &str, service_key: &str, config: &ClientConfig) -> ClientResult<Self> {
        Self::with_table(base_url, service_key, MEMORY_TABLE, config)
    }

    /// Create a store for an arbitrary table.
    pub fn with_table(
        base_url: &str,
        service_key: &str,
        table: &str,
        config: &ClientConfig,
    ) -> ClientResult<Self> {
        let table_url = parse_base_url(base_url.trim_end_matches('/'))?
            .join(&format!("rest/v1/{table}"))?;

        Ok(Self {
            client: build_client(config)?,
            table_url,
            headers: auth_headers(service_key),
        })
    }

    /// REST endpoint of the backing table.
    pub const fn table_url(&self) -> &Url {
        &self.table_url
    }

    async fn insert_record(&self, record: &MemoryRecord) -> ClientResult<()> {
        let response = self
            .client
            .post(self.table_url.clone())
            .headers(self.headers.clone())
            .header("Prefer", "return=minimal")
            .json(record)
            .send()
            .await?;
        ensure_success(response).await?;
        Ok(())
    }

    async fn select_recent(&self, limit: usize) -> ClientResult<Vec<MemoryEntry>> {
        let limit = limit.to_string();
        let response = self
            .client
            .get(self.table_url.clone())
            .headers(self.headers.clone())
            .query(&[
                ("select", "*"),
                ("order", "timestamp.desc"),
                ("limit", limit.as_str()),
            ])
            .send()
            .await?;
        let response = ensure_success(response).await?;
        Ok(response.json().await?)
    }
}

/// `apikey` and bearer headers. Keys that are not valid header values are
/// skipped, leaving the request unauthenticated so Supabase rejects it.
fn auth_headers(service_key: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    if let Ok(value) = HeaderValue::from_str(service_key) {
        headers.insert(HeaderName::from_static("apikey"), value);
    } else {
        tracing::warn!("SUPABASE_SERVICE_KEY is not a valid header value, ignoring it");
    }
    if let Ok(mut value) = HeaderValue::from_str(&format!("Bearer {service_key}")) {
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }
    headers
}

#[async_trait]
impl MemoryStorePort for SupabaseMemoryStore {
    async fn insert(&self, record: &MemoryRecord) -> Result<(), PortError> {
        self.insert_record(record)
            .await
            .map_err(|e| e.into_port_error(SERVICE))
    }

    async fn recent(&self, limit: usize) -> Result<Vec<MemoryEntry>, PortError> {
        self.select_recent(limit)
            .await
            .map_err(|e| e.into_port_error(SERVICE))
    }
}
