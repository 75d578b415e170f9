//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the web adapter. Every integration whose credentials are missing is
//! replaced by its no-op port here, so the service itself never checks
//! configuration.

use std::sync::Arc;

use anyhow::{Context, Result};
use suzieq_core::ports::{
    BrainPort, DisabledMemoryStore, MemoryStorePort, NoopSlackMessenger, NoopTelegramMessenger,
    OfficePorts, SlackMessengerPort, TelegramMessengerPort,
};
use suzieq_core::settings::SLACK_EVENTS_PATH;
use suzieq_core::{OfficeService, Settings};
use suzieq_http::{BrainClient, ClientConfig, SlackClient, SupabaseMemoryStore, TelegramClient};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Application context for the Axum adapter.
///
/// Holds the initialized office service shared by every handler.
pub struct AxumContext {
    /// The office orchestrator.
    pub office: OfficeService,
}

impl AxumContext {
    /// Wrap an already-built office service.
    pub const fn new(office: OfficeService) -> Self {
        Self { office }
    }
}

/// Build the port adapters selected by `settings`.
pub fn build_ports(settings: &Settings, client: &ClientConfig) -> Result<OfficePorts> {
    let brain: Arc<dyn BrainPort> = Arc::new(
        BrainClient::new(&settings.brain_url, client).context("failed to create brain client")?,
    );

    let memory: Arc<dyn MemoryStorePort> = match settings.supabase_url.as_deref() {
        Some(url) => Arc::new(
            SupabaseMemoryStore::new(url, &settings.supabase_service_key, client)
                .context("failed to create Supabase memory store")?,
        ),
        None => {
            info!("SUPABASE_URL not set, memory log disabled");
            Arc::new(DisabledMemoryStore)
        }
    };

    let slack: Arc<dyn SlackMessengerPort> = match settings.slack_bot_token.as_deref() {
        Some(token) => {
            Arc::new(SlackClient::new(token, client).context("failed to create Slack client")?)
        }
        None => {
            info!("SLACK_BOT_TOKEN not set, Slack replies disabled");
            Arc::new(NoopSlackMessenger)
        }
    };

    let telegram: Arc<dyn TelegramMessengerPort> = match settings.telegram_bot_token.as_deref() {
        Some(token) => Arc::new(
            TelegramClient::new(token, client).context("failed to create Telegram client")?,
        ),
        None => {
            info!("TELEGRAM_BOT_TOKEN not set, Telegram replies disabled");
            Arc::new(NoopTelegramMessenger)
        }
    };

    Ok(OfficePorts::new(brain, memory, slack, telegram))
}

/// Bootstrap the office with HTTP adapters built from `settings`.
pub fn bootstrap(settings: &Settings) -> Result<AxumContext> {
    tracing::info!(
        target: "suzieq.bootstrap",
        brain_url = %settings.brain_url,
        memory = settings.supabase_url.is_some(),
        slack = settings.slack_bot_token.is_some(),
        telegram = settings.telegram_bot_token.is_some(),
        ceo_channel = settings.ceo_slack_channel.is_some(),
        "Axum bootstrap resolved integrations"
    );

    let ports = build_ports(settings, &ClientConfig::default())?;
    let office = OfficeService::new(ports, settings.ceo_slack_channel.clone());
    Ok(AxumContext::new(office))
}

/// Serve the office on a pre-bound listener until `cancel` fires.
pub async fn serve(listener: TcpListener, ctx: AxumContext, cancel: CancellationToken) -> Result<()> {
    let app = crate::routes::create_router(ctx);

    axum::serve(listener, app)
        .with_graceful_shutdown(cancel.cancelled_owned())
        .await?;

    info!("Suzie Q office shut down");
    Ok(())
}

/// Bind the configured address and serve until `cancel` fires.
pub async fn start_server(settings: Settings, cancel: CancellationToken) -> Result<()> {
    let ctx = bootstrap(&settings)?;

    let addr = settings.bind_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("Suzie Q office listening on http://{}", listener.local_addr()?);
    if let Some(url) = settings.telegram_webhook_url() {
        info!("   Telegram webhook: {url}");
    }
    if let Some(url) = settings.public_url(SLACK_EVENTS_PATH) {
        info!("   Slack events:     {url}");
    }

    serve(listener, ctx, cancel).await
}
