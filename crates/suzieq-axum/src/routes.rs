//! Route definitions and router construction.

use axum::Json;
use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::bootstrap::AxumContext;
use crate::dto::AckResponse;
use crate::handlers;
use crate::state::AppState;

/// Webhook routes, without state applied.
pub(crate) fn office_routes() -> Router<AppState> {
    Router::new()
        .route("/slack/events", post(handlers::slack::events))
        .route("/telegram/webhook", post(handlers::telegram::webhook))
        .route(
            "/agents/{dept}/{role}/{name}",
            post(handlers::agents::invoke),
        )
        .route("/cron/daily-report", post(handlers::cron::daily_report))
}

/// Create the main Axum router with all routes.
///
/// # Path Parameter Syntax
/// Axum 0.8 uses brace syntax for path parameters: `{dept}`, `{role}`
pub fn create_router(ctx: AxumContext) -> Router {
    let state: AppState = Arc::new(ctx);

    Router::new()
        .route("/health", get(health_check))
        .merge(office_routes().with_state(state))
        .layer(TraceLayer::new_for_http())
}

/// Health check endpoint.
pub(crate) async fn health_check() -> Json<AckResponse> {
    Json(AckResponse::OK)
}
