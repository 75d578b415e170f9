//! Slack Events API handler.

use axum::Json;
use axum::extract::State;

use crate::dto::SlackEventResponse;
use crate::error::HttpError;
use crate::state::AppState;
use suzieq_core::SlackEventEnvelope;

/// Receive a Slack event callback.
pub async fn events(
    State(state): State<AppState>,
    Json(envelope): Json<SlackEventEnvelope>,
) -> Result<Json<SlackEventResponse>, HttpError> {
    let outcome = state.office.handle_slack_event(&envelope).await?;
    Ok(Json(outcome.into()))
}
