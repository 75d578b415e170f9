//! Telegram bot webhook handler.

use axum::Json;
use axum::extract::State;

use crate::dto::AckResponse;
use crate::error::HttpError;
use crate::state::AppState;
use suzieq_core::TelegramUpdate;

/// Receive a Telegram update.
pub async fn webhook(
    State(state): State<AppState>,
    Json(update): Json<TelegramUpdate>,
) -> Result<Json<AckResponse>, HttpError> {
    tracing::debug!(update_id = ?update.update_id, "telegram update received");
    state.office.handle_telegram_update(&update).await?;
    Ok(Json(AckResponse::OK))
}
