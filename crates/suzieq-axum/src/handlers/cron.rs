//! Scheduler-triggered jobs.

use axum::Json;
use axum::extract::State;

use crate::dto::DailyReportResponse;
use crate::error::HttpError;
use crate::state::AppState;

/// Generate the daily executive report.
///
/// Takes no body; the external scheduler only needs to POST.
pub async fn daily_report(
    State(state): State<AppState>,
) -> Result<Json<DailyReportResponse>, HttpError> {
    let summary = state.office.daily_report().await?;
    Ok(Json(DailyReportResponse::new(summary)))
}
