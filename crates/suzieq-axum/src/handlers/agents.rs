//! Agent dispatch handler.

use axum::Json;
use axum::extract::{Path, State};

use crate::error::HttpError;
use crate::state::AppState;
use suzieq_core::{AgentAddress, AgentInvokePayload, AgentReply};

/// Invoke the agent addressed by `/agents/{dept}/{role}/{name}`.
pub async fn invoke(
    State(state): State<AppState>,
    Path((dept, role, name)): Path<(String, String, String)>,
    Json(payload): Json<AgentInvokePayload>,
) -> Result<Json<AgentReply>, HttpError> {
    let address = AgentAddress::new(dept, role, name);
    Ok(Json(state.office.invoke_agent(address, &payload).await?))
}
