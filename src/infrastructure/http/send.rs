use axum::extract::{Path, State};
use axum::response::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::commands::send_credential;
use crate::error::ApiError;
use crate::infrastructure::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendCredentialResponse {
    pub status: &'static str,
    pub last_sent: DateTime<Utc>,
}

pub async fn send(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<SendCredentialResponse>, ApiError> {
    let _guard = state.store_lock.lock().await;

    let outcome =
        send_credential::execute(state.store.as_ref(), state.mailer.as_ref(), id).await?;

    tracing::info!(id, "credential sent");
    Ok(Json(SendCredentialResponse {
        status: "success",
        last_sent: outcome.last_sent,
    }))
}
