use axum::extract::State;
use axum::response::Json;
use serde::{Deserialize, Serialize};

use crate::application::commands::{add_credential, list_credentials};
use crate::domain::Credential;
use crate::error::ApiError;
use crate::infrastructure::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCredentialRequest {
    // Absent fields deserialize as empty so the handler can answer with the
    // fixed "Missing required fields" envelope instead of a 422.
    #[serde(default)]
    pub recipient_email: String,
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Serialize)]
pub struct CreateCredentialResponse {
    pub status: &'static str,
    pub credential: Credential,
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Credential>>, ApiError> {
    let credentials = list_credentials::execute(state.store.as_ref()).await?;
    Ok(Json(credentials))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CreateCredentialRequest>,
) -> Result<Json<CreateCredentialResponse>, ApiError> {
    let _guard = state.store_lock.lock().await;

    let credential = add_credential::execute(
        state.store.as_ref(),
        add_credential::AddCredentialCommand {
            recipient_email: payload.recipient_email,
            key: payload.key,
            value: payload.value,
        },
    )
    .await?;

    tracing::info!(id = credential.id, key = %credential.key, "credential added");
    Ok(Json(CreateCredentialResponse {
        status: "success",
        credential,
    }))
}
