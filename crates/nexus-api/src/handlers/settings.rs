//! Settings HTTP handlers.
//!
//! The API key is write-only: reads return configured state and a masked
//! tail, never the full key.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use nexus_core::Error;

use crate::{ApiError, AppState};

/// Settings snapshot safe to display.
#[derive(Debug, Serialize)]
pub struct ApiKeyStatus {
    pub configured: bool,
    pub masked_key: Option<String>,
    pub model: String,
}

/// Request body for updating the API key. An empty key clears the
/// configuration.
#[derive(Debug, Deserialize)]
pub struct UpdateApiKeyRequest {
    pub api_key: String,
}

/// Current AI configuration state (masked).
pub async fn get_api_key(State(state): State<AppState>) -> Json<ApiKeyStatus> {
    let config = state.config.read().expect("config lock poisoned");
    Json(ApiKeyStatus {
        configured: config.is_configured(),
        masked_key: config.masked_key(),
        model: config.model.clone(),
    })
}

/// Update and persist the API key; takes effect for subsequent AI calls
/// without a restart.
///
/// # Returns
/// - 200 OK with the new (masked) settings state
/// - 500 Internal Server Error when the config file cannot be written;
///   the in-memory update is kept
pub async fn set_api_key(
    State(state): State<AppState>,
    Json(req): Json<UpdateApiKeyRequest>,
) -> Result<Json<ApiKeyStatus>, ApiError> {
    let key = req.api_key.trim().to_string();

    let snapshot = {
        let mut config = state.config.write().expect("config lock poisoned");
        config.api_key = if key.is_empty() { None } else { Some(key) };
        config.clone()
    };

    snapshot
        .save_to(&state.config_path)
        .map_err(|e| ApiError::Internal(Error::Config(e.to_string())))?;

    info!(configured = snapshot.is_configured(), "API key updated");
    Ok(Json(ApiKeyStatus {
        configured: snapshot.is_configured(),
        masked_key: snapshot.masked_key(),
        model: snapshot.model.clone(),
    }))
}
