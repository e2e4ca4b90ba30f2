//! Vault HTTP handlers.
//!
//! Every handler takes the single vault mutex for its whole
//! read-modify-write so concurrent mutations cannot lose updates
//! against the backing file.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracing::{error, info};
use uuid::Uuid;

use nexus_core::{VaultItem, VaultRepository};
use nexus_vault::{remove, render_order};

use crate::{ApiError, AppState};

/// Request body for saving a query to the vault.
///
/// When `dork` is absent, the current builder query is saved.
#[derive(Debug, Deserialize)]
pub struct SaveDorkRequest {
    pub dork: Option<String>,
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub notes: String,
}

/// Vault contents in display order (most recently added first).
pub async fn list_vault(State(state): State<AppState>) -> Json<Vec<VaultItem>> {
    let vault = state.vault.lock().expect("vault lock poisoned");
    Json(render_order(&vault.items))
}

/// Save a query to the vault.
///
/// # Returns
/// - 201 Created with the stored item
/// - 400 Bad Request when the dork is empty (nothing built, nothing given)
/// - 500 Internal Server Error when persisting fails; the in-memory add is
///   kept, so the item reappears in listings and is written out by the
///   next successful save
pub async fn save_to_vault(
    State(state): State<AppState>,
    Json(req): Json<SaveDorkRequest>,
) -> Result<(StatusCode, Json<VaultItem>), ApiError> {
    let dork = match req.dork {
        Some(dork) => dork,
        None => state
            .session
            .read()
            .expect("session lock poisoned")
            .current()
            .to_string(),
    };
    if dork.trim().is_empty() {
        return Err(ApiError::BadRequest("build a dork query first".to_string()));
    }

    let mut guard = state.vault.lock().expect("vault lock poisoned");
    let vault = &mut *guard;
    let item = vault
        .store
        .add(&mut vault.items, &dork, &req.tags, &req.notes)
        .map_err(|e| {
            error!(error = %e, "vault save failed; in-memory item retained");
            ApiError::from(e)
        })?;

    info!(id = %item.id, "dork saved to vault");
    Ok((StatusCode::CREATED, Json(item)))
}

/// Delete a vault item by id.
///
/// Removal is idempotent: an unknown id is not an error.
///
/// # Returns
/// - 204 No Content, whether or not the id existed
/// - 500 Internal Server Error when persisting the deletion fails
pub async fn delete_from_vault(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let mut vault = state.vault.lock().expect("vault lock poisoned");

    let remaining = remove(&vault.items, id);
    if remaining.len() != vault.items.len() {
        vault.store.save(&remaining)?;
        vault.items = remaining;
        info!(%id, "dork removed from vault");
    }
    Ok(StatusCode::NO_CONTENT)
}
