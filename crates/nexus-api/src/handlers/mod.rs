//! Handler modules for nexus-api.

pub mod ai;
pub mod builder;
pub mod settings;
pub mod templates;
pub mod vault;

use axum::Json;

/// Liveness probe.
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
