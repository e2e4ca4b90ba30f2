//! Template catalog HTTP handlers.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use nexus_core::{templates, CategoryFilter, Template};

use crate::{ApiError, AppState};

/// Query parameters for listing templates.
#[derive(Debug, Deserialize)]
pub struct ListTemplatesQuery {
    /// Category selector: `all` (default), `files`, `vulns`, `network`, `osint`.
    pub category: Option<String>,
}

/// List catalog templates, optionally filtered by category.
///
/// # Returns
/// - 200 OK with templates in catalog declaration order
/// - 400 Bad Request on an unknown category
pub async fn list_templates(
    State(_state): State<AppState>,
    Query(query): Query<ListTemplatesQuery>,
) -> Result<Json<Vec<Template>>, ApiError> {
    let selector = match query.category.as_deref() {
        None => CategoryFilter::All,
        Some(raw) => raw
            .parse::<CategoryFilter>()
            .map_err(ApiError::BadRequest)?,
    };
    Ok(Json(templates::filter(selector)))
}
