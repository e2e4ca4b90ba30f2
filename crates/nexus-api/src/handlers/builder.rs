//! Query builder HTTP handlers.
//!
//! The current query string is always the re-derivation of the draft,
//! except after a literal load (template or vault entry), which replaces
//! the string wholesale; the next field edit rebuilds from the draft.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use nexus_core::{defaults, QueryDraft, QueryField};

use crate::{ApiError, AppState};

/// Snapshot of the builder state returned by every builder endpoint.
#[derive(Debug, Serialize)]
pub struct DorkView {
    pub current: String,
    pub draft: QueryDraft,
}

impl DorkView {
    fn of(session: &nexus_core::QuerySession) -> Self {
        Self {
            current: session.current().to_string(),
            draft: session.draft().clone(),
        }
    }
}

/// Partial field update; absent fields are left untouched.
#[derive(Debug, Deserialize)]
pub struct SetFieldsRequest {
    pub site: Option<String>,
    pub filetype: Option<String>,
    pub intitle: Option<String>,
    pub inurl: Option<String>,
    pub intext: Option<String>,
    pub exact: Option<String>,
    pub exclude: Option<String>,
}

impl SetFieldsRequest {
    fn updates(self) -> Vec<(QueryField, String)> {
        [
            (QueryField::Site, self.site),
            (QueryField::Filetype, self.filetype),
            (QueryField::Intitle, self.intitle),
            (QueryField::Inurl, self.inurl),
            (QueryField::Intext, self.intext),
            (QueryField::Exact, self.exact),
            (QueryField::Exclude, self.exclude),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
        .collect()
    }
}

/// Request body for a literal query load.
#[derive(Debug, Deserialize)]
pub struct LoadLiteralRequest {
    pub query: String,
}

/// Current query string and draft.
pub async fn current_dork(State(state): State<AppState>) -> Json<DorkView> {
    let session = state.session.read().expect("session lock poisoned");
    Json(DorkView::of(&session))
}

/// Set one or more draft fields and rebuild the query string.
///
/// # Returns
/// - 200 OK with the rebuilt builder state
pub async fn set_fields(
    State(state): State<AppState>,
    Json(req): Json<SetFieldsRequest>,
) -> Json<DorkView> {
    let mut session = state.session.write().expect("session lock poisoned");
    for (field, value) in req.updates() {
        session.set_field(field, value);
    }
    Json(DorkView::of(&session))
}

/// Reset every field and the current query string.
pub async fn clear(State(state): State<AppState>) -> Json<DorkView> {
    let mut session = state.session.write().expect("session lock poisoned");
    session.clear();
    Json(DorkView::of(&session))
}

/// Replace the current query string wholesale (template or vault load).
///
/// The draft is deliberately left as-is; a later field edit rebuilds from
/// the draft and discards the loaded literal.
pub async fn load_literal(
    State(state): State<AppState>,
    Json(req): Json<LoadLiteralRequest>,
) -> Json<DorkView> {
    let mut session = state.session.write().expect("session lock poisoned");
    session.load_literal(req.query);
    Json(DorkView::of(&session))
}

/// Google search URL for the current query.
///
/// # Returns
/// - 200 OK with `{ "url": "https://www.google.com/search?q=..." }`
/// - 400 Bad Request when no query has been built yet
pub async fn search_url(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let session = state.session.read().expect("session lock poisoned");
    let current = session.current();
    if current.is_empty() {
        return Err(ApiError::BadRequest(
            "build a dork query first".to_string(),
        ));
    }
    let url = format!("{}{}", defaults::GOOGLE_SEARCH_URL, urlencoding::encode(current));
    Ok(Json(serde_json::json!({ "url": url })))
}
