//! # nexus-api
//!
//! Local HTTP shell for the dorknexus workbench.
//!
//! The desktop front-end talks to this API over loopback. All application
//! state (current draft/query, vault contents, AI configuration) lives
//! here; handlers are thin translations between HTTP and the core model.

pub mod error;
pub mod handlers;
pub mod state;

use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use error::ApiError;
pub use state::AppState;

/// Build the application router over the given state.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/dork", get(handlers::builder::current_dork))
        .route("/dork/fields", put(handlers::builder::set_fields))
        .route("/dork/clear", post(handlers::builder::clear))
        .route("/dork/literal", put(handlers::builder::load_literal))
        .route("/dork/search-url", get(handlers::builder::search_url))
        .route("/templates", get(handlers::templates::list_templates))
        .route(
            "/vault",
            get(handlers::vault::list_vault).post(handlers::vault::save_to_vault),
        )
        .route("/vault/:id", delete(handlers::vault::delete_from_vault))
        .route("/ai/generate", post(handlers::ai::generate))
        .route("/ai/analyze", post(handlers::ai::analyze))
        .route("/ai/translate", post(handlers::ai::translate))
        .route("/ai/research", post(handlers::ai::research))
        .route("/ai/search", post(handlers::ai::live_search))
        .route(
            "/settings/api-key",
            get(handlers::settings::get_api_key).put(handlers::settings::set_api_key),
        )
        .layer(TraceLayer::new_for_http())
        // Loopback-only API, consumed from the GUI's own origin
        .layer(CorsLayer::permissive())
        .with_state(state)
}
