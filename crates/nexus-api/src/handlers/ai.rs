//! AI assistant HTTP handlers.
//!
//! Each handler resolves the generation backend (400 when no API key is
//! configured), makes a single attempt, and maps provider failures to 502.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use nexus_core::{DorkAnalysis, DorkSuggestion, EngineTranslation, ResearchResult, SearchResultItem};
use nexus_inference::assistant;

use crate::{ApiError, AppState};

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub objective: String,
}

#[derive(Debug, Deserialize)]
pub struct DorkRequest {
    pub dork: String,
}

#[derive(Debug, Deserialize)]
pub struct ResearchRequest {
    pub topic: String,
}

/// Construct a dork from a free-text objective.
pub async fn generate(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<DorkSuggestion>, ApiError> {
    let backend = state.generation_backend()?;
    let suggestion = assistant::suggest_dork(backend.as_ref(), &req.objective).await?;
    Ok(Json(suggestion))
}

/// Analyze a dork for effectiveness and noise.
pub async fn analyze(
    State(state): State<AppState>,
    Json(req): Json<DorkRequest>,
) -> Result<Json<DorkAnalysis>, ApiError> {
    let backend = state.generation_backend()?;
    let analysis = assistant::analyze_dork(backend.as_ref(), &req.dork).await?;
    Ok(Json(analysis))
}

/// Translate a dork's intent to Shodan/Censys/Hunter/ZoomEye syntax.
pub async fn translate(
    State(state): State<AppState>,
    Json(req): Json<DorkRequest>,
) -> Result<Json<Vec<EngineTranslation>>, ApiError> {
    let backend = state.generation_backend()?;
    let translations = assistant::translate_dork(backend.as_ref(), &req.dork).await?;
    Ok(Json(translations))
}

/// Grounded research summary for a topic.
pub async fn research(
    State(state): State<AppState>,
    Json(req): Json<ResearchRequest>,
) -> Result<Json<ResearchResult>, ApiError> {
    let backend = state.generation_backend()?;
    let result = assistant::research_topic(backend.as_ref(), &req.topic).await?;
    Ok(Json(result))
}

/// Simulated live search for the terminal.
pub async fn live_search(
    State(state): State<AppState>,
    Json(req): Json<DorkRequest>,
) -> Result<Json<Vec<SearchResultItem>>, ApiError> {
    let backend = state.generation_backend()?;
    let hits = assistant::live_search(backend.as_ref(), &req.dork).await?;
    Ok(Json(hits))
}
