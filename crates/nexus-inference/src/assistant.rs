//! The assistant operations: prompt → backend → parsed structure.
//!
//! Each operation validates its input at the boundary, makes exactly one
//! generation attempt, and maps model misbehavior to `Error::Inference`.

use tracing::debug;

use nexus_core::{
    DorkAnalysis, DorkSuggestion, EngineTranslation, Error, GenerationBackend, ResearchResult,
    Result, SearchResultItem,
};

use crate::prompts;

/// Construct a dork from a free-text objective.
pub async fn suggest_dork(
    backend: &dyn GenerationBackend,
    objective: &str,
) -> Result<DorkSuggestion> {
    let objective = objective.trim();
    if objective.is_empty() {
        return Err(Error::InvalidInput("objective must not be empty".to_string()));
    }

    let raw = backend.generate(&prompts::suggest(objective)).await?;
    let suggestion: DorkSuggestion = prompts::parse_payload(&raw)?;
    debug!(backend = backend.name(), dork = %suggestion.dork, "dork suggested");
    Ok(suggestion)
}

/// Analyze an existing dork for effectiveness and noise.
pub async fn analyze_dork(backend: &dyn GenerationBackend, dork: &str) -> Result<DorkAnalysis> {
    let dork = dork.trim();
    if dork.is_empty() {
        return Err(Error::InvalidInput("dork must not be empty".to_string()));
    }

    let raw = backend.generate(&prompts::analyze(dork)).await?;
    prompts::parse_payload(&raw)
}

/// Translate a dork's intent to the other search engines.
pub async fn translate_dork(
    backend: &dyn GenerationBackend,
    dork: &str,
) -> Result<Vec<EngineTranslation>> {
    let dork = dork.trim();
    if dork.is_empty() {
        return Err(Error::InvalidInput("dork must not be empty".to_string()));
    }

    let raw = backend.generate(&prompts::translate(dork)).await?;
    let translations: Vec<EngineTranslation> = prompts::parse_payload(&raw)?;
    debug!(
        backend = backend.name(),
        result_count = translations.len(),
        "dork translated"
    );
    Ok(translations)
}

/// Grounded research summary for a topic.
pub async fn research_topic(
    backend: &dyn GenerationBackend,
    topic: &str,
) -> Result<ResearchResult> {
    let topic = topic.trim();
    if topic.is_empty() {
        return Err(Error::InvalidInput("topic must not be empty".to_string()));
    }

    let grounded = backend.generate_grounded(&prompts::research(topic)).await?;
    Ok(ResearchResult {
        content: grounded.text,
        sources: grounded.sources,
    })
}

/// Simulated live search for the terminal.
pub async fn live_search(
    backend: &dyn GenerationBackend,
    dork: &str,
) -> Result<Vec<SearchResultItem>> {
    let dork = dork.trim();
    if dork.is_empty() {
        return Err(Error::InvalidInput("dork must not be empty".to_string()));
    }

    let raw = backend.generate(&prompts::live_search(dork)).await?;
    prompts::parse_payload(&raw)
}
