//! Gemini generation backend implementation.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, info};

use nexus_core::{defaults, Error, GenerationBackend, GroundedResponse, ResearchSource, Result};

use crate::config::AiConfig;

/// Gemini generation backend over the generative language REST API.
#[derive(Debug)]
pub struct GeminiBackend {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<Vec<Tool>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

/// The web-search grounding tool; serializes as `{"googleSearch": {}}`.
#[derive(Debug, Serialize)]
struct Tool {
    #[serde(rename = "googleSearch")]
    google_search: serde_json::Value,
}

impl Tool {
    fn google_search() -> Self {
        Self {
            google_search: serde_json::Value::Object(serde_json::Map::new()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default, rename = "groundingMetadata")]
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GroundingMetadata {
    #[serde(default, rename = "groundingChunks")]
    grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Debug, Deserialize)]
struct GroundingChunk {
    #[serde(default)]
    web: Option<WebSource>,
}

#[derive(Debug, Deserialize)]
struct WebSource {
    #[serde(default)]
    title: String,
    #[serde(default)]
    uri: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    message: String,
}

// =============================================================================
// BACKEND
// =============================================================================

impl GeminiBackend {
    /// Create a backend with the default endpoint and model.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_config(
            defaults::GEMINI_BASE_URL.to_string(),
            defaults::GEN_MODEL.to_string(),
            api_key.into(),
        )
    }

    /// Create a backend with a custom endpoint and model.
    pub fn with_config(base_url: String, model: String, api_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(defaults::GEN_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        info!(model = %model, "Initializing Gemini backend");

        Self {
            client,
            base_url,
            model,
            api_key,
        }
    }

    /// Create a backend from the persisted configuration.
    ///
    /// Fails with `Error::NotConfigured` when no API key is present, so
    /// callers surface "not configured" instead of attempting a call.
    pub fn from_config(config: &AiConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| Error::NotConfigured("set a Gemini API key in settings".to_string()))?;

        Ok(Self::with_config(
            defaults::GEMINI_BASE_URL.to_string(),
            config.model.clone(),
            api_key,
        ))
    }

    /// The configured model name.
    pub fn model(&self) -> &str {
        &self.model
    }

    async fn request(&self, prompt: &str, grounded: bool) -> Result<GenerateResponse> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            tools: grounded.then(|| vec![Tool::google_search()]),
        };

        let started = Instant::now();
        let response = self.client.post(&url).json(&body).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorBody>(&text)
                .map(|b| b.error.message)
                .unwrap_or_else(|_| format!("HTTP {}: {}", status, text));
            return Err(Error::Request(format!("Gemini API error: {}", message)));
        }

        let parsed: GenerateResponse = serde_json::from_str(&text)
            .map_err(|e| Error::Inference(format!("Failed to parse response JSON: {}", e)))?;

        debug!(
            model = %self.model,
            prompt_len = prompt.len(),
            response_len = text.len(),
            duration_ms = started.elapsed().as_millis() as u64,
            "generation complete"
        );
        Ok(parsed)
    }

    /// Concatenate the text parts of the first candidate.
    fn collect_text(response: &GenerateResponse) -> Result<String> {
        let text: String = response
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect()
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(Error::Inference("empty response from model".to_string()));
        }
        Ok(text)
    }

    fn collect_sources(response: &GenerateResponse) -> Vec<ResearchSource> {
        response
            .candidates
            .first()
            .and_then(|c| c.grounding_metadata.as_ref())
            .map(|meta| {
                meta.grounding_chunks
                    .iter()
                    .filter_map(|chunk| chunk.web.as_ref())
                    .map(|web| ResearchSource {
                        title: web.title.clone(),
                        uri: web.uri.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[async_trait]
impl GenerationBackend for GeminiBackend {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        let response = self.request(prompt, false).await?;
        Self::collect_text(&response)
    }

    async fn generate_grounded(&self, prompt: &str) -> Result<GroundedResponse> {
        let response = self.request(prompt, true).await?;
        Ok(GroundedResponse {
            text: Self::collect_text(&response)?,
            sources: Self::collect_sources(&response),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_payload_serializes_prompt() {
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: "hello" }],
            }],
            tools: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
        assert!(json.get("tools").is_none());
    }

    #[test]
    fn grounded_payload_includes_google_search_tool() {
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: "hello" }],
            }],
            tools: Some(vec![Tool::google_search()]),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert!(json["tools"][0]["googleSearch"].is_object());
    }

    #[test]
    fn collect_text_concatenates_parts() {
        let response: GenerateResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"site:"},{"text":"example.com"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(
            GeminiBackend::collect_text(&response).unwrap(),
            "site:example.com"
        );
    }

    #[test]
    fn collect_text_rejects_empty_candidates() {
        let response: GenerateResponse = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert!(GeminiBackend::collect_text(&response).is_err());
    }

    #[test]
    fn collect_sources_reads_grounding_chunks() {
        let response: GenerateResponse = serde_json::from_str(
            r#"{"candidates":[{
                "content":{"parts":[{"text":"summary"}]},
                "groundingMetadata":{"groundingChunks":[
                    {"web":{"title":"GHDB","uri":"https://example.org/ghdb"}},
                    {"other":{}}
                ]}
            }]}"#,
        )
        .unwrap();
        let sources = GeminiBackend::collect_sources(&response);
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].uri, "https://example.org/ghdb");
    }

    #[test]
    fn from_config_requires_a_key() {
        let err = GeminiBackend::from_config(&AiConfig::default()).unwrap_err();
        assert!(matches!(err, Error::NotConfigured(_)));
    }
}
