//! HTTP contract tests for the Gemini backend against a wiremock server.

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use nexus_core::{Error, GenerationBackend};
use nexus_inference::GeminiBackend;

const MODEL: &str = "gemini-2.0-flash";

fn backend_for(server: &MockServer) -> GeminiBackend {
    GeminiBackend::with_config(server.uri(), MODEL.to_string(), "test-key".to_string())
}

#[tokio::test]
async fn generate_posts_prompt_and_returns_candidate_text() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("/models/{}:generateContent", MODEL)))
        .and(query_param("key", "test-key"))
        .and(body_partial_json(json!({
            "contents": [{"parts": [{"text": "hello model"}]}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {"parts": [{"text": "site:"}, {"text": "example.com"}]}
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let backend = backend_for(&server);
    let text = backend.generate("hello model").await.unwrap();
    assert_eq!(text, "site:example.com");
}

#[tokio::test]
async fn generate_surfaces_the_provider_error_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("/models/{}:generateContent", MODEL)))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {"code": 400, "message": "API key not valid", "status": "INVALID_ARGUMENT"}
        })))
        .mount(&server)
        .await;

    let backend = backend_for(&server);
    let err = backend.generate("hello").await.unwrap_err();
    match err {
        Error::Request(msg) => assert!(msg.contains("API key not valid"), "got: {}", msg),
        other => panic!("expected request error, got {:?}", other),
    }
}

#[tokio::test]
async fn generate_maps_non_json_error_bodies_to_http_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("/models/{}:generateContent", MODEL)))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .mount(&server)
        .await;

    let backend = backend_for(&server);
    let err = backend.generate("hello").await.unwrap_err();
    match err {
        Error::Request(msg) => assert!(msg.contains("503"), "got: {}", msg),
        other => panic!("expected request error, got {:?}", other),
    }
}

#[tokio::test]
async fn empty_candidates_are_an_inference_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("/models/{}:generateContent", MODEL)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
        .mount(&server)
        .await;

    let backend = backend_for(&server);
    assert!(matches!(
        backend.generate("hello").await.unwrap_err(),
        Error::Inference(_)
    ));
}

#[tokio::test]
async fn grounded_generation_sends_the_search_tool_and_parses_sources() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("/models/{}:generateContent", MODEL)))
        .and(body_partial_json(json!({
            "tools": [{"googleSearch": {}}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {"parts": [{"text": "A summary."}]},
                "groundingMetadata": {
                    "groundingChunks": [
                        {"web": {"title": "Exploit-DB GHDB", "uri": "https://www.exploit-db.com/google-hacking-database"}}
                    ]
                }
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let backend = backend_for(&server);
    let grounded = backend.generate_grounded("research this").await.unwrap();
    assert_eq!(grounded.text, "A summary.");
    assert_eq!(grounded.sources.len(), 1);
    assert_eq!(grounded.sources[0].title, "Exploit-DB GHDB");
}

#[tokio::test]
async fn plain_generation_sends_no_tools() {
    let server = MockServer::start().await;

    // Reject any body that carries a tools array; the plain path must not
    let tooled = Mock::given(method("POST"))
        .and(path(format!("/models/{}:generateContent", MODEL)))
        .and(body_partial_json(json!({"tools": [{"googleSearch": {}}]})))
        .respond_with(ResponseTemplate::new(500))
        .expect(0);
    tooled.mount(&server).await;

    Mock::given(method("POST"))
        .and(path(format!("/models/{}:generateContent", MODEL)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"content": {"parts": [{"text": "ok"}]}}]
        })))
        .mount(&server)
        .await;

    let backend = backend_for(&server);
    assert_eq!(backend.generate("hello").await.unwrap(), "ok");
}
