//! Integration tests for the Ollama backend against a mock HTTP server.

use recap_core::AiSummarizer;
use recap_inference::OllamaSummarizer;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn chat_response(content: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "model": "test-model",
        "message": {"role": "assistant", "content": content},
        "done": true
    }))
}

#[tokio::test]
async fn test_summarize_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(chat_response("A concise summary of the text."))
        .expect(1)
        .mount(&server)
        .await;

    let backend = OllamaSummarizer::with_config(server.uri(), "test-model".to_string());
    let summary = backend
        .summarize("A paragraph of text that needs summarizing.")
        .await
        .unwrap();

    assert_eq!(summary, "A concise summary of the text.");
}

#[tokio::test]
async fn test_summarize_trims_whitespace() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(chat_response("  padded summary \n"))
        .mount(&server)
        .await;

    let backend = OllamaSummarizer::with_config(server.uri(), "test-model".to_string());
    let summary = backend.summarize("Some input text.").await.unwrap();
    assert_eq!(summary, "padded summary");
}

#[tokio::test]
async fn test_summarize_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(500).set_body_string("model not loaded"))
        .mount(&server)
        .await;

    let backend = OllamaSummarizer::with_config(server.uri(), "test-model".to_string());
    let err = backend.summarize("Some input text.").await.unwrap_err();
    assert!(err.to_string().contains("500"), "unexpected error: {}", err);
}

#[tokio::test]
async fn test_summarize_empty_model_output_is_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(chat_response("   "))
        .mount(&server)
        .await;

    let backend = OllamaSummarizer::with_config(server.uri(), "test-model".to_string());
    assert!(backend.summarize("Some input text.").await.is_err());
}

#[tokio::test]
async fn test_summarize_rejects_empty_input() {
    let backend =
        OllamaSummarizer::with_config("http://127.0.0.1:1".to_string(), "test".to_string());
    assert!(backend.summarize("   ").await.is_err());
}

#[tokio::test]
async fn test_long_input_uses_map_reduce() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(chat_response("chunk summary"))
        .mount(&server)
        .await;

    let backend = OllamaSummarizer::with_config(server.uri(), "test-model".to_string())
        .with_chunk_size(100);

    let long_text = "A line of content in a long document.\n".repeat(20);
    let summary = backend.summarize(&long_text).await.unwrap();
    assert_eq!(summary, "chunk summary");

    // One request per chunk plus the reduce pass
    let requests = server.received_requests().await.unwrap();
    assert!(requests.len() > 2, "expected map-reduce, got {} calls", requests.len());
}

#[tokio::test]
async fn test_health_check_up_and_down() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Ollama is running"))
        .mount(&server)
        .await;

    let up = OllamaSummarizer::with_config(server.uri(), "test".to_string());
    assert!(up.health_check().await.unwrap());

    let down =
        OllamaSummarizer::with_config("http://127.0.0.1:1".to_string(), "test".to_string());
    assert!(!down.health_check().await.unwrap());
}
