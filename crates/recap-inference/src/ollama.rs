//! Ollama summarization backend implementation.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use recap_core::{defaults, AiSummarizer, Error, Result};

/// Default Ollama endpoint.
pub const DEFAULT_OLLAMA_URL: &str = defaults::OLLAMA_URL;

/// Default generation model.
pub const DEFAULT_GEN_MODEL: &str = defaults::GEN_MODEL;

/// AI summarization backend using the Ollama chat API.
///
/// Long inputs are summarized map-reduce style: split into
/// line-boundary chunks, each chunk summarized, then the concatenated
/// chunk summaries summarized once more.
pub struct OllamaSummarizer {
    client: Client,
    base_url: String,
    model: String,
    chunk_size: usize,
    max_summary_chars: usize,
    timeout_secs: u64,
}

impl OllamaSummarizer {
    /// Create a new backend with default settings.
    pub fn new() -> Self {
        Self::with_config(DEFAULT_OLLAMA_URL.to_string(), DEFAULT_GEN_MODEL.to_string())
    }

    /// Create a new backend with a custom endpoint and model.
    pub fn with_config(base_url: String, model: String) -> Self {
        let timeout_secs = std::env::var("RECAP_GEN_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(defaults::AI_SUMMARY_TIMEOUT_SECS);

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        info!(
            subsystem = "inference",
            component = "ollama",
            model = %model,
            "Initializing Ollama summarizer: url={}",
            base_url
        );

        Self {
            client,
            base_url,
            model,
            chunk_size: defaults::AI_CHUNK_SIZE,
            max_summary_chars: defaults::SUMMARY_MAX_CHARS,
            timeout_secs,
        }
    }

    /// Create from environment variables.
    ///
    /// `OLLAMA_BASE` and `OLLAMA_GEN_MODEL` override the defaults.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("OLLAMA_BASE").unwrap_or_else(|_| DEFAULT_OLLAMA_URL.to_string());
        let model =
            std::env::var("OLLAMA_GEN_MODEL").unwrap_or_else(|_| DEFAULT_GEN_MODEL.to_string());
        Self::with_config(base_url, model)
    }

    /// Set the chunk size for map-reduce splitting.
    pub fn with_chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = size.max(1);
        self
    }

    /// Split text into chunks of approximately `chunk_size` characters
    /// on line boundaries.
    fn split_into_chunks(&self, text: &str) -> Vec<String> {
        let mut chunks = Vec::new();
        let mut current = String::new();

        for line in text.lines() {
            if current.len() + line.len() + 1 > self.chunk_size && !current.is_empty() {
                chunks.push(current.clone());
                current.clear();
            }
            if !current.is_empty() {
                current.push('\n');
            }
            current.push_str(line);
        }

        if !current.is_empty() {
            chunks.push(current);
        }

        if chunks.is_empty() {
            chunks.push(text.to_string());
        }

        chunks
    }

    /// Directly summarize text without chunking.
    async fn summarize_direct(&self, text: &str) -> Result<String> {
        let start = Instant::now();
        let prompt = format!(
            "Summarize the following text in approximately {} characters or less. \
             Focus on the key points and main ideas:\n\n{}",
            self.max_summary_chars, text
        );

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt,
            }],
            stream: false,
        };

        let response = self
            .client
            .post(format!("{}/api/chat", self.base_url))
            .timeout(Duration::from_secs(self.timeout_secs))
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Inference(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Inference(format!(
                "Ollama returned {}: {}",
                status, body
            )));
        }

        let result: ChatResponse = response
            .json()
            .await
            .map_err(|e| Error::Inference(format!("Failed to parse response: {}", e)))?;

        let content = result.message.content.trim().to_string();
        let elapsed = start.elapsed().as_millis() as u64;
        debug!(
            subsystem = "inference",
            component = "ollama",
            op = "summarize",
            response_len = content.len(),
            duration_ms = elapsed,
            "Summarization complete"
        );
        if elapsed > 30_000 {
            warn!(
                duration_ms = elapsed,
                prompt_len = text.len(),
                slow = true,
                "Slow summarization request"
            );
        }

        if content.is_empty() {
            return Err(Error::Inference("Model returned an empty summary".into()));
        }
        Ok(content)
    }
}

impl Default for OllamaSummarizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Chat API message for `/api/chat`.
#[derive(Serialize, Deserialize, Clone)]
struct ChatMessage {
    role: String,
    content: String,
}

/// Request payload for the Ollama `/api/chat` endpoint.
#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    stream: bool,
}

/// Response from the Ollama `/api/chat` endpoint.
#[derive(Deserialize)]
struct ChatResponse {
    message: ChatMessage,
}

#[async_trait]
impl AiSummarizer for OllamaSummarizer {
    async fn summarize(&self, text: &str) -> Result<String> {
        if text.trim().is_empty() {
            return Err(Error::InvalidInput(
                "Cannot summarize empty text".to_string(),
            ));
        }

        if text.len() < self.chunk_size {
            return self.summarize_direct(text).await;
        }

        // Map-reduce: chunk, summarize each, combine.
        let chunks = self.split_into_chunks(text);
        debug!(
            subsystem = "inference",
            component = "ollama",
            op = "summarize",
            chunk_count = chunks.len(),
            prompt_len = text.len(),
            "Long input, using map-reduce summarization"
        );

        let mut chunk_summaries = Vec::with_capacity(chunks.len());
        for chunk in &chunks {
            chunk_summaries.push(self.summarize_direct(chunk).await?);
        }

        if chunk_summaries.len() == 1 {
            return Ok(chunk_summaries.remove(0));
        }

        self.summarize_direct(&chunk_summaries.join("\n\n")).await
    }

    async fn health_check(&self) -> Result<bool> {
        let response = self
            .client
            .get(&self.base_url)
            .timeout(Duration::from_secs(5))
            .send()
            .await;
        Ok(matches!(response, Ok(r) if r.status().is_success()))
    }

    fn name(&self) -> &str {
        "ollama"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructor_defaults() {
        let backend = OllamaSummarizer::with_config(
            "http://localhost:11434".to_string(),
            "test-model".to_string(),
        );
        assert_eq!(backend.base_url, "http://localhost:11434");
        assert_eq!(backend.model, "test-model");
        assert_eq!(backend.chunk_size, defaults::AI_CHUNK_SIZE);
    }

    #[test]
    fn test_split_into_chunks_short_text() {
        let backend = OllamaSummarizer::with_config(
            "http://localhost:11434".to_string(),
            "test".to_string(),
        )
        .with_chunk_size(1000);

        let text = "This is a short text.";
        let chunks = backend.split_into_chunks(text);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0], text);
    }

    #[test]
    fn test_split_into_chunks_long_text() {
        let backend = OllamaSummarizer::with_config(
            "http://localhost:11434".to_string(),
            "test".to_string(),
        )
        .with_chunk_size(50);

        let text = "Line with some content here.\n".repeat(10);
        let chunks = backend.split_into_chunks(&text);

        assert!(chunks.len() > 1, "expected multiple chunks");
        for (i, chunk) in chunks.iter().enumerate() {
            assert!(
                chunk.len() <= 100,
                "chunk {} is {} chars",
                i,
                chunk.len()
            );
        }
    }

    #[test]
    fn test_split_into_chunks_single_long_line() {
        let backend = OllamaSummarizer::with_config(
            "http://localhost:11434".to_string(),
            "test".to_string(),
        )
        .with_chunk_size(10);

        // One unbreakable line stays one chunk
        let chunks = backend.split_into_chunks("a".repeat(50).as_str());
        assert_eq!(chunks.len(), 1);
    }

    #[test]
    fn test_name() {
        let backend = OllamaSummarizer::new();
        assert_eq!(AiSummarizer::name(&backend), "ollama");
    }
}
