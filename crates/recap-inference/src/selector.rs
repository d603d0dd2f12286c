//! Hybrid summarization selector.
//!
//! Attempts AI summarization with a bounded timeout and falls back to
//! deterministic keyword extraction on any failure. The chosen path is
//! reported truthfully in [`SummaryOutcome::method`] so stored records
//! never claim an AI summary they did not get.

use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use recap_core::{defaults, AiSummarizer, GenerationMethod, SummaryOutcome};

use crate::keyword::KeywordSummarizer;

/// Summarizer that prefers an AI backend but always produces a result.
///
/// The selector never returns an error: every input, including empty
/// text, yields a `SummaryOutcome`.
pub struct HybridSummarizer {
    ai: Option<Arc<dyn AiSummarizer>>,
    fallback: KeywordSummarizer,
    timeout: Duration,
}

impl HybridSummarizer {
    /// Create a selector backed by the given AI summarizer.
    pub fn new(ai: Arc<dyn AiSummarizer>) -> Self {
        Self {
            ai: Some(ai),
            fallback: KeywordSummarizer::new(),
            timeout: Duration::from_secs(defaults::AI_SUMMARY_TIMEOUT_SECS),
        }
    }

    /// Create a selector with no AI backend. Every call uses the
    /// keyword fallback directly.
    pub fn offline() -> Self {
        Self {
            ai: None,
            fallback: KeywordSummarizer::new(),
            timeout: Duration::from_secs(defaults::AI_SUMMARY_TIMEOUT_SECS),
        }
    }

    /// Override the AI attempt timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Whether an AI backend is configured.
    pub fn has_ai_backend(&self) -> bool {
        self.ai.is_some()
    }

    /// Whether the AI backend is configured and reachable.
    pub async fn ai_available(&self) -> bool {
        match &self.ai {
            Some(ai) => ai.health_check().await.unwrap_or(false),
            None => false,
        }
    }

    /// Summarize `text`, reporting which path produced the result.
    pub async fn summarize(&self, text: &str) -> SummaryOutcome {
        if text.trim().is_empty() {
            debug!(
                subsystem = "inference",
                component = "selector",
                "Empty input, returning no-content summary"
            );
            return SummaryOutcome {
                summary: defaults::NO_CONTENT_SUMMARY.to_string(),
                method: GenerationMethod::KeywordFallback,
            };
        }

        if let Some(ai) = &self.ai {
            let start = Instant::now();
            match tokio::time::timeout(self.timeout, ai.summarize(text)).await {
                Ok(Ok(summary)) => {
                    info!(
                        subsystem = "inference",
                        component = "selector",
                        generation_method = "ai",
                        duration_ms = start.elapsed().as_millis() as u64,
                        response_len = summary.len(),
                        "AI summarization succeeded"
                    );
                    return SummaryOutcome {
                        summary,
                        method: GenerationMethod::Ai,
                    };
                }
                Ok(Err(e)) => {
                    warn!(
                        subsystem = "inference",
                        component = "selector",
                        error_msg = %e,
                        duration_ms = start.elapsed().as_millis() as u64,
                        "AI summarization failed, using keyword fallback"
                    );
                }
                Err(_) => {
                    warn!(
                        subsystem = "inference",
                        component = "selector",
                        duration_ms = start.elapsed().as_millis() as u64,
                        "AI summarization timed out, using keyword fallback"
                    );
                }
            }
        } else {
            debug!(
                subsystem = "inference",
                component = "selector",
                "No AI backend configured, using keyword fallback"
            );
        }

        SummaryOutcome {
            summary: self.fallback.summarize(text),
            method: GenerationMethod::KeywordFallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockSummarizer;

    #[tokio::test]
    async fn test_uses_ai_when_available() {
        let mock = Arc::new(MockSummarizer::new().with_response("An AI summary."));
        let selector = HybridSummarizer::new(mock.clone());

        let outcome = selector.summarize("Some document text to summarize.").await;
        assert_eq!(outcome.method, GenerationMethod::Ai);
        assert_eq!(outcome.summary, "An AI summary.");
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_falls_back_on_ai_error() {
        let mock = Arc::new(MockSummarizer::new().with_failure());
        let selector = HybridSummarizer::new(mock.clone());

        let text = "Databases store structured data. Indexes make databases fast. \
                    The cat sat quietly.";
        let outcome = selector.summarize(text).await;
        assert_eq!(outcome.method, GenerationMethod::KeywordFallback);
        assert!(!outcome.summary.is_empty());
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_falls_back_on_ai_timeout() {
        let mock = Arc::new(
            MockSummarizer::new()
                .with_response("Too late.")
                .with_delay(Duration::from_secs(5)),
        );
        let selector =
            HybridSummarizer::new(mock).with_timeout(Duration::from_millis(50));

        let outcome = selector.summarize("Some text that takes too long.").await;
        assert_eq!(outcome.method, GenerationMethod::KeywordFallback);
        assert!(!outcome.summary.is_empty());
    }

    #[tokio::test]
    async fn test_offline_selector_never_calls_ai() {
        let selector = HybridSummarizer::offline();
        assert!(!selector.has_ai_backend());

        let outcome = selector.summarize("Plain text with some content.").await;
        assert_eq!(outcome.method, GenerationMethod::KeywordFallback);
        assert!(!outcome.summary.is_empty());
    }

    #[tokio::test]
    async fn test_empty_input_yields_no_content_summary() {
        let mock = Arc::new(MockSummarizer::new().with_response("Should not be used."));
        let selector = HybridSummarizer::new(mock.clone());

        let outcome = selector.summarize("   \n\t  ").await;
        assert_eq!(outcome.method, GenerationMethod::KeywordFallback);
        assert_eq!(outcome.summary, defaults::NO_CONTENT_SUMMARY);
        // AI backend is never consulted for empty input
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_fallback_is_deterministic() {
        let selector = HybridSummarizer::offline();
        let text = "Rust programs compile to native code. The compiler checks \
                    ownership. Native code runs fast.";

        let first = selector.summarize(text).await;
        let second = selector.summarize(text).await;
        assert_eq!(first.summary, second.summary);
        assert_eq!(first.method, second.method);
    }
}
