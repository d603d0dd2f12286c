//! Mock summarization backend for testing.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use recap_core::{AiSummarizer, Error, Result};

/// Configurable mock backend that records every call it receives.
///
/// Available in tests and behind the `mock` feature.
pub struct MockSummarizer {
    response: String,
    fail: bool,
    delay: Option<Duration>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockSummarizer {
    pub fn new() -> Self {
        Self {
            response: "Mock summary.".to_string(),
            fail: false,
            delay: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Set the summary returned by every call.
    pub fn with_response(mut self, response: impl Into<String>) -> Self {
        self.response = response.into();
        self
    }

    /// Make every call return an inference error.
    pub fn with_failure(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Delay every call, to exercise timeout handling.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of summarize calls received so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|c| c.len()).unwrap_or(0)
    }

    /// Inputs passed to summarize, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl Default for MockSummarizer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AiSummarizer for MockSummarizer {
    async fn summarize(&self, text: &str) -> Result<String> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(text.to_string());
        }
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail {
            return Err(Error::Inference("Mock backend failure".to_string()));
        }
        Ok(self.response.clone())
    }

    async fn health_check(&self) -> Result<bool> {
        Ok(!self.fail)
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_records_calls() {
        let mock = MockSummarizer::new().with_response("out");
        let _ = mock.summarize("first").await;
        let _ = mock.summarize("second").await;

        assert_eq!(mock.call_count(), 2);
        assert_eq!(mock.calls(), vec!["first".to_string(), "second".to_string()]);
    }

    #[tokio::test]
    async fn test_failure_mode() {
        let mock = MockSummarizer::new().with_failure();
        assert!(mock.summarize("text").await.is_err());
        assert!(!mock.health_check().await.unwrap());
    }
}
