//! Shared application state.

use std::sync::Arc;

use recap_core::TextExtractor;
use recap_db::Database;
use recap_inference::HybridSummarizer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub summarizer: Arc<HybridSummarizer>,
    pub extractor: Arc<dyn TextExtractor>,
    /// Shared secret checked against the `X-API-Key` header.
    pub api_key: String,
}

impl AppState {
    pub fn new(
        db: Database,
        summarizer: Arc<HybridSummarizer>,
        extractor: Arc<dyn TextExtractor>,
        api_key: String,
    ) -> Self {
        Self {
            db,
            summarizer,
            extractor,
            api_key,
        }
    }
}
