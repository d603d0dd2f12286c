//! # recap-inference
//!
//! Hybrid summarization backends for recap.
//!
//! This crate provides:
//! - The [`HybridSummarizer`] selector: online AI first, deterministic
//!   keyword fallback on any failure
//! - An Ollama generation-API backend implementing
//!   [`recap_core::AiSummarizer`]
//! - The offline keyword-frequency summarizer (pure, never fails)
//! - A mock AI backend for tests (feature `mock`)
//!
//! # Example
//!
//! ```rust,no_run
//! use recap_inference::{HybridSummarizer, OllamaSummarizer};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let selector = HybridSummarizer::new(Arc::new(OllamaSummarizer::from_env()));
//!     let outcome = selector.summarize("A long document...").await;
//!     println!("{} via {}", outcome.summary, outcome.method);
//! }
//! ```

pub mod keyword;
pub mod ollama;
pub mod selector;

// Mock AI backend for testing
#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export core types
pub use recap_core::*;

pub use keyword::KeywordSummarizer;
pub use ollama::OllamaSummarizer;
pub use selector::HybridSummarizer;

#[cfg(any(test, feature = "mock"))]
pub use mock::MockSummarizer;
