//! Centralized default values for recap.
//!
//! Every tunable constant lives here so the policy is visible in one
//! place. Environment variables override these at startup where the
//! consuming crate documents it.

// ─── Server ────────────────────────────────────────────────────────────────

/// Default HTTP server port.
pub const SERVER_PORT: u16 = 8000;

/// Maximum request body size in bytes (PDF uploads).
pub const MAX_BODY_SIZE_BYTES: usize = 50 * 1024 * 1024;

/// CORS preflight cache duration in seconds.
pub const CORS_MAX_AGE_SECS: u64 = 3600;

// ─── Inference ─────────────────────────────────────────────────────────────

/// Default Ollama endpoint.
pub const OLLAMA_URL: &str = "http://127.0.0.1:11434";

/// Default generation model for AI summarization.
pub const GEN_MODEL: &str = "llama3.1:8b";

/// Timeout for a single AI summarization request (seconds).
///
/// The hybrid selector falls back to the keyword summarizer once this
/// elapses, so it bounds the worst-case latency of the AI path.
pub const AI_SUMMARY_TIMEOUT_SECS: u64 = 60;

/// Chunk size (characters) for map-reduce summarization of long inputs.
pub const AI_CHUNK_SIZE: usize = 4000;

// ─── Summarization policy ──────────────────────────────────────────────────

/// Target maximum summary length in characters.
pub const SUMMARY_MAX_CHARS: usize = 500;

/// Number of top-ranked sentences emitted by the keyword fallback.
pub const FALLBACK_SENTENCE_COUNT: usize = 3;

/// Canned outcome for empty or whitespace-only input.
pub const NO_CONTENT_SUMMARY: &str = "No content to summarize.";

// ─── Extraction ────────────────────────────────────────────────────────────

/// Timeout for external extraction commands like pdftotext (seconds).
pub const EXTRACTION_CMD_TIMEOUT_SECS: u64 = 60;

/// Extracted text shorter than this is treated as unreadable
/// (likely a scanned PDF with no text layer).
pub const MIN_EXTRACTED_TEXT_CHARS: usize = 20;
