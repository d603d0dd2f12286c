//! Core traits for recap abstractions.
//!
//! These traits define the interfaces that concrete implementations
//! must satisfy, enabling pluggable backends and testability.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::Result;
use crate::models::*;

// =============================================================================
// REPOSITORY REQUEST TYPES
// =============================================================================

/// Request for creating a new note.
#[derive(Debug, Clone)]
pub struct NewNote {
    pub title: String,
    pub content: String,
}

/// Request for creating a new schedule entry.
#[derive(Debug, Clone)]
pub struct NewSchedule {
    pub title: String,
    pub description: String,
    pub scheduled_time: DateTime<Utc>,
    pub notification_type: String,
}

/// Request for creating a new summary record.
#[derive(Debug, Clone)]
pub struct NewSummary {
    pub filename: Option<String>,
    pub source_kind: SourceKind,
    pub source_text: String,
    pub outcome: SummaryOutcome,
}

// =============================================================================
// REPOSITORY TRAITS
// =============================================================================

/// Repository for note CRUD operations.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Insert a new note, returning the stored row.
    async fn insert(&self, req: NewNote) -> Result<Note>;

    /// Fetch a note by ID.
    async fn fetch(&self, id: Uuid) -> Result<Note>;

    /// List all notes, newest first.
    async fn list(&self) -> Result<Vec<Note>>;

    /// Permanently delete a note.
    async fn delete(&self, id: Uuid) -> Result<()>;
}

/// Repository for schedule entries.
#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    /// Insert a new schedule entry, returning the stored row.
    async fn insert(&self, req: NewSchedule) -> Result<ScheduleEntry>;

    /// List all entries, soonest first.
    async fn list(&self) -> Result<Vec<ScheduleEntry>>;

    /// List entries with `scheduled_time >= now`, soonest first.
    async fn list_upcoming(&self, now: DateTime<Utc>) -> Result<Vec<ScheduleEntry>>;

    /// Mark an entry completed.
    async fn mark_complete(&self, id: Uuid) -> Result<()>;
}

/// Repository for summary records.
#[async_trait]
pub trait SummaryRepository: Send + Sync {
    /// Insert a new summary record, returning the stored row.
    async fn insert(&self, req: NewSummary) -> Result<SummaryRecord>;

    /// Fetch a record by ID (including its source text).
    async fn fetch(&self, id: Uuid) -> Result<SummaryRecord>;

    /// List all records, newest first.
    async fn list(&self) -> Result<Vec<SummaryRecord>>;

    /// Overwrite `summary` and `generation_method` in place.
    ///
    /// Identity is preserved: `id`, `filename`, source fields, and
    /// `created_at_utc` are untouched; `updated_at_utc` advances.
    async fn update_summary(&self, id: Uuid, outcome: &SummaryOutcome) -> Result<SummaryRecord>;
}

// =============================================================================
// COLLABORATOR TRAITS
// =============================================================================

/// Document text extractor.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// Extract plain text from raw file bytes.
    ///
    /// Fails with [`crate::Error::Extraction`] when the document is
    /// unreadable (corrupt, or scanned with no text layer).
    async fn extract(&self, data: &[u8], filename: &str) -> Result<String>;

    /// Check whether the extractor's external dependency is available.
    async fn health_check(&self) -> Result<bool>;

    /// Short identifier for logging.
    fn name(&self) -> &str;
}

/// Online AI summarization provider.
///
/// Implementations may block on the network; callers bound each request
/// with a timeout so the fallback path always completes in bounded time.
#[async_trait]
pub trait AiSummarizer: Send + Sync {
    /// Produce a summary of `text`. May fail or time out.
    async fn summarize(&self, text: &str) -> Result<String>;

    /// Check whether the backend is reachable.
    async fn health_check(&self) -> Result<bool>;

    /// Short identifier for logging.
    fn name(&self) -> &str;
}
