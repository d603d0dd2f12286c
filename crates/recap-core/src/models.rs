//! Domain models for recap.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Error;

// =============================================================================
// SUMMARIZATION
// =============================================================================

/// Which summarization path actually produced a summary.
///
/// Invariant: a stored record's method always reflects the path that ran.
/// A record never claims `Ai` when the fallback executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenerationMethod {
    /// Produced by the online AI backend.
    #[serde(rename = "ai")]
    Ai,
    /// Produced by the local keyword-frequency summarizer.
    #[serde(rename = "keyword-fallback")]
    KeywordFallback,
}

impl GenerationMethod {
    /// Stable string form used in the database and the API.
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationMethod::Ai => "ai",
            GenerationMethod::KeywordFallback => "keyword-fallback",
        }
    }
}

impl std::fmt::Display for GenerationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for GenerationMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ai" => Ok(GenerationMethod::Ai),
            "keyword-fallback" => Ok(GenerationMethod::KeywordFallback),
            other => Err(Error::InvalidInput(format!(
                "Unknown generation method: {}",
                other
            ))),
        }
    }
}

/// What kind of source a summary record was generated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Pdf,
    Note,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Pdf => "pdf",
            SourceKind::Note => "note",
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SourceKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pdf" => Ok(SourceKind::Pdf),
            "note" => Ok(SourceKind::Note),
            other => Err(Error::InvalidInput(format!(
                "Unknown source kind: {}",
                other
            ))),
        }
    }
}

/// The result of one run of the summarization selector.
///
/// Ephemeral: persists only as fields on a [`SummaryRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryOutcome {
    /// The summary text. Non-empty for any non-empty input.
    pub summary: String,
    /// The path that produced it.
    pub method: GenerationMethod,
}

// =============================================================================
// PERSISTED ENTITIES
// =============================================================================

/// A user note. Immutable after creation; deleted only explicitly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at_utc: DateTime<Utc>,
}

/// A schedule entry (reminder). Delivery/firing is out of scope; entries
/// are created, listed, and marked complete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub scheduled_time: DateTime<Utc>,
    pub notification_type: String,
    pub is_completed: bool,
    pub created_at_utc: DateTime<Utc>,
}

/// A stored summary. `summary` and `generation_method` may be overwritten
/// in place by the refresh operation; `id`, `filename`, and the source
/// fields never change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRecord {
    pub id: Uuid,
    /// Original filename for PDF sources; `None` for note sources.
    pub filename: Option<String>,
    pub source_kind: SourceKind,
    /// The extracted or submitted text the summary was generated from.
    /// Kept so refresh can re-run the selector without re-extraction.
    #[serde(skip_serializing, default)]
    pub source_text: String,
    pub summary: String,
    pub generation_method: GenerationMethod,
    /// Character length of the source text.
    pub text_length: i64,
    pub created_at_utc: DateTime<Utc>,
    pub updated_at_utc: DateTime<Utc>,
}

// =============================================================================
// COPILOT
// =============================================================================

/// The classified purpose of a natural-language copilot command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandIntent {
    Pdf,
    Note,
    Schedule,
    Summaries,
    Help,
    Unknown,
}

impl CommandIntent {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandIntent::Pdf => "pdf",
            CommandIntent::Note => "note",
            CommandIntent::Schedule => "schedule",
            CommandIntent::Summaries => "summaries",
            CommandIntent::Help => "help",
            CommandIntent::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for CommandIntent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
