//! # recap-core
//!
//! Core types, traits, and abstractions for recap.
//!
//! This crate provides:
//! - Domain models (notes, schedule entries, summary records)
//! - Repository traits implemented by `recap-db`
//! - Summarization and text-extraction traits implemented by
//!   `recap-inference` and `recap-api`
//! - The shared error type and `Result` alias
//! - Structured logging field constants
//! - Centralized default values

pub mod defaults;
pub mod error;
pub mod logging;
pub mod models;
pub mod traits;
pub mod uuid_utils;

pub use error::{Error, Result};
pub use models::{
    CommandIntent, GenerationMethod, Note, ScheduleEntry, SourceKind, SummaryOutcome,
    SummaryRecord,
};
pub use traits::{
    AiSummarizer, NewNote, NewSchedule, NewSummary, NoteRepository, ScheduleRepository,
    SummaryRepository, TextExtractor,
};
pub use uuid_utils::new_v7;
