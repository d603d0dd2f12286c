//! HTTP request handlers.

pub mod copilot;
pub mod notes;
pub mod schedules;
pub mod summaries;
pub mod system;
