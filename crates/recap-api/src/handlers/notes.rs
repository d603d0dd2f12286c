//! Note endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use recap_core::{NewNote, NewSummary, NoteRepository, SourceKind, SummaryRepository};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateNoteRequest {
    pub title: String,
    pub content: String,
}

/// Create a note and summarize its content through the selector.
///
/// The summary is stored as a separate record (`source_kind = note`) so
/// the note itself stays immutable.
pub async fn create_note(
    State(state): State<AppState>,
    Json(body): Json<CreateNoteRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let note = state
        .db
        .notes
        .insert(NewNote {
            title: body.title,
            content: body.content,
        })
        .await?;

    let outcome = state.summarizer.summarize(&note.content).await;
    let summary = state
        .db
        .summaries
        .insert(NewSummary {
            filename: None,
            source_kind: SourceKind::Note,
            source_text: note.content.clone(),
            outcome,
        })
        .await?;

    info!(
        note_id = %note.id,
        summary_id = %summary.id,
        generation_method = %summary.generation_method,
        "Note created"
    );

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "note": note,
            "summary": summary,
        })),
    ))
}

pub async fn list_notes(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let notes = state.db.notes.list().await?;
    Ok(Json(notes))
}

pub async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let note = state.db.notes.fetch(id).await?;
    Ok(Json(note))
}

pub async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    state.db.notes.delete(id).await?;
    info!(note_id = %id, "Note deleted");
    Ok(Json(serde_json::json!({
        "id": id,
        "message": "Note deleted",
    })))
}
