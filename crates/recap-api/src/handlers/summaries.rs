//! PDF upload, summary listing, and summary refresh endpoints.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tracing::info;
use uuid::Uuid;

use recap_core::{NewSummary, SourceKind, SummaryRepository};

use crate::error::ApiError;
use crate::state::AppState;

/// Upload a PDF, extract its text, and store a summary record.
///
/// Extraction failure is the client's problem (unreadable or invalid
/// document, 400, nothing stored). Summarization failure is not: the
/// selector falls back to keyword extraction, so a record is always
/// created once extraction succeeds.
pub async fn upload_pdf(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let mut file_data: Option<Vec<u8>> = None;
    let mut filename: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read upload: {}", e)))?
    {
        if field.name() == Some("file") {
            filename = field.file_name().map(|s| s.to_string());
            file_data = Some(
                field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read file data: {}", e)))?
                    .to_vec(),
            );
            break;
        }
    }

    let file_data = file_data
        .ok_or_else(|| ApiError::BadRequest("No file uploaded. Use field name 'file'.".to_string()))?;
    let filename = filename.unwrap_or_else(|| "upload.pdf".to_string());

    let text = state.extractor.extract(&file_data, &filename).await?;
    let outcome = state.summarizer.summarize(&text).await;

    let record = state
        .db
        .summaries
        .insert(NewSummary {
            filename: Some(filename),
            source_kind: SourceKind::Pdf,
            source_text: text,
            outcome,
        })
        .await?;

    info!(
        summary_id = %record.id,
        generation_method = %record.generation_method,
        text_length = record.text_length,
        "PDF summarized"
    );

    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn list_summaries(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let records = state.db.summaries.list().await?;
    Ok(Json(records))
}

/// Re-run the selector against the stored source text.
///
/// Overwrites `summary` and `generation_method` in place; the record's
/// identity (id, filename, source fields, created_at) is preserved.
pub async fn refresh_summary(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let record = state.db.summaries.fetch(id).await?;
    let outcome = state.summarizer.summarize(&record.source_text).await;
    let updated = state.db.summaries.update_summary(id, &outcome).await?;

    info!(
        summary_id = %updated.id,
        generation_method = %updated.generation_method,
        "Summary refreshed"
    );

    Ok(Json(updated))
}
