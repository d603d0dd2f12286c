//! Schedule endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use recap_core::{NewSchedule, ScheduleRepository};

use crate::error::ApiError;
use crate::state::AppState;

fn default_notification_type() -> String {
    "app".to_string()
}

#[derive(Debug, Deserialize)]
pub struct CreateScheduleRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub scheduled_time: DateTime<Utc>,
    #[serde(default = "default_notification_type")]
    pub notification_type: String,
}

pub async fn create_schedule(
    State(state): State<AppState>,
    Json(body): Json<CreateScheduleRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let entry = state
        .db
        .schedules
        .insert(NewSchedule {
            title: body.title,
            description: body.description,
            scheduled_time: body.scheduled_time,
            notification_type: body.notification_type,
        })
        .await?;

    info!(
        schedule_id = %entry.id,
        scheduled_time = %entry.scheduled_time,
        "Schedule entry created"
    );

    Ok((StatusCode::CREATED, Json(entry)))
}

pub async fn list_schedules(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let entries = state.db.schedules.list().await?;
    Ok(Json(entries))
}

/// List entries whose scheduled time has not yet passed.
pub async fn list_upcoming(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let entries = state.db.schedules.list_upcoming(Utc::now()).await?;
    Ok(Json(entries))
}

pub async fn complete_schedule(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    state.db.schedules.mark_complete(id).await?;
    info!(schedule_id = %id, "Schedule entry marked complete");
    Ok(Json(serde_json::json!({
        "id": id,
        "message": "Schedule marked complete",
    })))
}
