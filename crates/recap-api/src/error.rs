//! HTTP error mapping.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

#[derive(Debug)]
pub enum ApiError {
    Database(recap_core::Error),
    Unauthorized(String),
    NotFound(String),
    BadRequest(String),
}

impl From<recap_core::Error> for ApiError {
    fn from(err: recap_core::Error) -> Self {
        match &err {
            recap_core::Error::NotFound(msg) => ApiError::NotFound(msg.clone()),
            recap_core::Error::NoteNotFound(_)
            | recap_core::Error::ScheduleNotFound(_)
            | recap_core::Error::SummaryNotFound(_) => ApiError::NotFound(err.to_string()),
            recap_core::Error::InvalidInput(msg) => ApiError::BadRequest(msg.clone()),
            recap_core::Error::Extraction(msg) => ApiError::BadRequest(msg.clone()),
            recap_core::Error::Unauthorized(msg) => ApiError::Unauthorized(msg.clone()),
            _ => ApiError::Database(err),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ApiError::Database(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        let body = Json(serde_json::json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
