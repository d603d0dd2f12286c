//! Shared-secret API key authentication.
//!
//! Every `/api/*` route except the connection-status probe requires an
//! `X-API-Key` header matching the configured secret. Rejection happens
//! before any handler runs.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::warn;

use crate::error::ApiError;
use crate::state::AppState;

/// Header carrying the shared secret.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Routes reachable without a key.
const EXEMPT_PATHS: &[&str] = &["/api/connection-status"];

pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path();
    if EXEMPT_PATHS.contains(&path) {
        return next.run(request).await;
    }

    let provided = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok());

    match provided {
        Some(key) if key == state.api_key => next.run(request).await,
        Some(_) => {
            warn!(path, "Rejected request with invalid API key");
            ApiError::Unauthorized("Invalid API key".to_string()).into_response()
        }
        None => {
            warn!(path, "Rejected request with missing API key");
            ApiError::Unauthorized("Missing X-API-Key header".to_string()).into_response()
        }
    }
}
