//! Connection status probe.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;

use crate::state::AppState;

/// Report backend reachability. Exempt from API key auth so clients can
/// probe before configuring credentials.
pub async fn connection_status(State(state): State<AppState>) -> impl IntoResponse {
    let db_ok = state.db.ping().await;
    let has_internet = state.summarizer.ai_available().await;

    Json(serde_json::json!({
        "has_internet": has_internet,
        "db_ok": db_ok,
        "time": Utc::now().to_rfc3339(),
    }))
}
