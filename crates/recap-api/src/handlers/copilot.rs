//! Copilot command endpoint.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use tracing::info;

use recap_core::{CommandIntent, SummaryRepository};

use crate::copilot;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CommandRequest {
    pub command: String,
    /// Reserved for client context; currently unused.
    #[serde(default)]
    pub context: Option<serde_json::Value>,
}

/// Action identifier the client dispatches on, one per intent.
fn action_for(intent: CommandIntent) -> &'static str {
    match intent {
        CommandIntent::Pdf => "upload_pdf",
        CommandIntent::Note => "create_note",
        CommandIntent::Schedule => "create_schedule",
        CommandIntent::Summaries => "get_summaries",
        CommandIntent::Help => "help",
        CommandIntent::Unknown => "unknown",
    }
}

/// Classify a command and answer it.
///
/// The summaries intent is answered inline with the current records;
/// every other intent returns a prompt for the client's next step.
pub async fn process_command(
    State(state): State<AppState>,
    Json(body): Json<CommandRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let routed = copilot::route(&body.command);

    let data = match routed.intent {
        CommandIntent::Summaries => {
            let records = state.db.summaries.list().await?;
            serde_json::to_value(records).map_err(recap_core::Error::from)?
        }
        _ => serde_json::json!({}),
    };

    info!(
        intent = %routed.intent,
        command_len = body.command.len(),
        "Copilot command processed"
    );

    Ok(Json(serde_json::json!({
        "intent": routed.intent,
        "action": action_for(routed.intent),
        "response": routed.response,
        "data": data,
    })))
}
