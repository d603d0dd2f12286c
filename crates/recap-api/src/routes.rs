//! Router assembly and HTTP middleware stack.

use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post, put};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use recap_core::defaults::{CORS_MAX_AGE_SECS, MAX_BODY_SIZE_BYTES};

use crate::handlers::{copilot, notes, schedules, summaries, system};
use crate::middleware::require_api_key;
use crate::state::AppState;

/// Generates time-ordered UUIDv7 request correlation IDs.
///
/// UUIDv7 embeds a Unix timestamp, so IDs sort chronologically — useful
/// for log correlation and debugging.
#[derive(Clone, Default)]
pub struct MakeRequestUuidV7;

impl MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string().parse().ok()?;
        Some(RequestId::new(id))
    }
}

/// Parse the `ALLOWED_ORIGINS` env var into a CORS origin whitelist.
///
/// Comma-separated list; defaults to local development origins when
/// unset or empty. Invalid entries are skipped with a warning.
pub fn parse_allowed_origins() -> Vec<HeaderValue> {
    let origins_str = std::env::var("ALLOWED_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://localhost:5173".to_string());

    if origins_str.trim().is_empty() {
        return vec![
            HeaderValue::from_static("http://localhost:3000"),
            HeaderValue::from_static("http://localhost:5173"),
        ];
    }

    origins_str
        .split(',')
        .filter_map(|s| {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            match trimmed.parse::<HeaderValue>() {
                Ok(v) => Some(v),
                Err(e) => {
                    tracing::warn!("Invalid CORS origin '{}': {}", trimmed, e);
                    None
                }
            }
        })
        .collect()
}

/// Build the application router with the full middleware stack.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Status probe (no auth)
        .route("/api/connection-status", get(system::connection_status))
        // Notes
        .route(
            "/api/notes",
            post(notes::create_note).get(notes::list_notes),
        )
        .route(
            "/api/notes/:id",
            get(notes::get_note).delete(notes::delete_note),
        )
        // Schedule
        .route(
            "/api/schedule",
            post(schedules::create_schedule).get(schedules::list_schedules),
        )
        .route("/api/schedule/upcoming", get(schedules::list_upcoming))
        .route(
            "/api/schedule/:id/complete",
            put(schedules::complete_schedule),
        )
        // PDF upload and summaries
        .route("/api/upload-pdf", post(summaries::upload_pdf))
        .route("/api/summaries", get(summaries::list_summaries))
        .route(
            "/api/refresh-summary/:id",
            post(summaries::refresh_summary),
        )
        // Copilot
        .route(
            "/api/copilot/process-command",
            post(copilot::process_command),
        )
        // Middleware
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            require_api_key,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
        .layer({
            let allowed_origins = parse_allowed_origins();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(allowed_origins))
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([
                    header::AUTHORIZATION,
                    header::CONTENT_TYPE,
                    header::ACCEPT,
                    header::HeaderName::from_static("x-api-key"),
                ])
                .allow_credentials(true)
                .max_age(std::time::Duration::from_secs(CORS_MAX_AGE_SECS))
        })
        .layer(RequestBodyLimitLayer::new(MAX_BODY_SIZE_BYTES))
        .with_state(state)
}
