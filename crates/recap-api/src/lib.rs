//! HTTP API server for recap.
//!
//! Assembles the axum router over the repository layer in `recap-db`
//! and the hybrid summarization selector in `recap-inference`.

pub mod copilot;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;

pub use error::ApiError;
pub use routes::build_router;
pub use state::AppState;
