//! Public route table.

use crate::api::handlers::{health_handler, redirect_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All service routes.
///
/// # Endpoints
///
/// - `POST /`        - Create a short URL (form field `url`)
/// - `GET  /health`  - Health check
/// - `GET  /{code}`  - Redirect to the stored URL
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(shorten_handler))
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
}
