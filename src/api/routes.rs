//! API route configuration.

use crate::api::handlers::{history_handler, qr_handler, shorten_handler, stats_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes nested under `/api`.
///
/// # Endpoints
///
/// - `POST /shorten`      - Create a short link
/// - `GET  /history`      - Most recent links (`?limit=`, default 10)
/// - `GET  /stats/{code}` - Statistics for a specific link
/// - `GET  /qr/{code}`    - QR code of a link as an SVG data URL
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/history", get(history_handler))
        .route("/stats/{code}", get(stats_handler))
        .route("/qr/{code}", get(qr_handler))
}
