//! Handler for per-link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves statistics for a specific short link.
///
/// # Endpoint
///
/// `GET /api/stats/{code}`
///
/// Read-only: looking at statistics never counts as a click.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let record = state.stats_service.stats(&code).await?;

    Ok(Json(StatsResponse {
        short_url: state.settings.short_url(&record.short_code),
        qr_code: state.settings.qr_url(&record.short_code),
        short_code: record.short_code,
        original_url: record.original_url,
        clicks: record.clicks,
        created_at: record.created_at,
        last_clicked_at: record.last_clicked_at,
    }))
}
