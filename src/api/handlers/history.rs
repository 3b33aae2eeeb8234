//! Handler for the recent links list.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::history::{HistoryItem, HistoryQuery};
use crate::error::AppError;
use crate::state::AppState;

/// Lists the most recently created short links, newest first.
///
/// # Endpoint
///
/// `GET /api/history?limit=10`
///
/// `limit` defaults to 10 and is clamped to `0..=100`; `limit=0` returns `[]`.
pub async fn history_handler(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<Vec<HistoryItem>>, AppError> {
    let records = state.stats_service.history(query.limit).await?;

    let items = records
        .into_iter()
        .map(|record| HistoryItem {
            short_url: state.settings.short_url(&record.short_code),
            short_code: record.short_code,
            original_url: record.original_url,
            clicks: record.clicks,
            created_at: record.created_at,
        })
        .collect();

    Ok(Json(items))
}
