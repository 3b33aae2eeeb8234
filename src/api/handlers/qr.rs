//! Handler for QR code rendering.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::qr::QrResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the QR code of a short link as an SVG data URL.
///
/// # Endpoint
///
/// `GET /api/qr/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
/// Returns 500 Internal Server Error if rendering fails.
pub async fn qr_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<QrResponse>, AppError> {
    let qr_code = state.qr_service.qr_for_code(&code).await?;

    Ok(Json(QrResponse { qr_code }))
}
