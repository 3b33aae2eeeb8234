//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Responds with `302 Found`. The click is counted before the response is
/// sent, in the same store operation that resolves the code.
///
/// # Errors
///
/// Returns 404 Not Found (JSON body) if the short code doesn't exist, and
/// 500 if the stored URL cannot be sent as a `Location` header.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let original_url = state.redirect_service.resolve_and_track(&code).await?;

    let location = HeaderValue::try_from(original_url).map_err(|e| {
        AppError::internal(
            "Stored URL is not a valid redirect target",
            json!({ "code": code, "reason": e.to_string() }),
        )
    })?;

    // axum's Redirect has no 302 constructor
    Ok((StatusCode::FOUND, [(header::LOCATION, location)]))
}
