//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::client_info::ClientInfo;

/// Creates a short link for a long URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/page",
///   "customAlias": "my-link",      // optional
///   "utmSource": "newsletter"      // optional, also utmMedium/utmCampaign/utmTerm/utmContent
/// }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "shortCode": "my-link",
///   "shortUrl": "http://localhost:5001/my-link",
///   "originalUrl": "https://example.com/page?utm_source=newsletter"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the URL is missing or invalid, the alias is
/// malformed, or a field is too long.
/// Returns 409 Conflict if the custom alias is already taken.
pub async fn shorten_handler(
    State(state): State<AppState>,
    ClientInfo(meta): ClientInfo,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(payload) = payload.map_err(|e| {
        AppError::bad_request("Invalid JSON body", json!({ "reason": e.body_text() }))
    })?;

    payload.validate()?;

    let shortened = state.shorten_service.shorten(payload.into(), meta).await?;

    Ok((StatusCode::CREATED, Json(shortened.into())))
}
