//! Application error type and its HTTP mapping.
//!
//! Every fallible service and repository call returns [`AppError`]. The variant
//! decides the HTTP status; the message is what the caller sees. `details` are
//! kept for logging only and never leave the process for internal errors.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

/// Error body returned to API clients.
///
/// `error` carries the human-readable message, `code` a stable machine code.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: &'static str,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed input (bad URL, bad alias, missing field). Maps to 400.
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// No record for the requested short code. Maps to 404.
    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// Short code already taken. Maps to 409.
    #[error("{message}")]
    Conflict { message: String, details: Value },

    /// Store, renderer or other unexpected failure. Maps to 500.
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// The submitted URL is not an absolute http(s) URL.
    pub fn invalid_url(reason: impl Into<String>) -> Self {
        Self::bad_request("Invalid URL format", json!({ "reason": reason.into() }))
    }

    /// The custom alias does not match the short code format.
    pub fn invalid_alias_format(alias: &str) -> Self {
        Self::bad_request(
            "Custom alias must be 3-20 characters: letters, digits, '-' or '_'",
            json!({ "alias": alias }),
        )
    }

    /// The short code is already used by another record.
    pub fn alias_taken(alias: &str) -> Self {
        Self::conflict("Custom alias is already taken", json!({ "alias": alias }))
    }

    /// No record matches the short code.
    pub fn url_not_found(code: &str) -> Self {
        Self::not_found("URL not found", json!({ "code": code }))
    }

    /// Code generation kept colliding until the attempt budget ran out.
    pub fn exhausted_attempts(attempts: u32) -> Self {
        Self::internal(
            "Failed to generate unique code",
            json!({ "reason": "Too many collisions", "attempts": attempts }),
        )
    }

    /// The QR adapter failed.
    pub fn render_error(reason: impl Into<String>) -> Self {
        Self::internal(
            "Failed to generate QR code",
            json!({ "reason": reason.into() }),
        )
    }

    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Builds the client-facing body.
    ///
    /// Internal errors keep their message (it is generic by construction) and
    /// drop the details.
    pub fn to_error_body(&self) -> ErrorBody {
        let (code, message) = match self {
            AppError::Validation { message, .. } => ("validation_error", message),
            AppError::NotFound { message, .. } => ("not_found", message),
            AppError::Conflict { message, .. } => ("conflict", message),
            AppError::Internal { message, .. } => ("internal_error", message),
        };

        ErrorBody {
            error: message.clone(),
            code,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Internal { message, details } = &self {
            tracing::error!(%details, "{}", message);
        }

        (self.status(), Json(self.to_error_body())).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::conflict(
                "Short code is already taken",
                json!({ "constraint": db.constraint() }),
            );
        }

        AppError::internal("Internal server error", json!({ "source": e.to_string() }))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|field| field.to_string())
            .collect();

        AppError::bad_request(
            format!("Invalid request: {}", fields.join(", ")),
            json!({ "fields": fields }),
        )
    }
}
