//! Read-only projections: recent history and per-link statistics.

use std::sync::Arc;

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Number of records returned by [`StatsService::history`] by default.
pub const DEFAULT_HISTORY_LIMIT: i64 = 10;

/// Upper bound for a caller-supplied history limit.
pub const MAX_HISTORY_LIMIT: i64 = 100;

/// Service for history and statistics lookups.
///
/// Never modifies the store.
pub struct StatsService<R: UrlRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: UrlRepository + ?Sized> StatsService<R> {
    /// Creates a new statistics service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns the most recently created records, newest first.
    ///
    /// `limit` defaults to [`DEFAULT_HISTORY_LIMIT`] and is clamped to
    /// `0..=MAX_HISTORY_LIMIT`. A zero or negative limit yields an empty list
    /// without touching the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn history(&self, limit: Option<i64>) -> Result<Vec<UrlRecord>, AppError> {
        let limit = limit
            .unwrap_or(DEFAULT_HISTORY_LIMIT)
            .clamp(0, MAX_HISTORY_LIMIT);
        if limit == 0 {
            return Ok(Vec::new());
        }

        self.repository.recent(limit).await
    }

    /// Returns the record for `code`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches the code.
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn stats(&self, code: &str) -> Result<UrlRecord, AppError> {
        self.repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::url_not_found(code))
    }

    /// Checks that the store answers.
    pub async fn check_store(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}
