//! Repository trait for URL record storage.

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the persistent record store.
///
/// Correctness of the whole service rests on two guarantees provided here
/// rather than in the services: [`insert`](Self::insert) rejects duplicate
/// short codes atomically, and [`record_click`](Self::record_click) increments
/// the counter in a single store operation.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryUrlRepository`] - process-local store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a new record with zero clicks and `created_at = now`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short code already exists.
    /// Returns [`AppError::Internal`] on store errors.
    async fn insert(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError>;

    /// Returns true if a record with this short code exists.
    ///
    /// Only a fast-path check: the answer may be stale by the time the caller
    /// inserts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn exists(&self, short_code: &str) -> Result<bool, AppError>;

    /// Finds a record by short code without side effects.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn find_by_code(&self, short_code: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Atomically increments `clicks`, sets `last_clicked_at = now` and returns
    /// the original URL.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` if the record exists (and was updated)
    /// - `Ok(None)` if no record matches; nothing is modified
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn record_click(&self, short_code: &str) -> Result<Option<String>, AppError>;

    /// Lists the most recently created records, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn recent(&self, limit: i64) -> Result<Vec<UrlRecord>, AppError>;

    /// Checks that the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store does not answer.
    async fn ping(&self) -> Result<(), AppError>;
}
