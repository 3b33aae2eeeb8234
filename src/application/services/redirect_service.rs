//! Redirect resolution with click tracking.

use std::sync::Arc;

use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use tracing::debug;

/// Resolves short codes for redirects and counts the click.
pub struct RedirectService<R: UrlRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: UrlRepository + ?Sized> RedirectService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns the original URL for `code`, counting one click.
    ///
    /// Lookup and increment are a single store operation, so concurrent
    /// redirects of the same code never lose an increment.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code does not exist; nothing is
    /// modified in that case.
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn resolve_and_track(&self, code: &str) -> Result<String, AppError> {
        match self.repository.record_click(code).await? {
            Some(original_url) => {
                metrics::counter!("redirects_total").increment(1);
                debug!(code, "Redirect tracked");
                Ok(original_url)
            }
            None => {
                metrics::counter!("redirects_not_found_total").increment(1);
                Err(AppError::url_not_found(code))
            }
        }
    }
}
