//! QR codes for short links.

use std::sync::Arc;

use crate::application::ShortenerSettings;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;
use crate::infrastructure::qr::QrRenderer;
use tracing::{debug, error};

/// Renders (and caches) the QR code of a short link.
///
/// The QR code encodes the public short URL, not the original URL, so scans
/// are counted as clicks.
pub struct QrService<R: UrlRepository + ?Sized> {
    repository: Arc<R>,
    renderer: Arc<dyn QrRenderer>,
    cache: Arc<dyn CacheService>,
    settings: ShortenerSettings,
}

impl<R: UrlRepository + ?Sized> QrService<R> {
    pub fn new(
        repository: Arc<R>,
        renderer: Arc<dyn QrRenderer>,
        cache: Arc<dyn CacheService>,
        settings: ShortenerSettings,
    ) -> Self {
        Self {
            repository,
            renderer,
            cache,
            settings,
        }
    }

    /// Returns the QR code of `code` as an inline `data:` URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code does not exist.
    /// Returns [`AppError::Internal`] if rendering fails or on store errors.
    pub async fn qr_for_code(&self, code: &str) -> Result<String, AppError> {
        if !self.repository.exists(code).await? {
            return Err(AppError::url_not_found(code));
        }

        let short_url = self.settings.short_url(code);
        let cache_key = Self::cache_key(&short_url);
        match self.cache.get(&cache_key).await {
            Ok(Some(cached)) => return Ok(cached),
            Ok(None) => {}
            Err(e) => error!("Cache error: {}", e),
        }

        let data_url = self
            .renderer
            .render(&short_url)
            .map_err(|e| AppError::render_error(e.to_string()))?;

        metrics::counter!("qr_codes_rendered_total").increment(1);
        debug!(code, "QR code rendered");

        if let Err(e) = self.cache.set(&cache_key, &data_url, None).await {
            error!("Failed to cache QR code: {}", e);
        }

        Ok(data_url)
    }

    /// Cache key of a rendered QR code, keyed by the exact data it encodes.
    fn cache_key(short_url: &str) -> String {
        format!("qr:{}", short_url)
    }
}
