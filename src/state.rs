//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::ShortenerSettings;
use crate::application::services::{QrService, RedirectService, ShortenService, StatsService};
use crate::domain::repositories::UrlRepository;
use crate::infrastructure::cache::CacheService;
use crate::infrastructure::qr::QrRenderer;

/// Services wired to one store, one cache and one QR renderer.
///
/// Cheap to clone: everything is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub shorten_service: Arc<ShortenService<dyn UrlRepository>>,
    pub redirect_service: Arc<RedirectService<dyn UrlRepository>>,
    pub stats_service: Arc<StatsService<dyn UrlRepository>>,
    pub qr_service: Arc<QrService<dyn UrlRepository>>,
    pub cache: Arc<dyn CacheService>,
    pub settings: ShortenerSettings,
    /// Trust `X-Forwarded-For` / `X-Real-IP` for the client IP.
    pub behind_proxy: bool,
}

impl AppState {
    pub fn new(
        repository: Arc<dyn UrlRepository>,
        cache: Arc<dyn CacheService>,
        renderer: Arc<dyn QrRenderer>,
        settings: ShortenerSettings,
        behind_proxy: bool,
    ) -> Self {
        Self {
            shorten_service: Arc::new(ShortenService::new(repository.clone(), settings.clone())),
            redirect_service: Arc::new(RedirectService::new(repository.clone())),
            stats_service: Arc::new(StatsService::new(repository.clone())),
            qr_service: Arc::new(QrService::new(
                repository,
                renderer,
                cache.clone(),
                settings.clone(),
            )),
            cache,
            settings,
            behind_proxy,
        }
    }
}
