#![allow(dead_code)]

use axum::Router;
use axum::routing::get;
use std::sync::Arc;
use tinylink::api::handlers::{health_handler, redirect_handler};
use tinylink::api::routes::api_routes;
use tinylink::application::ShortenerSettings;
use tinylink::infrastructure::cache::NullCache;
use tinylink::infrastructure::persistence::InMemoryUrlRepository;
use tinylink::infrastructure::qr::SvgQrRenderer;
use tinylink::state::AppState;

pub const BASE_URL: &str = "http://sho.rt";

pub fn create_test_state() -> AppState {
    create_test_state_with_repo(Arc::new(InMemoryUrlRepository::new()))
}

pub fn create_test_state_with_repo(repo: Arc<InMemoryUrlRepository>) -> AppState {
    AppState::new(
        repo,
        Arc::new(NullCache::new()),
        Arc::new(SvgQrRenderer::default()),
        ShortenerSettings::new(BASE_URL),
        false,
    )
}

/// The routes served by the application, without the outer middleware.
pub fn test_app(state: AppState) -> Router {
    Router::new()
        .route("/{code}", get(redirect_handler))
        .route("/health", get(health_handler))
        .nest("/api", api_routes())
        .with_state(state)
}
