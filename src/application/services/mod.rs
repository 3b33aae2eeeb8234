//! Business logic services for the application layer.

pub mod alias_resolver;
pub mod qr_service;
pub mod redirect_service;
pub mod shorten_service;
pub mod stats_service;

pub use alias_resolver::AliasResolver;
pub use qr_service::QrService;
pub use redirect_service::RedirectService;
pub use shorten_service::{ShortenCommand, ShortenService, ShortenedUrl};
pub use stats_service::StatsService;
