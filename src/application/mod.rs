//! Application layer services implementing business logic.
//!
//! Services orchestrate repository calls, validation and business rules, and
//! expose a clean API to HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::AliasResolver`] - Custom alias checks and unique code generation
//! - [`services::ShortenService`] - Short link creation
//! - [`services::RedirectService`] - Redirect resolution with click tracking
//! - [`services::StatsService`] - History and per-link statistics
//! - [`services::QrService`] - QR codes for short links

pub mod services;
pub mod settings;

pub use settings::ShortenerSettings;
