//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for data persistence, caching and QR rendering.
//!
//! # Modules
//!
//! - [`cache`] - Caching abstractions (Redis and no-op implementations)
//! - [`persistence`] - PostgreSQL and in-memory repository implementations
//! - [`qr`] - QR code rendering

pub mod cache;
pub mod persistence;
pub mod qr;
