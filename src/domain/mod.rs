//! Domain layer containing the URL record model and the store contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Business logic is encapsulated in services (see [`crate::application::services`])
//!
//! # Redirect Flow
//!
//! 1. HTTP handler receives `GET /{code}`
//! 2. [`crate::application::services::RedirectService`] asks the store to
//!    increment the click counter and return the target in one statement
//! 3. Handler answers with `302 Found`

pub mod entities;
pub mod repositories;
