//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`UrlRecord`] - A stored short code → URL mapping with click counters
//! - [`RequestMeta`] - Diagnostic data about the client that created a record
//!
//! # Design Pattern
//!
//! Creation uses a separate struct, [`NewUrlRecord`], carrying only the fields
//! the caller controls. Id, timestamps and counters are assigned by the store.

pub mod url_record;

pub use url_record::{NewUrlRecord, RequestMeta, UrlRecord};
