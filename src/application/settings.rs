//! Settings shared by the application services.

use crate::utils::code_generator::DEFAULT_CODE_LENGTH;

/// Default attempt budget for finding an unused generated code.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

/// Explicit settings passed to services at construction.
///
/// Built from [`crate::config::Config`] at startup; tests build it directly.
#[derive(Debug, Clone)]
pub struct ShortenerSettings {
    /// Public base URL, e.g. `https://sho.rt`. Short URLs are `{base_url}/{code}`.
    pub base_url: String,
    /// Length of generated codes.
    pub code_length: usize,
    /// Maximum number of generated codes tried before giving up.
    pub max_attempts: u32,
}

impl ShortenerSettings {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            code_length: DEFAULT_CODE_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Builds the public short URL for `code`.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), code)
    }

    /// Builds the public URL of the QR endpoint for `code`.
    pub fn qr_url(&self, code: &str) -> String {
        format!("{}/api/qr/{}", self.base_url.trim_end_matches('/'), code)
    }
}
