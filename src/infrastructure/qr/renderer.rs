//! QR renderer trait and error type.

/// Failure inside the QR rendering backend.
///
/// Opaque to callers: it always surfaces as a generic internal error.
#[derive(Debug, thiserror::Error)]
#[error("QR rendering failed: {0}")]
pub struct QrRenderError(pub String);

/// Turns a string (the short URL) into an image that can be displayed inline.
///
/// Implementations are pure: the same input always yields the same output.
#[cfg_attr(test, mockall::automock)]
pub trait QrRenderer: Send + Sync {
    /// Renders `data` and returns it as a `data:` URL.
    ///
    /// # Errors
    ///
    /// Returns [`QrRenderError`] if the data cannot be encoded (e.g. too long
    /// for the largest QR version).
    fn render(&self, data: &str) -> Result<String, QrRenderError>;
}
