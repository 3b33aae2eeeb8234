//! QR code rendering.
//!
//! The rest of the crate only sees the [`QrRenderer`] trait; [`SvgQrRenderer`]
//! is the production implementation.

mod renderer;
mod svg_renderer;

pub use renderer::{QrRenderError, QrRenderer};
pub use svg_renderer::SvgQrRenderer;

#[cfg(test)]
pub use renderer::MockQrRenderer;
