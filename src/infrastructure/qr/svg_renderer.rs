//! SVG QR renderer backed by the `qrcode` crate.

use base64::Engine as _;
use qrcode::QrCode;
use qrcode::render::svg;

use super::renderer::{QrRenderError, QrRenderer};

/// Default edge length of the rendered image in pixels.
const DEFAULT_SIZE: u32 = 256;

/// Renders QR codes as base64-encoded SVG `data:` URLs.
#[derive(Debug, Clone)]
pub struct SvgQrRenderer {
    size: u32,
}

impl SvgQrRenderer {
    pub fn new(size: u32) -> Self {
        Self { size }
    }
}

impl Default for SvgQrRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}

impl QrRenderer for SvgQrRenderer {
    fn render(&self, data: &str) -> Result<String, QrRenderError> {
        let code = QrCode::new(data.as_bytes()).map_err(|e| QrRenderError(e.to_string()))?;

        let image = code
            .render::<svg::Color>()
            .min_dimensions(self.size, self.size)
            .dark_color(svg::Color("#000000"))
            .light_color(svg::Color("#ffffff"))
            .build();

        let encoded = base64::engine::general_purpose::STANDARD.encode(image.as_bytes());
        Ok(format!("data:image/svg+xml;base64,{}", encoded))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_produces_svg_data_url() {
        let renderer = SvgQrRenderer::default();
        let data_url = renderer.render("http://localhost:5001/abC123").unwrap();

        let payload = data_url
            .strip_prefix("data:image/svg+xml;base64,")
            .expect("data URL prefix");
        let svg = base64::engine::general_purpose::STANDARD
            .decode(payload)
            .unwrap();
        let svg = String::from_utf8(svg).unwrap();

        assert!(svg.contains("<svg"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let renderer = SvgQrRenderer::new(128);
        assert_eq!(
            renderer.render("https://s.example/x").unwrap(),
            renderer.render("https://s.example/x").unwrap()
        );
    }

    #[test]
    fn test_render_too_long_fails() {
        let renderer = SvgQrRenderer::default();
        let huge = "x".repeat(10_000);

        assert!(renderer.render(&huge).is_err());
    }
}
