//! DTO for the QR code endpoint.

use serde::Serialize;

/// QR code as an inline `data:image/svg+xml;base64,...` URL.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QrResponse {
    pub qr_code: String,
}
