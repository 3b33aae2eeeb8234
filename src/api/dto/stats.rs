//! DTOs for per-link statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Statistics of a single short link.
///
/// `qr_code` is the URL of the QR endpoint, not the image itself.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub short_code: String,
    pub original_url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
    pub last_clicked_at: Option<DateTime<Utc>>,
    pub short_url: String,
    pub qr_code: String,
}
