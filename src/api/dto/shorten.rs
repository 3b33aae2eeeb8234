//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::{ShortenCommand, ShortenedUrl};
use crate::utils::url_validator::UtmParams;

/// Request to shorten a URL.
///
/// `url` is optional at the serde level so a missing field reports
/// "URL is required" instead of a deserialization error.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    #[validate(length(max = 2048))]
    pub url: Option<String>,

    /// Format is checked by the alias resolver, which reports a precise message.
    #[validate(length(max = 100))]
    pub custom_alias: Option<String>,

    #[validate(length(max = 200))]
    pub utm_source: Option<String>,

    #[validate(length(max = 200))]
    pub utm_medium: Option<String>,

    #[validate(length(max = 200))]
    pub utm_campaign: Option<String>,

    #[validate(length(max = 200))]
    pub utm_term: Option<String>,

    #[validate(length(max = 200))]
    pub utm_content: Option<String>,
}

impl From<ShortenRequest> for ShortenCommand {
    fn from(request: ShortenRequest) -> Self {
        Self {
            url: request.url.unwrap_or_default(),
            custom_alias: request.custom_alias,
            utm: UtmParams {
                source: request.utm_source,
                medium: request.utm_medium,
                campaign: request.utm_campaign,
                term: request.utm_term,
                content: request.utm_content,
            },
        }
    }
}

/// Created short link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub short_code: String,
    pub short_url: String,
    pub original_url: String,
}

impl From<ShortenedUrl> for ShortenResponse {
    fn from(shortened: ShortenedUrl) -> Self {
        Self {
            short_code: shortened.short_code,
            short_url: shortened.short_url,
            original_url: shortened.original_url,
        }
    }
}
