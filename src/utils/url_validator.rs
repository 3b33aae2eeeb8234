//! Target URL validation and UTM tagging.

use url::{Url, form_urlencoded};

/// Errors that can occur while validating a target URL.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL is required")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must have a host")]
    MissingHost,
}

/// UTM tracking tags appended to the target URL before storage.
///
/// Empty or whitespace-only values are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UtmParams {
    pub source: Option<String>,
    pub medium: Option<String>,
    pub campaign: Option<String>,
    pub term: Option<String>,
    pub content: Option<String>,
}

impl UtmParams {
    /// Returns `(query key, value)` pairs for the tags that are set.
    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("utm_source", &self.source),
            ("utm_medium", &self.medium),
            ("utm_campaign", &self.campaign),
            ("utm_term", &self.term),
            ("utm_content", &self.content),
        ]
        .into_iter()
        .filter_map(|(key, value)| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(|v| (key, v))
        })
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs().is_empty()
    }
}

/// Parses `input` as an absolute web URL.
///
/// # Rules
///
/// 1. Surrounding whitespace is ignored
/// 2. Control characters (tab, newline, ...) are rejected
/// 3. Scheme must be `http` or `https`
/// 4. A host is required
///
/// # Errors
///
/// Returns [`UrlValidationError::Empty`] for blank input,
/// [`UrlValidationError::InvalidFormat`] for unparsable or relative URLs and
/// for input containing control characters,
/// [`UrlValidationError::UnsupportedProtocol`] for `javascript:`, `ftp:`, etc.
pub fn validate_url(input: &str) -> Result<Url, UrlValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    // The URL parser silently drops tabs and newlines; such input can never
    // be sent back in a Location header.
    if trimmed.chars().any(char::is_control) {
        return Err(UrlValidationError::InvalidFormat(
            "URL contains control characters".to_string(),
        ));
    }

    let url = Url::parse(trimmed).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(UrlValidationError::MissingHost),
    }
}

/// Returns the string to store for `input`.
///
/// Without UTM tags the input is kept as typed (trimmed) when it is plain
/// printable ASCII, so clients get back exactly what they submitted. Anything
/// else (spaces, non-ASCII) is stored in the parser's percent-encoded form,
/// which is always a valid `Location` header value.
///
/// With tags, existing query parameters are kept byte for byte except those
/// named like one of the tags, which are replaced; the tags are appended.
///
/// # Errors
///
/// See [`validate_url`].
pub fn prepare_target_url(input: &str, utm: &UtmParams) -> Result<String, UrlValidationError> {
    let mut url = validate_url(input)?;
    let trimmed = input.trim();

    let tags = utm.pairs();
    if tags.is_empty() {
        if trimmed.bytes().all(|b| b.is_ascii_graphic()) {
            return Ok(trimmed.to_string());
        }
        return Ok(url.to_string());
    }

    let mut segments: Vec<String> = url
        .query()
        .unwrap_or_default()
        .split('&')
        .filter(|segment| !segment.is_empty())
        .filter(|segment| {
            let key = segment.split('=').next().unwrap_or_default();
            !tags.iter().any(|(tag, _)| key == *tag)
        })
        .map(str::to_string)
        .collect();

    let encoded_tags = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(tags.iter().copied())
        .finish();
    segments.push(encoded_tags);

    url.set_query(Some(&segments.join("&")));

    Ok(url.to_string())
}
