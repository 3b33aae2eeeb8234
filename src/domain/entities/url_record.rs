//! URL record entity.

use chrono::{DateTime, Utc};

/// Client information captured when a record is created.
///
/// Stored alongside the record for diagnostics and never updated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestMeta {
    pub ip: Option<String>,
    pub user_agent: Option<String>,
}

impl RequestMeta {
    pub fn new(ip: Option<String>, user_agent: Option<&str>) -> Self {
        Self {
            ip,
            user_agent: user_agent.map(|s| s.to_string()),
        }
    }
}

/// A short code mapped to its original URL, with click tracking.
#[derive(Debug, Clone)]
pub struct UrlRecord {
    pub id: i64,
    pub short_code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub clicks: i64,
    pub last_clicked_at: Option<DateTime<Utc>>,
    pub meta: RequestMeta,
}

impl UrlRecord {
    /// Creates a record as it looks right after insertion: no clicks yet.
    pub fn new(
        id: i64,
        short_code: String,
        original_url: String,
        created_at: DateTime<Utc>,
        meta: RequestMeta,
    ) -> Self {
        Self {
            id,
            short_code,
            original_url,
            created_at,
            clicks: 0,
            last_clicked_at: None,
            meta,
        }
    }
}

/// Input data for inserting a new record.
#[derive(Debug, Clone)]
pub struct NewUrlRecord {
    pub short_code: String,
    pub original_url: String,
    pub meta: RequestMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_starts_unclicked() {
        let now = Utc::now();
        let record = UrlRecord::new(
            1,
            "abC123".to_string(),
            "https://example.com".to_string(),
            now,
            RequestMeta::default(),
        );

        assert_eq!(record.id, 1);
        assert_eq!(record.short_code, "abC123");
        assert_eq!(record.created_at, now);
        assert_eq!(record.clicks, 0);
        assert!(record.last_clicked_at.is_none());
    }

    #[test]
    fn test_request_meta_new() {
        let meta = RequestMeta::new(Some("10.0.0.1".to_string()), Some("curl/8.0"));

        assert_eq!(meta.ip.as_deref(), Some("10.0.0.1"));
        assert_eq!(meta.user_agent.as_deref(), Some("curl/8.0"));
    }

    #[test]
    fn test_request_meta_empty() {
        let meta = RequestMeta::new(None, None);
        assert_eq!(meta, RequestMeta::default());
    }
}
