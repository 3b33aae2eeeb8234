//! Client metadata extraction from HTTP requests.

use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::{HeaderMap, header, request::Parts};
use std::convert::Infallible;
use std::net::SocketAddr;

use crate::domain::entities::RequestMeta;
use crate::state::AppState;

/// Maximum stored length of a User-Agent string.
const MAX_USER_AGENT_LEN: usize = 512;

/// Client IP and User-Agent of the current request.
///
/// Never rejects: missing data simply yields `None` fields. The peer address
/// comes from [`ConnectInfo`]; when the service runs behind a trusted proxy
/// (`BEHIND_PROXY=true`) the forwarding headers take precedence.
#[derive(Debug, Clone, Default)]
pub struct ClientInfo(pub RequestMeta);

impl FromRequestParts<AppState> for ClientInfo {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip().to_string());

        let ip = if state.behind_proxy {
            forwarded_ip(&parts.headers).or(peer)
        } else {
            peer
        };

        let user_agent = parts
            .headers
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .map(truncate_user_agent);

        Ok(Self(RequestMeta::new(ip, user_agent)))
    }
}

/// Reads the original client IP from `X-Forwarded-For` or `X-Real-IP`.
///
/// Only the first (left-most) `X-Forwarded-For` entry is used.
pub fn forwarded_ip(headers: &HeaderMap) -> Option<String> {
    let from_forwarded_for = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty());

    let from_real_ip = || {
        headers
            .get("x-real-ip")
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
    };

    from_forwarded_for.or_else(from_real_ip).map(|v| v.to_string())
}

fn truncate_user_agent(user_agent: &str) -> &str {
    match user_agent.char_indices().nth(MAX_USER_AGENT_LEN) {
        Some((idx, _)) => &user_agent[..idx],
        None => user_agent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_forwarded_for_first_entry() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("203.0.113.7, 10.0.0.1"),
        );

        assert_eq!(forwarded_ip(&headers).as_deref(), Some("203.0.113.7"));
    }

    #[test]
    fn test_real_ip_fallback() {
        let mut headers = HeaderMap::new();
        headers.insert("x-real-ip", HeaderValue::from_static("198.51.100.2"));

        assert_eq!(forwarded_ip(&headers).as_deref(), Some("198.51.100.2"));
    }

    #[test]
    fn test_no_forwarding_headers() {
        assert!(forwarded_ip(&HeaderMap::new()).is_none());
    }

    #[test]
    fn test_empty_forwarded_for_falls_back() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_static(""));
        headers.insert("x-real-ip", HeaderValue::from_static("198.51.100.2"));

        assert_eq!(forwarded_ip(&headers).as_deref(), Some("198.51.100.2"));
    }

    #[test]
    fn test_truncate_user_agent() {
        let long = "a".repeat(MAX_USER_AGENT_LEN + 50);
        assert_eq!(truncate_user_agent(&long).len(), MAX_USER_AGENT_LEN);
        assert_eq!(truncate_user_agent("curl/8.0"), "curl/8.0");
    }
}
