mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;

#[tokio::test]
async fn test_shorten_success() {
    let server = TestServer::new(common::test_app(common::create_test_state())).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com/page" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    let code = json["shortCode"].as_str().unwrap();
    assert_eq!(code.len(), 6);
    assert_eq!(json["shortUrl"], format!("{}/{}", common::BASE_URL, code));
    assert_eq!(json["originalUrl"], "https://example.com/page");
}

#[tokio::test]
async fn test_shorten_generated_codes_are_unique() {
    let server = TestServer::new(common::test_app(common::create_test_state())).unwrap();

    let mut codes = std::collections::HashSet::new();
    for i in 0..50 {
        let response = server
            .post("/api/shorten")
            .json(&json!({ "url": format!("https://example.com/{}", i) }))
            .await;
        response.assert_status(StatusCode::CREATED);

        let json = response.json::<serde_json::Value>();
        assert!(codes.insert(json["shortCode"].as_str().unwrap().to_string()));
    }
}

#[tokio::test]
async fn test_shorten_custom_alias_twice() {
    let server = TestServer::new(common::test_app(common::create_test_state())).unwrap();

    let first = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com", "customAlias": "promo" }))
        .await;
    first.assert_status(StatusCode::CREATED);
    assert_eq!(first.json::<serde_json::Value>()["shortCode"], "promo");

    let second = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://other.com", "customAlias": "promo" }))
        .await;
    second.assert_status(StatusCode::CONFLICT);

    let json = second.json::<serde_json::Value>();
    assert_eq!(json["error"], "Custom alias is already taken");
    assert_eq!(json["code"], "conflict");
}

#[tokio::test]
async fn test_shorten_invalid_url() {
    let server = TestServer::new(common::test_app(common::create_test_state())).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "not-a-url" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<serde_json::Value>()["error"],
        "Invalid URL format"
    );
}

#[tokio::test]
async fn test_shorten_unsupported_scheme() {
    let server = TestServer::new(common::test_app(common::create_test_state())).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "ftp://example.com/file" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_shorten_missing_url() {
    let server = TestServer::new(common::test_app(common::create_test_state())).unwrap();

    let response = server.post("/api/shorten").json(&json!({})).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<serde_json::Value>()["error"],
        "URL is required"
    );

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "   " }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_shorten_alias_too_short() {
    let server = TestServer::new(common::test_app(common::create_test_state())).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://x.com", "customAlias": "ab" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<serde_json::Value>()["code"],
        "validation_error"
    );
}

#[tokio::test]
async fn test_shorten_alias_invalid_characters() {
    let server = TestServer::new(common::test_app(common::create_test_state())).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://x.com", "customAlias": "my link!" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_shorten_reserved_alias() {
    let server = TestServer::new(common::test_app(common::create_test_state())).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://x.com", "customAlias": "health" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_shorten_blank_alias_is_ignored() {
    let server = TestServer::new(common::test_app(common::create_test_state())).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://x.com", "customAlias": "" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["shortCode"].as_str().unwrap().len(), 6);
}

#[tokio::test]
async fn test_shorten_with_utm_params() {
    let server = TestServer::new(common::test_app(common::create_test_state())).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({
            "url": "https://example.com/landing?ref=home",
            "utmSource": "newsletter",
            "utmMedium": "email",
            "utmCampaign": ""
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(
        response.json::<serde_json::Value>()["originalUrl"],
        "https://example.com/landing?ref=home&utm_source=newsletter&utm_medium=email"
    );
}

#[tokio::test]
async fn test_shorten_over_long_field() {
    let server = TestServer::new(common::test_app(common::create_test_state())).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({
            "url": "https://example.com",
            "utmContent": "x".repeat(500)
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_shorten_malformed_json() {
    let server = TestServer::new(common::test_app(common::create_test_state())).unwrap();

    let response = server
        .post("/api/shorten")
        .text("{not json")
        .content_type("application/json")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<serde_json::Value>()["code"],
        "validation_error"
    );
}
