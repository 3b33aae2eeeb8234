mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum_test::TestServer;
use std::sync::Arc;
use tinylink::domain::entities::{NewUrlRecord, RequestMeta};
use tinylink::domain::repositories::UrlRepository;
use tinylink::infrastructure::persistence::InMemoryUrlRepository;
use tokio::task::JoinSet;
use tower::ServiceExt;

async fn seed(repo: &InMemoryUrlRepository, code: &str, url: &str) {
    repo.insert(NewUrlRecord {
        short_code: code.to_string(),
        original_url: url.to_string(),
        meta: RequestMeta::default(),
    })
    .await
    .unwrap();
}

#[tokio::test]
async fn test_redirect_success() {
    let repo = Arc::new(InMemoryUrlRepository::new());
    seed(&repo, "abc123", "https://example.com/target").await;

    let server =
        TestServer::new(common::test_app(common::create_test_state_with_repo(repo))).unwrap();

    let response = server.get("/abc123").await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(
        response.header(header::LOCATION),
        "https://example.com/target"
    );
}

#[tokio::test]
async fn test_redirect_counts_click() {
    let repo = Arc::new(InMemoryUrlRepository::new());
    seed(&repo, "abc123", "https://example.com").await;

    let server = TestServer::new(common::test_app(common::create_test_state_with_repo(
        repo.clone(),
    )))
    .unwrap();

    server.get("/abc123").await.assert_status(StatusCode::FOUND);

    let record = repo.find_by_code("abc123").await.unwrap().unwrap();
    assert_eq!(record.clicks, 1);
    assert!(record.last_clicked_at.is_some());

    let stats = server.get("/api/stats/abc123").await;
    stats.assert_status_ok();
    assert_eq!(stats.json::<serde_json::Value>()["clicks"], 1);
}

#[tokio::test]
async fn test_redirect_not_found() {
    let server = TestServer::new(common::test_app(common::create_test_state())).unwrap();

    let response = server.get("/nonexistent").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "URL not found");
    assert_eq!(json["code"], "not_found");
}

#[tokio::test]
async fn test_redirect_after_shorten() {
    let server = TestServer::new(common::test_app(common::create_test_state())).unwrap();

    let created = server
        .post("/api/shorten")
        .json(&serde_json::json!({ "url": "https://rust-lang.org", "customAlias": "rust" }))
        .await;
    created.assert_status(StatusCode::CREATED);

    let response = server.get("/rust").await;
    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header(header::LOCATION), "https://rust-lang.org");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_redirects_count_every_click() {
    const REQUESTS: usize = 100;

    let repo = Arc::new(InMemoryUrlRepository::new());
    seed(&repo, "hot", "https://example.com").await;

    let app = common::test_app(common::create_test_state_with_repo(repo.clone()));

    let mut tasks = JoinSet::new();
    for _ in 0..REQUESTS {
        let app = app.clone();
        tasks.spawn(async move {
            let request = Request::builder().uri("/hot").body(Body::empty()).unwrap();
            app.oneshot(request).await.unwrap().status()
        });
    }

    while let Some(status) = tasks.join_next().await {
        assert_eq!(status.unwrap(), StatusCode::FOUND);
    }

    let record = repo.find_by_code("hot").await.unwrap().unwrap();
    assert_eq!(record.clicks, REQUESTS as i64);
}

#[tokio::test]
async fn test_redirect_after_shorten_with_newline_rejected() {
    let server = TestServer::new(common::test_app(common::create_test_state())).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&serde_json::json!({ "url": "https://example.com/a\nb" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<serde_json::Value>()["error"],
        "Invalid URL format"
    );
}

#[tokio::test]
async fn test_redirect_after_shorten_non_ascii_url() {
    let server = TestServer::new(common::test_app(common::create_test_state())).unwrap();

    let created = server
        .post("/api/shorten")
        .json(&serde_json::json!({ "url": "https://example.com/caf\u{e9}" }))
        .await;
    created.assert_status(StatusCode::CREATED);
    let code = created.json::<serde_json::Value>()["shortCode"]
        .as_str()
        .unwrap()
        .to_string();

    let response = server.get(&format!("/{}", code)).await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(
        response.header(header::LOCATION),
        "https://example.com/caf%C3%A9"
    );
}

#[tokio::test]
async fn test_redirect_unsendable_stored_url() {
    let repo = Arc::new(InMemoryUrlRepository::new());
    seed(&repo, "broken", "https://example.com/a\nb").await;

    let server =
        TestServer::new(common::test_app(common::create_test_state_with_repo(repo))).unwrap();

    let response = server.get("/broken").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<serde_json::Value>()["code"],
        "internal_error"
    );
}
