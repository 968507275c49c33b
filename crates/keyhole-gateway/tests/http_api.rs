use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use keyhole_core::Shortener;
use keyhole_engine::{RandomGenerator, ShortenerService};
use keyhole_gateway::app::App;
use keyhole_gateway::state::AppState;
use keyhole_storage::InMemoryStore;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

const BASE_URL: &str = "http://short.est";

fn test_router() -> Router {
    let shortener: Arc<dyn Shortener> = Arc::new(ShortenerService::new(
        InMemoryStore::new(),
        RandomGenerator::default(),
    ));
    App::router(AppState::new(shortener, BASE_URL))
}

async fn post_json(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

async fn encode(router: &Router, original_url: &str) -> String {
    let (status, body) = post_json(
        router,
        "/api/v1/encode",
        json!({ "original_url": original_url }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["short_url"].as_str().unwrap().to_owned()
}

#[tokio::test]
async fn encode_returns_short_url_under_base() {
    let router = test_router();

    let short_url = encode(&router, "https://en.wikipedia.org/wiki/Computer").await;

    let prefix = format!("{}/", BASE_URL);
    assert!(short_url.starts_with(&prefix), "got {short_url}");
    assert_eq!(short_url.len(), prefix.len() + 6);
}

#[tokio::test]
async fn encode_then_decode_round_trips() {
    let router = test_router();

    let short_url = encode(&router, "https://en.wikipedia.org/wiki/Computer").await;
    let (status, body) =
        post_json(&router, "/api/v1/decode", json!({ "short_url": short_url })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["original_url"],
        "https://en.wikipedia.org/wiki/Computer"
    );
}

#[tokio::test]
async fn decode_accepts_bare_code() {
    let router = test_router();

    let short_url = encode(&router, "https://example.com/page").await;
    let code = short_url.rsplit('/').next().unwrap();

    let (status, body) = post_json(&router, "/api/v1/decode", json!({ "short_url": code })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["original_url"], "https://example.com/page");
}

#[tokio::test]
async fn repeated_encode_returns_same_short_url() {
    let router = test_router();

    let first = encode(&router, "https://example.com/page").await;
    let second = encode(&router, "https://example.com/page").await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn distinct_urls_get_distinct_short_urls() {
    let router = test_router();

    let first = encode(&router, "https://example.com/a").await;
    let second = encode(&router, "https://example.com/b").await;

    assert_ne!(first, second);
}

#[tokio::test]
async fn encode_invalid_url_is_400() {
    let router = test_router();

    let (status, body) = post_json(
        &router,
        "/api/v1/encode",
        json!({ "original_url": "not-a-valid-url" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("invalid url"));
}

#[tokio::test]
async fn decode_unknown_code_is_404() {
    let router = test_router();

    let (status, body) = post_json(
        &router,
        "/api/v1/decode",
        json!({ "short_url": "http://short.est/nonexistent123" }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["detail"].as_str().is_some());
}

#[tokio::test]
async fn decode_garbage_input_is_400() {
    let router = test_router();

    let (status, body) = post_json(
        &router,
        "/api/v1/decode",
        json!({ "short_url": "no such code" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().is_some());
}

#[tokio::test]
async fn redirect_points_at_original_url() {
    let router = test_router();

    let short_url = encode(&router, "https://example.com/page").await;
    let code = short_url.rsplit('/').next().unwrap();

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/{code}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.headers()[header::LOCATION],
        "https://example.com/page"
    );
}

#[tokio::test]
async fn redirect_unknown_code_is_404() {
    let router = test_router();

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/nonexistent123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_reports_ok() {
    let router = test_router();

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ok");
}
