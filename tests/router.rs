mod common;

use axum::http::{Method, StatusCode};
use common::{FakeProvider, RecordingCache, assert_cors, create_test_server};
use serde_json::Value;

#[tokio::test]
async fn test_options_short_circuits_on_any_path() {
    let provider = FakeProvider::new();
    let cache = RecordingCache::new();
    let server = create_test_server(provider.clone(), cache.clone());

    for path in [
        "/api/cafes/nearby",
        "/api/cafe/details",
        "/health",
        "/",
        "/does/not/exist",
    ] {
        let response = server.method(Method::OPTIONS, path).await;

        response.assert_status_ok();
        assert_cors(&response);
        assert!(response.as_bytes().is_empty());
    }

    assert_eq!(provider.nearby_calls(), 0);
    assert_eq!(provider.details_calls(), 0);
    assert_eq!(cache.gets(), 0);
}

#[tokio::test]
async fn test_unknown_path_returns_banner() {
    let server = create_test_server(FakeProvider::new(), RecordingCache::new());

    for response in [
        server.get("/").await,
        server.get("/api/unknown").await,
        server.post("/api/unknown").await,
        server.post("/health").await,
    ] {
        response.assert_status_ok();
        response.assert_text("CafeHunt API Server");
        assert_cors(&response);
    }
}

#[tokio::test]
async fn test_health_reports_cache_backend() {
    let cache = RecordingCache::new();
    let server = create_test_server(FakeProvider::new(), cache.clone());

    let response = server.get("/health").await;

    response.assert_status_ok();
    assert_cors(&response);
    let json = response.json::<Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["cache"]["status"], "ok");
    assert!(json.get("version").is_some());
}

#[tokio::test]
async fn test_health_degraded_when_cache_unreachable() {
    let cache = RecordingCache::new();
    cache.fail_reads(true);
    let server = create_test_server(FakeProvider::new(), cache.clone());

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    assert_cors(&response);
    assert_eq!(response.json::<Value>()["status"], "degraded");
}
