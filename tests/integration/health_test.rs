//! Tests for the unauthenticated surface: health and unknown routes.

use axum::http::StatusCode;

use super::helpers::TestApp;

#[tokio::test]
async fn test_health_returns_ok_envelope() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], serde_json::json!(true));
    assert_eq!(response.body["data"]["status"], serde_json::json!("ok"));
    assert!(response.body["data"]["version"].is_string());
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/does-not-exist", None, None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
