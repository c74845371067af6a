//! Health endpoint tests

use crate::common::TestApp;

#[tokio::test]
async fn test_health_returns_200() {
    let app = TestApp::new().await;

    let response = app.client.get(app.url("/api/health")).send().await.unwrap();

    assert_eq!(response.status(), 200);
    let content_type = response.headers().get("content-type").unwrap();
    assert!(content_type.to_str().unwrap().contains("application/json"));
}

#[tokio::test]
async fn test_health_reports_ok_and_database() {
    let app = TestApp::new().await;

    let response = app.client.get(app.url("/api/health")).send().await.unwrap();
    let body: serde_json::Value = response.json().await.unwrap();

    assert_eq!(body["ok"], true);
    assert_eq!(body["app"], "Sunnetna Trpeza");
    assert_eq!(body["database"], "ok");
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn test_health_reports_database_down() {
    let app = TestApp::new().await;
    app.pool.close().await;

    let response = app.client.get(app.url("/api/health")).send().await.unwrap();
    assert_eq!(response.status(), 500);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["ok"], false);
    assert_eq!(body["database"], "unreachable");
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let app = TestApp::new().await;

    let response = app.client.get(app.url("/api/nothing")).send().await.unwrap();
    assert_eq!(response.status(), 404);
}
