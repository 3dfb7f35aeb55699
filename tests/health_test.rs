//! Integration tests for health endpoints.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_health_check() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.get("status").unwrap().as_str().unwrap(), "ok");
    assert!(response.body.get("version").is_some());
}

#[tokio::test]
async fn test_detailed_health_reports_database() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/health/detailed", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body.get("database").unwrap().as_str().unwrap(),
        "ok"
    );
}
