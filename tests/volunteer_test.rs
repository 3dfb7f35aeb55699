//! Integration tests for volunteer registration and listing.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_create_defaults_to_active() {
    let app = helpers::TestApp::new().await;
    let token = app.register_and_login("A", "a@a.com", "user").await;

    let response = app
        .request(
            "POST",
            "/api/volunteers",
            Some(serde_json::json!({
                "name": "Salma",
                "email": "salma@example.com",
                "phone": "01800000000",
                "district": "Chattogram",
                "upazila": "Pahartali",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(
        response.body.get("status").unwrap().as_str().unwrap(),
        "active"
    );
}

#[tokio::test]
async fn test_list_returns_active_only() {
    let app = helpers::TestApp::new().await;
    let token = app.register_and_login("A", "a@a.com", "user").await;

    let created = app
        .request(
            "POST",
            "/api/volunteers",
            Some(serde_json::json!({
                "name": "Salma",
                "email": "salma@example.com",
                "phone": "01800000000",
                "district": "Chattogram",
                "upazila": "Pahartali",
            })),
            Some(&token),
        )
        .await;
    let id = created.body.get("id").unwrap().as_str().unwrap().to_string();

    // Demote to pending directly; the public listing must hide it.
    sqlx::query("UPDATE volunteers SET status = 'pending' WHERE id = ?")
        .bind(uuid::Uuid::parse_str(&id).unwrap())
        .execute(&app.db_pool)
        .await
        .unwrap();

    let listed = app.request("GET", "/api/volunteers", None, None).await;
    assert_eq!(listed.status, StatusCode::OK);
    assert_eq!(listed.body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_create_requires_auth() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/volunteers",
            Some(serde_json::json!({
                "name": "Salma",
                "email": "salma@example.com",
                "phone": "01800000000",
                "district": "Chattogram",
                "upazila": "Pahartali",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
