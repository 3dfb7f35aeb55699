//! Integration tests for the multi-action admin endpoints.

mod helpers;

use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_admin_actions_require_admin_role() {
    let app = helpers::TestApp::new().await;
    let user = app.register_and_login("U", "u@u.com", "user").await;

    let response = app
        .request("GET", "/api/admin?action=users", None, Some(&user))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app.request("GET", "/api/admin?action=users", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_list_users_and_stats() {
    let app = helpers::TestApp::new().await;
    let admin = app.register_and_login("Admin", "admin@example.com", "admin").await;
    app.register_and_login("U", "u@u.com", "user").await;

    let response = app
        .request("GET", "/api/admin?action=users", None, Some(&admin))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.get("success").unwrap().as_bool().unwrap(), true);
    assert_eq!(response.body.get("data").unwrap().as_array().unwrap().len(), 2);

    let _donor_id = app.create_donor(&admin, "Karim", "O+").await;

    let response = app
        .request("GET", "/api/admin?action=stats", None, Some(&admin))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let stats = response.body.get("data").unwrap();
    assert_eq!(stats.get("totalUsers").unwrap().as_i64().unwrap(), 2);
    assert_eq!(stats.get("totalDonors").unwrap().as_i64().unwrap(), 1);
    assert_eq!(stats.get("pendingRequests").unwrap().as_i64().unwrap(), 0);
}

#[tokio::test]
async fn test_unknown_action_is_invalid() {
    let app = helpers::TestApp::new().await;
    let admin = app.register_and_login("Admin", "admin@example.com", "admin").await;

    let response = app
        .request("GET", "/api/admin?action=explode", None, Some(&admin))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body.get("message").unwrap().as_str().unwrap(),
        "Invalid action"
    );

    let response = app
        .request(
            "POST",
            "/api/admin",
            Some(json!({ "action": "explode" })),
            Some(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_role() {
    let app = helpers::TestApp::new().await;
    let admin = app.register_and_login("Admin", "admin@example.com", "admin").await;
    app.register_and_login("U", "u@u.com", "user").await;

    let users = app
        .request("GET", "/api/admin?action=users", None, Some(&admin))
        .await;
    let target = users
        .body
        .get("data")
        .unwrap()
        .as_array()
        .unwrap()
        .iter()
        .find(|u| u.get("email").unwrap().as_str().unwrap() == "u@u.com")
        .unwrap()
        .get("id")
        .unwrap()
        .as_str()
        .unwrap()
        .to_string();

    let response = app
        .request(
            "POST",
            "/api/admin",
            Some(json!({
                "action": "update_role",
                "userId": target,
                "role": "volunteer",
            })),
            Some(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response
            .body
            .get("data")
            .unwrap()
            .get("role")
            .unwrap()
            .as_str()
            .unwrap(),
        "volunteer"
    );

    // A promoted user gets the new role on the next login.
    let token = app.login("u@u.com", "password123").await;
    let me = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(me.body.get("role").unwrap().as_str().unwrap(), "volunteer");
}

#[tokio::test]
async fn test_update_role_requires_fields() {
    let app = helpers::TestApp::new().await;
    let admin = app.register_and_login("Admin", "admin@example.com", "admin").await;

    let response = app
        .request(
            "POST",
            "/api/admin",
            Some(json!({ "action": "update_role" })),
            Some(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_approve_volunteer() {
    let app = helpers::TestApp::new().await;
    let admin = app.register_and_login("Admin", "admin@example.com", "admin").await;

    let created = app
        .request(
            "POST",
            "/api/volunteers",
            Some(json!({
                "name": "Salma",
                "email": "salma@example.com",
                "phone": "01800000000",
                "district": "Chattogram",
                "upazila": "Pahartali",
            })),
            Some(&admin),
        )
        .await;
    let id = created.body.get("id").unwrap().as_str().unwrap().to_string();

    sqlx::query("UPDATE volunteers SET status = 'pending' WHERE id = ?")
        .bind(uuid::Uuid::parse_str(&id).unwrap())
        .execute(&app.db_pool)
        .await
        .unwrap();

    let pending = app
        .request("GET", "/api/admin?action=pending_volunteers", None, Some(&admin))
        .await;
    assert_eq!(pending.body.get("data").unwrap().as_array().unwrap().len(), 1);

    let response = app
        .request(
            "POST",
            "/api/admin",
            Some(json!({ "action": "approve_volunteer", "volunteerId": id })),
            Some(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response
            .body
            .get("data")
            .unwrap()
            .get("status")
            .unwrap()
            .as_str()
            .unwrap(),
        "active"
    );

    let pending = app
        .request("GET", "/api/admin?action=pending_volunteers", None, Some(&admin))
        .await;
    assert_eq!(pending.body.get("data").unwrap().as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_delete_user() {
    let app = helpers::TestApp::new().await;
    let admin = app.register_and_login("Admin", "admin@example.com", "admin").await;
    app.register_and_login("U", "u@u.com", "user").await;

    let users = app
        .request("GET", "/api/admin?action=users", None, Some(&admin))
        .await;
    let target = users
        .body
        .get("data")
        .unwrap()
        .as_array()
        .unwrap()
        .iter()
        .find(|u| u.get("email").unwrap().as_str().unwrap() == "u@u.com")
        .unwrap()
        .get("id")
        .unwrap()
        .as_str()
        .unwrap()
        .to_string();

    let response = app
        .request(
            "POST",
            "/api/admin",
            Some(json!({ "action": "delete_user", "userId": target })),
            Some(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // The deleted user can no longer log in.
    let login = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": "u@u.com", "password": "password123" })),
            None,
        )
        .await;
    assert_eq!(login.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_cannot_delete_self() {
    let app = helpers::TestApp::new().await;
    let admin = app.register_and_login("Admin", "admin@example.com", "admin").await;

    let me = app.request("GET", "/api/auth/me", None, Some(&admin)).await;
    let admin_id = me.body.get("id").unwrap().as_str().unwrap().to_string();

    let response = app
        .request(
            "POST",
            "/api/admin",
            Some(json!({ "action": "delete_user", "userId": admin_id })),
            Some(&admin),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
