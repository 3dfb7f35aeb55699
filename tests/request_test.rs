//! Integration tests for the blood request lifecycle.

mod helpers;

use http::StatusCode;
use serde_json::json;

async fn create_request(
    app: &helpers::TestApp,
    token: &str,
    patient: &str,
    urgency: Option<&str>,
) -> String {
    let mut body = json!({
        "patientName": patient,
        "bloodGroup": "O+",
        "units": 2,
        "hospital": "Dhaka Medical College",
        "district": "Dhaka",
        "upazila": "Ramna",
        "contactPhone": "01700000000",
        "contactEmail": "contact@example.com",
    });
    if let Some(u) = urgency {
        body["urgency"] = json!(u);
    }

    let response = app
        .request("POST", "/api/requests", Some(body), Some(token))
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    response
        .body
        .get("id")
        .and_then(|v| v.as_str())
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn test_create_defaults_pending_and_normal() {
    let app = helpers::TestApp::new().await;
    let token = app.register_and_login("A", "a@a.com", "user").await;

    let id = create_request(&app, &token, "Patient", None).await;

    let listed = app.request("GET", "/api/requests", None, None).await;
    let requests = listed.body.as_array().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].get("id").unwrap().as_str().unwrap(), id);
    assert_eq!(
        requests[0].get("status").unwrap().as_str().unwrap(),
        "pending"
    );
    assert_eq!(
        requests[0].get("urgency").unwrap().as_str().unwrap(),
        "normal"
    );
    assert!(requests[0].get("fulfilledAt").unwrap().is_null());
}

#[tokio::test]
async fn test_list_newest_first_with_filters() {
    let app = helpers::TestApp::new().await;
    let token = app.register_and_login("A", "a@a.com", "user").await;

    create_request(&app, &token, "First", Some("normal")).await;
    create_request(&app, &token, "Second", Some("urgent")).await;

    let listed = app.request("GET", "/api/requests", None, None).await;
    let requests = listed.body.as_array().unwrap();
    assert_eq!(requests.len(), 2);
    assert_eq!(
        requests[0].get("patientName").unwrap().as_str().unwrap(),
        "Second"
    );

    let urgent_only = app
        .request("GET", "/api/requests?urgency=urgent", None, None)
        .await;
    let requests = urgent_only.body.as_array().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].get("patientName").unwrap().as_str().unwrap(),
        "Second"
    );
}

#[tokio::test]
async fn test_fulfill_transition_and_no_revert() {
    let app = helpers::TestApp::new().await;
    let volunteer = app.register_and_login("V", "v@v.com", "volunteer").await;
    let id = create_request(&app, &volunteer, "Patient", None).await;

    let response = app
        .request(
            "PATCH",
            "/api/requests",
            Some(json!({
                "id": id,
                "status": "fulfilled",
                "fulfilledAt": "2024-01-01",
            })),
            Some(&volunteer),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.get("success").unwrap().as_bool().unwrap(), true);

    let listed = app
        .request("GET", "/api/requests?status=fulfilled", None, None)
        .await;
    let requests = listed.body.as_array().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].get("fulfilledAt").unwrap().as_str().unwrap(),
        "2024-01-01"
    );

    // The transition is one-way: fulfilled never goes back to pending.
    let revert = app
        .request(
            "PATCH",
            "/api/requests",
            Some(json!({ "id": id, "status": "pending" })),
            Some(&volunteer),
        )
        .await;
    assert_eq!(revert.status, StatusCode::BAD_REQUEST);

    let still_fulfilled = app
        .request("GET", "/api/requests?status=fulfilled", None, None)
        .await;
    assert_eq!(still_fulfilled.body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_arbitrary_status_string_rejected() {
    let app = helpers::TestApp::new().await;
    let volunteer = app.register_and_login("V", "v@v.com", "volunteer").await;
    let id = create_request(&app, &volunteer, "Patient", None).await;

    let response = app
        .request(
            "PATCH",
            "/api/requests",
            Some(json!({ "id": id, "status": "whatever" })),
            Some(&volunteer),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_fulfill_requires_volunteer_role() {
    let app = helpers::TestApp::new().await;
    let user = app.register_and_login("U", "u@u.com", "user").await;
    let id = create_request(&app, &user, "Patient", None).await;

    let response = app
        .request(
            "PATCH",
            "/api/requests",
            Some(json!({ "id": id, "status": "fulfilled" })),
            Some(&user),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_fulfill_unknown_request_not_found() {
    let app = helpers::TestApp::new().await;
    let volunteer = app.register_and_login("V", "v@v.com", "volunteer").await;

    let response = app
        .request(
            "PATCH",
            "/api/requests",
            Some(json!({
                "id": "00000000-0000-4000-8000-000000000000",
                "status": "fulfilled",
            })),
            Some(&volunteer),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
