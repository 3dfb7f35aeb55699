//! Integration tests for the donor directory.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_create_and_filter_by_blood_group() {
    let app = helpers::TestApp::new().await;
    let token = app.register_and_login("A", "a@a.com", "user").await;

    let response = app
        .request(
            "POST",
            "/api/donors",
            Some(serde_json::json!({
                "name": "A",
                "bloodGroup": "O+",
                "district": "X",
                "upazila": "Y",
                "phone": "1",
                "email": "a@a.com",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body.get("village").unwrap().as_str().unwrap(), "");
    assert!(response.body.get("lastDonation").unwrap().is_null());

    // A donor with a different blood group, to prove the filter excludes.
    let other = app
        .request(
            "POST",
            "/api/donors",
            Some(serde_json::json!({
                "name": "B",
                "bloodGroup": "AB-",
                "district": "X",
                "upazila": "Y",
                "phone": "2",
                "email": "b@b.com",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(other.status, StatusCode::CREATED);

    let listed = app
        .request("GET", "/api/donors?bloodGroup=O%2B", None, None)
        .await;
    assert_eq!(listed.status, StatusCode::OK);
    let donors = listed.body.as_array().unwrap();
    assert_eq!(donors.len(), 1);
    assert_eq!(donors[0].get("name").unwrap().as_str().unwrap(), "A");
    assert_eq!(donors[0].get("bloodGroup").unwrap().as_str().unwrap(), "O+");
}

#[tokio::test]
async fn test_district_filter_is_case_insensitive_substring() {
    let app = helpers::TestApp::new().await;
    let token = app.register_and_login("A", "a@a.com", "user").await;
    app.create_donor(&token, "Karim", "B+").await; // district "Dhaka"

    let response = app
        .request("GET", "/api/donors?district=dhaka", None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.as_array().unwrap().len(), 1);

    // Substring match
    let response = app
        .request("GET", "/api/donors?district=HAK", None, None)
        .await;
    assert_eq!(response.body.as_array().unwrap().len(), 1);

    let response = app
        .request("GET", "/api/donors?district=sylhet", None, None)
        .await;
    assert_eq!(response.body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_filters_compose_with_and() {
    let app = helpers::TestApp::new().await;
    let token = app.register_and_login("A", "a@a.com", "user").await;
    app.create_donor(&token, "Karim", "B+").await; // Dhaka / Savar

    // Matching district but wrong blood group yields nothing.
    let response = app
        .request("GET", "/api/donors?bloodGroup=A%2B&district=dhaka", None, None)
        .await;
    assert_eq!(response.body.as_array().unwrap().len(), 0);

    // All three filters matching.
    let response = app
        .request(
            "GET",
            "/api/donors?bloodGroup=B%2B&district=dhaka&upazila=savar",
            None,
            None,
        )
        .await;
    assert_eq!(response.body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_empty_filter_params_are_ignored() {
    let app = helpers::TestApp::new().await;
    let token = app.register_and_login("A", "a@a.com", "user").await;
    app.create_donor(&token, "Karim", "B+").await;

    let response = app
        .request(
            "GET",
            "/api/donors?bloodGroup=&district=&upazila=",
            None,
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_invalid_blood_group_filter_rejected() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request("GET", "/api/donors?bloodGroup=Z%2B", None, None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_donor_requires_auth() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/donors",
            Some(serde_json::json!({
                "name": "A",
                "bloodGroup": "O+",
                "district": "X",
                "upazila": "Y",
                "phone": "1",
                "email": "a@a.com",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
