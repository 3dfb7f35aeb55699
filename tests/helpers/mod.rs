//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

use bloodlink_core::config::AppConfig;
use bloodlink_core::config::database::DatabaseConfig;

/// Test application context
pub struct TestApp {
    /// The axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: SqlitePool,
}

/// A decoded test response
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body (Null when empty or not JSON)
    pub body: Value,
}

impl TestApp {
    /// Create a new test application over a fresh in-memory database.
    pub async fn new() -> Self {
        let config = AppConfig {
            database: DatabaseConfig {
                url: "sqlite::memory:".to_string(),
                max_connections: 1,
                acquire_timeout_seconds: 5,
                idle_timeout_seconds: 0,
            },
            ..AppConfig::default()
        };

        let db = bloodlink_database::connection::DatabasePool::connect(&config.database)
            .await
            .expect("Failed to open test database");
        let db_pool = db.into_pool();

        bloodlink_database::migration::run_migrations(&db_pool)
            .await
            .expect("Failed to apply schema");

        let user_repo = Arc::new(bloodlink_database::repositories::user::UserRepository::new(
            db_pool.clone(),
        ));
        let donor_repo = Arc::new(
            bloodlink_database::repositories::donor::DonorRepository::new(db_pool.clone()),
        );
        let volunteer_repo = Arc::new(
            bloodlink_database::repositories::volunteer::VolunteerRepository::new(db_pool.clone()),
        );
        let request_repo = Arc::new(
            bloodlink_database::repositories::blood_request::BloodRequestRepository::new(
                db_pool.clone(),
            ),
        );
        let donation_repo = Arc::new(
            bloodlink_database::repositories::donation::DonationRepository::new(db_pool.clone()),
        );
        let badge_repo = Arc::new(
            bloodlink_database::repositories::badge::BadgeRepository::new(db_pool.clone()),
        );

        let password_hasher = Arc::new(bloodlink_auth::password::hasher::PasswordHasher::new());
        let password_validator = Arc::new(
            bloodlink_auth::password::validator::PasswordValidator::new(&config.auth),
        );
        let jwt_encoder = Arc::new(bloodlink_auth::jwt::encoder::JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(bloodlink_auth::jwt::decoder::JwtDecoder::new(&config.auth));
        let rbac_enforcer = Arc::new(bloodlink_auth::rbac::enforcer::RbacEnforcer::new());

        let auth_service = Arc::new(bloodlink_service::auth::service::AuthService::new(
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&password_validator),
            Arc::clone(&jwt_encoder),
            Arc::clone(&jwt_decoder),
        ));
        let donor_service = Arc::new(bloodlink_service::donor::service::DonorService::new(
            Arc::clone(&donor_repo),
        ));
        let volunteer_service = Arc::new(
            bloodlink_service::volunteer::service::VolunteerService::new(Arc::clone(
                &volunteer_repo,
            )),
        );
        let request_service = Arc::new(bloodlink_service::request::service::RequestService::new(
            Arc::clone(&request_repo),
        ));
        let badge_awarder = bloodlink_service::donation::awarder::BadgeAwarder::new(
            Arc::clone(&donation_repo),
            Arc::clone(&badge_repo),
        );
        let donation_service = Arc::new(
            bloodlink_service::donation::service::DonationService::new(
                db_pool.clone(),
                Arc::clone(&donor_repo),
                Arc::clone(&donation_repo),
                badge_awarder,
            ),
        );
        let profile_service = Arc::new(bloodlink_service::profile::service::ProfileService::new(
            Arc::clone(&user_repo),
            Arc::clone(&donor_repo),
            Arc::clone(&donation_repo),
            Arc::clone(&badge_repo),
        ));
        let admin_service = Arc::new(bloodlink_service::admin::service::AdminService::new(
            Arc::clone(&user_repo),
            Arc::clone(&donor_repo),
            Arc::clone(&volunteer_repo),
            Arc::clone(&request_repo),
            Arc::clone(&donation_repo),
        ));

        let state = bloodlink_api::state::AppState {
            config: Arc::new(config),
            db_pool: db_pool.clone(),
            jwt_decoder,
            rbac_enforcer,
            user_repo,
            auth_service,
            donor_service,
            volunteer_service,
            request_service,
            donation_service,
            profile_service,
            admin_service,
        };

        let router = bloodlink_api::router::build_router(state);

        Self { router, db_pool }
    }

    /// Send a request to the router and decode the JSON response.
    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(t) = token {
            builder = builder.header("authorization", format!("Bearer {t}"));
        }

        let request = match body {
            Some(b) => builder
                .header("content-type", "application/json")
                .body(Body::from(b.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }

    /// Register an account with the given role and return an access token.
    pub async fn register_and_login(&self, name: &str, email: &str, role: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/register",
                Some(serde_json::json!({
                    "name": name,
                    "email": email,
                    "password": "password123",
                    "role": role,
                })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "registration failed");

        self.login(email, "password123").await
    }

    /// Log in and return the access token.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/login",
                Some(serde_json::json!({ "email": email, "password": password })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "login failed");

        response
            .body
            .get("accessToken")
            .and_then(|v| v.as_str())
            .expect("missing access token")
            .to_string()
    }

    /// Register a donor through the API and return its id.
    pub async fn create_donor(&self, token: &str, name: &str, blood_group: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/donors",
                Some(serde_json::json!({
                    "name": name,
                    "bloodGroup": blood_group,
                    "district": "Dhaka",
                    "upazila": "Savar",
                    "phone": "01700000000",
                    "email": format!("{}@donors.example", name.to_lowercase()),
                })),
                Some(token),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "donor creation failed");

        response
            .body
            .get("id")
            .and_then(|v| v.as_str())
            .expect("missing donor id")
            .to_string()
    }

    /// Record a donation for the donor on the given date.
    pub async fn record_donation(&self, token: &str, donor_id: &str, date: &str) -> TestResponse {
        self.request(
            "POST",
            "/api/donations",
            Some(serde_json::json!({
                "donorId": donor_id,
                "donationDate": date,
                "location": "Dhaka Medical College",
                "bloodGroup": "O+",
            })),
            Some(token),
        )
        .await
    }

    /// Count user_badges rows for a donor and badge name.
    pub async fn badge_count(&self, donor_id: &str, badge_name: &str) -> i64 {
        let donor_id = uuid::Uuid::parse_str(donor_id).unwrap();
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM user_badges ub \
             JOIN badges b ON b.id = ub.badge_id \
             WHERE ub.donor_id = ? AND b.name = ?",
        )
        .bind(donor_id)
        .bind(badge_name)
        .fetch_one(&self.db_pool)
        .await
        .unwrap()
    }
}
