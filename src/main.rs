//! BloodLink Server — Blood Donation Management Service
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use bloodlink_core::config::AppConfig;
use bloodlink_core::error::AppError;

#[tokio::main]
async fn main() {
    let env = std::env::var("BLOODLINK_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting BloodLink v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + schema ─────────────────────
    tracing::info!("Opening database...");
    let db = bloodlink_database::connection::DatabasePool::connect(&config.database).await?;
    let db_pool = db.into_pool();

    bloodlink_database::migration::run_migrations(&db_pool).await?;

    // ── Step 2: Initialize repositories ──────────────────────────
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

    // ── Step 3: Initialize auth system ───────────────────────────
    let password_hasher = Arc::new(bloodlink_auth::password::hasher::PasswordHasher::new());
    let password_validator = Arc::new(bloodlink_auth::password::validator::PasswordValidator::new(
        &config.auth,
    ));
    let jwt_encoder = Arc::new(bloodlink_auth::jwt::encoder::JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(bloodlink_auth::jwt::decoder::JwtDecoder::new(&config.auth));
    let rbac_enforcer = Arc::new(bloodlink_auth::rbac::enforcer::RbacEnforcer::new());

    // ── Step 4: Initialize services ──────────────────────────────
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
        bloodlink_service::volunteer::service::VolunteerService::new(Arc::clone(&volunteer_repo)),
    );
    let request_service = Arc::new(bloodlink_service::request::service::RequestService::new(
        Arc::clone(&request_repo),
    ));
    let badge_awarder = bloodlink_service::donation::awarder::BadgeAwarder::new(
        Arc::clone(&donation_repo),
        Arc::clone(&badge_repo),
    );
    let donation_service = Arc::new(bloodlink_service::donation::service::DonationService::new(
        db_pool.clone(),
        Arc::clone(&donor_repo),
        Arc::clone(&donation_repo),
        badge_awarder,
    ));
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

    tracing::info!("Services initialized");

    // ── Step 5: Build and start HTTP server ──────────────────────
    let app_state = bloodlink_api::state::AppState {
        config: Arc::new(config.clone()),
        db_pool: db_pool.clone(),
        jwt_decoder: Arc::clone(&jwt_decoder),
        rbac_enforcer: Arc::clone(&rbac_enforcer),
        user_repo: Arc::clone(&user_repo),
        auth_service,
        donor_service,
        volunteer_service,
        request_service,
        donation_service,
        profile_service,
        admin_service,
    };

    let app = bloodlink_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("BloodLink server listening on {}", addr);

    let server = axum::serve(listener, app).with_graceful_shutdown(async {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
    });

    server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    tracing::info!("BloodLink server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
