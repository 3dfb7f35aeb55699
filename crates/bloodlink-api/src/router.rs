//! Route definitions for the BloodLink HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`. The
//! router receives `AppState` and passes it to all handlers via axum's
//! `State` extractor.

use axum::{
    Router,
    routing::{get, patch, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(donor_routes())
        .merge(volunteer_routes())
        .merge(request_routes())
        .merge(donation_routes())
        .merge(profile_routes())
        .merge(admin_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Auth endpoints: register, login, refresh, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/refresh", post(handlers::auth::refresh))
        .route("/auth/me", get(handlers::auth::me))
}

/// Donor directory
fn donor_routes() -> Router<AppState> {
    Router::new()
        .route("/donors", post(handlers::donor::create_donor))
        .route("/donors", get(handlers::donor::list_donors))
}

/// Volunteer registration and listing
fn volunteer_routes() -> Router<AppState> {
    Router::new()
        .route("/volunteers", post(handlers::volunteer::create_volunteer))
        .route("/volunteers", get(handlers::volunteer::list_volunteers))
}

/// Blood request lifecycle
fn request_routes() -> Router<AppState> {
    Router::new()
        .route("/requests", post(handlers::request::create_request))
        .route("/requests", get(handlers::request::list_requests))
        .route("/requests", patch(handlers::request::update_request))
}

/// Donation recording
fn donation_routes() -> Router<AppState> {
    Router::new().route("/donations", post(handlers::donation::record_donation))
}

/// Aggregated profile read-model
fn profile_routes() -> Router<AppState> {
    Router::new().route("/profile", get(handlers::profile::get_profile))
}

/// Multi-action admin endpoints
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin", get(handlers::admin::admin_query))
        .route("/admin", post(handlers::admin::admin_command))
}

/// Health check endpoints (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/health/detailed", get(handlers::health::detailed_health))
}

/// Build CORS layer from configuration
fn build_cors_layer(state: &AppState) -> CorsLayer {
    use http::Method;
    use tower_http::cors::Any;

    let cors_config = &state.config.server.cors;

    let mut cors = CorsLayer::new();

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<http::HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    let methods: Vec<Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(methods);
    cors = cors.allow_headers(Any);
    cors = cors.max_age(std::time::Duration::from_secs(cors_config.max_age_seconds));

    cors
}
