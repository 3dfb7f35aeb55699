//! Application state shared across all handlers.

use std::sync::Arc;

use sqlx::SqlitePool;

use bloodlink_auth::jwt::decoder::JwtDecoder;
use bloodlink_auth::rbac::enforcer::RbacEnforcer;
use bloodlink_core::config::AppConfig;
use bloodlink_database::repositories::user::UserRepository;
use bloodlink_service::admin::AdminService;
use bloodlink_service::auth::AuthService;
use bloodlink_service::donation::DonationService;
use bloodlink_service::donor::DonorService;
use bloodlink_service::profile::ProfileService;
use bloodlink_service::request::RequestService;
use bloodlink_service::volunteer::VolunteerService;

/// Application state containing all shared dependencies.
///
/// Passed to every axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// SQLite connection pool (used directly by the health check).
    pub db_pool: SqlitePool,
    /// JWT token decoder and validator.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Role-based access control enforcer.
    pub rbac_enforcer: Arc<RbacEnforcer>,
    /// User repository (for the `me` endpoint).
    pub user_repo: Arc<UserRepository>,
    /// Registration/login service.
    pub auth_service: Arc<AuthService>,
    /// Donor directory service.
    pub donor_service: Arc<DonorService>,
    /// Volunteer service.
    pub volunteer_service: Arc<VolunteerService>,
    /// Blood request service.
    pub request_service: Arc<RequestService>,
    /// Donation recording service.
    pub donation_service: Arc<DonationService>,
    /// Profile aggregation service.
    pub profile_service: Arc<ProfileService>,
    /// Admin operations service.
    pub admin_service: Arc<AdminService>,
}
