//! Account registration and credential verification.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use bloodlink_auth::jwt::{JwtDecoder, JwtEncoder, TokenPair};
use bloodlink_auth::password::{PasswordHasher, PasswordValidator};
use bloodlink_core::error::AppError;
use bloodlink_database::repositories::user::UserRepository;
use bloodlink_entity::user::model::CreateUser;
use bloodlink_entity::user::{User, UserRole};

/// Handles registration, login, and token refresh.
#[derive(Debug, Clone)]
pub struct AuthService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password policy validator.
    validator: Arc<PasswordValidator>,
    /// JWT token encoder.
    jwt_encoder: Arc<JwtEncoder>,
    /// JWT token decoder.
    jwt_decoder: Arc<JwtDecoder>,
}

/// Data for a registration attempt.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RegisterRequest {
    /// Full name.
    pub name: String,
    /// Email address (login identity).
    pub email: String,
    /// Plaintext password (hashed before storage).
    pub password: String,
    /// Requested role (defaults to `user`).
    pub role: Option<UserRole>,
}

/// Result of a successful login.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LoginResult {
    /// The authenticated user.
    pub user: User,
    /// Fresh access and refresh tokens.
    pub tokens: TokenPair,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        jwt_encoder: Arc<JwtEncoder>,
        jwt_decoder: Arc<JwtDecoder>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            validator,
            jwt_encoder,
            jwt_decoder,
        }
    }

    /// Registers a new account.
    ///
    /// Fails with a conflict when the email is already registered; the
    /// existing row is left untouched.
    pub async fn register(&self, req: RegisterRequest) -> Result<User, AppError> {
        if !req.email.contains('@') || !req.email.contains('.') {
            return Err(AppError::validation("Invalid email format"));
        }
        self.validator.validate(&req.password)?;

        if self.user_repo.find_by_email(&req.email).await?.is_some() {
            return Err(AppError::conflict("User already exists"));
        }

        let password_hash = self.hasher.hash_password(&req.password)?;
        let user = self
            .user_repo
            .create(
                Uuid::new_v4(),
                &CreateUser {
                    name: req.name,
                    email: req.email,
                    password_hash,
                    role: req.role.unwrap_or(UserRole::User),
                    phone: None,
                    district: None,
                    upazila: None,
                },
            )
            .await?;

        info!(user_id = %user.id, role = %user.role, "User registered");
        Ok(user)
    }

    /// Verifies credentials and issues a token pair.
    ///
    /// The failure message is identical whether the email is unknown or
    /// the password is wrong.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResult, AppError> {
        let invalid = || AppError::authentication("Invalid email or password");

        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(invalid)?;

        if !self.hasher.verify_password(password, &user.password_hash)? {
            return Err(invalid());
        }

        self.user_repo.update_last_login(user.id).await?;

        let tokens =
            self.jwt_encoder
                .generate_token_pair(user.id, user.role, &user.name, &user.email)?;

        info!(user_id = %user.id, "User logged in");
        Ok(LoginResult { user, tokens })
    }

    /// Exchanges a valid refresh token for a fresh token pair.
    ///
    /// The user's current role is re-read so a role change takes effect on
    /// the next refresh.
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AppError> {
        let claims = self.jwt_decoder.decode_refresh_token(refresh_token)?;

        let user = self
            .user_repo
            .find_by_id(claims.sub)
            .await?
            .ok_or_else(|| AppError::authentication("Account no longer exists"))?;

        self.jwt_encoder
            .generate_token_pair(user.id, user.role, &user.name, &user.email)
    }
}
