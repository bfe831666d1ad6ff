//! Registration, login, and profile operations.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use renthub_auth::password::{PasswordHasher, PasswordValidator};
use renthub_auth::jwt::JwtEncoder;
use renthub_core::error::AppError;
use renthub_database::repositories::user::UserRepository;
use renthub_entity::user::model::CreateUser;
use renthub_entity::user::{User, UserRole};

use crate::context::RequestContext;

/// Handles account registration and credential login.
#[derive(Debug, Clone)]
pub struct AuthService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password policy.
    validator: Arc<PasswordValidator>,
    /// Token issuer.
    encoder: Arc<JwtEncoder>,
}

/// Data for a registration attempt.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RegisterRequest {
    /// Full display name.
    pub full_name: String,
    /// Email address (unique).
    pub email: String,
    /// Contact phone (optional).
    pub phone: Option<String>,
    /// Plaintext password; hashed before it leaves this service.
    pub password: String,
    /// Requested role; defaults to `user`.
    pub role: Option<UserRole>,
}

/// Result of a successful login.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LoginOutcome {
    /// The signed bearer token.
    pub access_token: String,
    /// Absolute token expiry.
    pub expires_at: DateTime<Utc>,
    /// The authenticated user.
    pub user: User,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            validator,
            encoder,
        }
    }

    /// Registers a new account.
    ///
    /// Admin accounts cannot be self-registered; they are provisioned out
    /// of band. A duplicate email is a conflict, surfaced to the client
    /// as a business-rule violation.
    pub async fn register(&self, req: RegisterRequest) -> Result<User, AppError> {
        let role = req.role.unwrap_or_default();
        if role == UserRole::Admin {
            return Err(AppError::validation(
                "Cannot self-register an admin account",
            ));
        }

        self.validator.validate(&req.password)?;

        if self.user_repo.find_by_email(&req.email).await?.is_some() {
            return Err(AppError::conflict("Email already registered"));
        }

        let password_hash = self.hasher.hash_password(&req.password)?;

        let user = self
            .user_repo
            .create(&CreateUser {
                full_name: req.full_name,
                email: req.email,
                phone: req.phone,
                role,
                password_hash,
            })
            .await?;

        info!(user_id = user.id, role = %user.role, "User registered");

        Ok(user)
    }

    /// Authenticates credentials and issues a bearer token.
    ///
    /// Unknown email and wrong password produce the same error so the
    /// response does not reveal which accounts exist.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, AppError> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::authentication("Incorrect email or password"))?;

        let valid = self.hasher.verify_password(password, &user.password_hash)?;
        if !valid {
            return Err(AppError::authentication("Incorrect email or password"));
        }

        let (access_token, expires_at) = self.encoder.issue(user.id)?;

        info!(user_id = user.id, "User logged in");

        Ok(LoginOutcome {
            access_token,
            expires_at,
            user,
        })
    }

    /// Loads the current caller's full profile.
    pub async fn profile(&self, ctx: &RequestContext) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }
}
