//! Resolves bearer tokens to persisted user records.

use std::sync::Arc;

use renthub_core::error::AppError;
use renthub_database::repositories::user::UserRepository;
use renthub_entity::user::User;

use crate::jwt::JwtDecoder;

/// Maps a verified token to the user record it identifies.
///
/// Two distinct failure modes are kept apart on purpose: an invalid or
/// expired token is an authentication failure (401), while a valid token
/// whose subject no longer exists — a since-deleted account — is a
/// not-found (404).
#[derive(Debug, Clone)]
pub struct IdentityResolver {
    /// Token decoder.
    decoder: Arc<JwtDecoder>,
    /// User repository.
    user_repo: Arc<UserRepository>,
}

impl IdentityResolver {
    /// Creates a new identity resolver.
    pub fn new(decoder: Arc<JwtDecoder>, user_repo: Arc<UserRepository>) -> Self {
        Self { decoder, user_repo }
    }

    /// Resolves a raw token string to a user.
    pub async fn resolve(&self, token: &str) -> Result<User, AppError> {
        let user_id = self.decoder.decode(token)?;

        self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Resolves the value of an `Authorization` header.
    ///
    /// The header must carry a `Bearer ` prefix; anything else is an
    /// authentication failure.
    pub async fn resolve_bearer(&self, header: &str) -> Result<User, AppError> {
        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::authentication("Invalid Authorization header format"))?;

        self.resolve(token).await
    }

    /// Optional variant for endpoints with mixed public/authenticated
    /// behavior: absent or invalid credentials yield an anonymous caller
    /// instead of failing.
    pub async fn resolve_optional(&self, header: Option<&str>) -> Result<Option<User>, AppError> {
        let Some(header) = header else {
            return Ok(None);
        };

        match self.resolve_bearer(header).await {
            Ok(user) => Ok(Some(user)),
            Err(_) => Ok(None),
        }
    }
}
