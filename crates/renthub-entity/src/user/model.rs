//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::role::UserRole;

/// A registered user of the rental platform.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: i64,
    /// Full display name.
    pub full_name: String,
    /// Email address (unique, used for login).
    pub email: String,
    /// Contact phone number.
    pub phone: Option<String>,
    /// User role (access control).
    pub role: UserRole,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Check if this user has admin privileges.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Full display name.
    pub full_name: String,
    /// Email address.
    pub email: String,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Assigned role.
    pub role: UserRole,
    /// Pre-hashed password.
    pub password_hash: String,
}
