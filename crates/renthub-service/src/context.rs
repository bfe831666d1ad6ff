//! Request context carrying the authenticated caller.

use serde::{Deserialize, Serialize};

use renthub_entity::user::{User, UserRole};

/// Context for the current authenticated request.
///
/// Built by the auth extractor from the resolved user record and passed
/// into service methods so that every operation knows *who* is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: i64,
    /// The user's role.
    pub role: UserRole,
    /// The user's email (convenience field for logging).
    pub email: String,
    /// The user's display name.
    pub full_name: String,
}

impl RequestContext {
    /// Returns whether the current user is an admin.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

impl From<&User> for RequestContext {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id,
            role: user.role,
            email: user.email.clone(),
            full_name: user.full_name.clone(),
        }
    }
}
