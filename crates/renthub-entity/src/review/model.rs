//! Review entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A user's rating and comment on a room.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Review {
    /// Unique review identifier.
    pub id: i64,
    /// Authoring user.
    pub user_id: i64,
    /// Reviewed room.
    pub room_id: i64,
    /// Rating in the range 1..=5.
    pub rating: i32,
    /// Free-form comment.
    pub comment: Option<String>,
    /// When the review was written.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReview {
    pub user_id: i64,
    pub room_id: i64,
    pub rating: i32,
    pub comment: Option<String>,
}
