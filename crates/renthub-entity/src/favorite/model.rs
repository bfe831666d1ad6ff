//! Favorite entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A (user, room) bookmark. Each pair exists at most once.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Favorite {
    /// Unique favorite identifier.
    pub id: i64,
    /// Owning user.
    pub user_id: i64,
    /// Bookmarked room.
    pub room_id: i64,
}
