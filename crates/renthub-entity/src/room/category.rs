//! Room category tag.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A category tag applied to rooms (office, retail, warehouse, ...).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RoomCategory {
    /// Unique category identifier.
    pub id: i64,
    /// Category name.
    pub name: String,
    /// Free-form description.
    pub description: Option<String>,
}

/// Data required to create a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRoomCategory {
    pub name: String,
    pub description: Option<String>,
}
