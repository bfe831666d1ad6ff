//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use renthub_core::types::pagination::ListQuery;
use renthub_entity::room::model::RoomFilter;
use renthub_entity::room::RoomStatus;

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Full display name.
    #[validate(length(min = 1, message = "Full name is required"))]
    pub full_name: String,
    /// Email address.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Plaintext password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Requested role: "user" or "landlord". Defaults to "user".
    pub role: Option<String>,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Favorite creation request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddFavoriteRequest {
    /// Room to bookmark.
    pub room_id: i64,
}

/// Query parameters for the room listing endpoint: pagination plus the
/// room-specific filters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoomListParams {
    /// Items to skip.
    #[serde(default)]
    pub skip: u64,
    /// Maximum items to return.
    pub limit: Option<u64>,
    /// Filter by occupancy status.
    pub status: Option<RoomStatus>,
    /// Filter by category.
    pub category_id: Option<i64>,
    /// Filter by building.
    pub building_id: Option<i64>,
    /// Minimum monthly price, inclusive.
    pub min_price: Option<f64>,
    /// Maximum monthly price, inclusive.
    pub max_price: Option<f64>,
}

impl RoomListParams {
    /// Split into the room filter and the pagination window.
    pub fn into_parts(self) -> (RoomFilter, ListQuery) {
        let filter = RoomFilter {
            status: self.status,
            category_id: self.category_id,
            building_id: self.building_id,
            min_price: self.min_price,
            max_price: self.max_price,
        };
        let query = match self.limit {
            Some(limit) => ListQuery::new(self.skip, limit),
            None => ListQuery {
                skip: self.skip,
                ..ListQuery::default()
            },
        };
        (filter, query)
    }
}
