//! Room entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::status::RoomStatus;

/// A rentable commercial unit.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Room {
    /// Unique room identifier.
    pub id: i64,
    /// Building this room belongs to (optional).
    pub building_id: Option<i64>,
    /// Room category tag.
    pub category_id: Option<i64>,
    /// Room number within the building.
    pub room_number: String,
    /// Floor the room is on.
    pub floor: Option<i32>,
    /// Floor area in square meters.
    pub area: Option<f64>,
    /// Monthly rental price.
    pub price_per_month: f64,
    /// Occupancy status.
    pub status: RoomStatus,
    /// Free-form description.
    pub description: Option<String>,
}

/// Data required to create a room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRoom {
    pub building_id: Option<i64>,
    pub category_id: Option<i64>,
    pub room_number: String,
    pub floor: Option<i32>,
    pub area: Option<f64>,
    pub price_per_month: f64,
    /// Initial status; defaults to `available`.
    pub status: Option<RoomStatus>,
    pub description: Option<String>,
}

/// Partial update for a room; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateRoom {
    pub building_id: Option<i64>,
    pub category_id: Option<i64>,
    pub room_number: Option<String>,
    pub floor: Option<i32>,
    pub area: Option<f64>,
    pub price_per_month: Option<f64>,
    pub status: Option<RoomStatus>,
    pub description: Option<String>,
}

/// Optional filters applied to room listings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoomFilter {
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
