//! Room photo metadata.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Metadata row for a stored room photo.
///
/// The binary itself lives on disk under the upload root; `photo_url` is
/// the public path it is served from.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RoomPhoto {
    /// Unique photo identifier.
    pub id: i64,
    /// Room the photo belongs to.
    pub room_id: i64,
    /// Public URL path of the stored file.
    pub photo_url: String,
    /// Optional caption.
    pub description: Option<String>,
}

/// Data required to record an uploaded photo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRoomPhoto {
    pub room_id: i64,
    pub photo_url: String,
    pub description: Option<String>,
}
