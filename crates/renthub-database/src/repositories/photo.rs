//! Room photo repository implementation.

use sqlx::PgPool;

use renthub_core::error::{AppError, ErrorKind};
use renthub_core::result::AppResult;
use renthub_entity::room::photo::{CreateRoomPhoto, RoomPhoto};

/// Repository for room photo metadata rows.
#[derive(Debug, Clone)]
pub struct PhotoRepository {
    pool: PgPool,
}

impl PhotoRepository {
    /// Create a new photo repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a photo by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<RoomPhoto>> {
        sqlx::query_as::<_, RoomPhoto>("SELECT * FROM room_photos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find photo", e))
    }

    /// List photos for a room.
    pub async fn find_by_room(&self, room_id: i64) -> AppResult<Vec<RoomPhoto>> {
        sqlx::query_as::<_, RoomPhoto>("SELECT * FROM room_photos WHERE room_id = $1 ORDER BY id")
            .bind(room_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list photos", e))
    }

    /// List photos for a set of rooms in one query.
    pub async fn find_by_rooms(&self, room_ids: &[i64]) -> AppResult<Vec<RoomPhoto>> {
        sqlx::query_as::<_, RoomPhoto>(
            "SELECT * FROM room_photos WHERE room_id = ANY($1) ORDER BY id",
        )
        .bind(room_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list photos", e))
    }

    /// Record an uploaded photo.
    pub async fn create(&self, data: &CreateRoomPhoto) -> AppResult<RoomPhoto> {
        sqlx::query_as::<_, RoomPhoto>(
            "INSERT INTO room_photos (room_id, photo_url, description) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(data.room_id)
        .bind(&data.photo_url)
        .bind(&data.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create photo", e))
    }

    /// Delete a photo row. Returns whether a row was removed.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM room_photos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete photo", e))?;
        Ok(result.rows_affected() > 0)
    }
}
