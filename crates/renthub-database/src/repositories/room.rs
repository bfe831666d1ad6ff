//! Room repository implementation.

use sqlx::PgPool;

use renthub_core::error::{AppError, ErrorKind};
use renthub_core::result::AppResult;
use renthub_core::types::pagination::ListQuery;
use renthub_entity::room::model::{CreateRoom, RoomFilter, UpdateRoom};
use renthub_entity::room::Room;

/// Repository for room CRUD and query operations.
#[derive(Debug, Clone)]
pub struct RoomRepository {
    pool: PgPool,
}

impl RoomRepository {
    /// Create a new room repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a room by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Room>> {
        sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find room", e))
    }

    /// List rooms with optional status/category/building/price filters.
    pub async fn find_filtered(
        &self,
        filter: &RoomFilter,
        query: &ListQuery,
    ) -> AppResult<Vec<Room>> {
        sqlx::query_as::<_, Room>(
            "SELECT * FROM rooms WHERE \
                ($1::room_status IS NULL OR status = $1) AND \
                ($2::BIGINT IS NULL OR category_id = $2) AND \
                ($3::BIGINT IS NULL OR building_id = $3) AND \
                ($4::DOUBLE PRECISION IS NULL OR price_per_month >= $4) AND \
                ($5::DOUBLE PRECISION IS NULL OR price_per_month <= $5) \
             ORDER BY id LIMIT $6 OFFSET $7",
        )
        .bind(filter.status)
        .bind(filter.category_id)
        .bind(filter.building_id)
        .bind(filter.min_price)
        .bind(filter.max_price)
        .bind(query.limit())
        .bind(query.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list rooms", e))
    }

    /// Create a new room.
    pub async fn create(&self, data: &CreateRoom) -> AppResult<Room> {
        sqlx::query_as::<_, Room>(
            "INSERT INTO rooms \
                (building_id, category_id, room_number, floor, area, price_per_month, status, description) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *",
        )
        .bind(data.building_id)
        .bind(data.category_id)
        .bind(&data.room_number)
        .bind(data.floor)
        .bind(data.area)
        .bind(data.price_per_month)
        .bind(data.status.unwrap_or_default())
        .bind(&data.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create room", e))
    }

    /// Apply a partial update; unset fields keep their current value.
    pub async fn update(&self, id: i64, data: &UpdateRoom) -> AppResult<Room> {
        sqlx::query_as::<_, Room>(
            "UPDATE rooms SET \
                building_id = COALESCE($2, building_id), \
                category_id = COALESCE($3, category_id), \
                room_number = COALESCE($4, room_number), \
                floor = COALESCE($5, floor), \
                area = COALESCE($6, area), \
                price_per_month = COALESCE($7, price_per_month), \
                status = COALESCE($8, status), \
                description = COALESCE($9, description) \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(data.building_id)
        .bind(data.category_id)
        .bind(&data.room_number)
        .bind(data.floor)
        .bind(data.area)
        .bind(data.price_per_month)
        .bind(data.status)
        .bind(&data.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update room", e))
    }

    /// Delete a room row. Returns whether a row was removed.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM rooms WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete room", e))?;
        Ok(result.rows_affected() > 0)
    }
}
