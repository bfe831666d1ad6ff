//! Room category repository implementation.

use sqlx::PgPool;

use renthub_core::error::{AppError, ErrorKind};
use renthub_core::result::AppResult;
use renthub_entity::room::category::{CreateRoomCategory, RoomCategory};

/// Repository for room category operations.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    pool: PgPool,
}

impl CategoryRepository {
    /// Create a new category repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all categories.
    pub async fn find_all(&self) -> AppResult<Vec<RoomCategory>> {
        sqlx::query_as::<_, RoomCategory>("SELECT * FROM room_categories ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list categories", e))
    }

    /// Create a new category.
    pub async fn create(&self, data: &CreateRoomCategory) -> AppResult<RoomCategory> {
        sqlx::query_as::<_, RoomCategory>(
            "INSERT INTO room_categories (name, description) VALUES ($1, $2) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create category", e))
    }
}
