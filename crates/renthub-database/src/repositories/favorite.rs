//! Favorite repository implementation.

use sqlx::PgPool;

use renthub_core::error::{AppError, ErrorKind};
use renthub_core::result::AppResult;
use renthub_entity::favorite::Favorite;

/// Repository for (user, room) favorites.
#[derive(Debug, Clone)]
pub struct FavoriteRepository {
    pool: PgPool,
}

impl FavoriteRepository {
    /// Create a new favorite repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a favorite by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Favorite>> {
        sqlx::query_as::<_, Favorite>("SELECT * FROM favorites WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find favorite", e))
    }

    /// List a user's favorites.
    pub async fn find_by_user(&self, user_id: i64) -> AppResult<Vec<Favorite>> {
        sqlx::query_as::<_, Favorite>("SELECT * FROM favorites WHERE user_id = $1 ORDER BY id")
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list favorites", e))
    }

    /// Check whether the (user, room) pair already exists.
    pub async fn exists(&self, user_id: i64, room_id: i64) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM favorites WHERE user_id = $1 AND room_id = $2)",
        )
        .bind(user_id)
        .bind(room_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to check favorite", e))
    }

    /// Create a favorite. The UNIQUE(user_id, room_id) constraint backs up
    /// the existence check against concurrent inserts.
    pub async fn create(&self, user_id: i64, room_id: i64) -> AppResult<Favorite> {
        sqlx::query_as::<_, Favorite>(
            "INSERT INTO favorites (user_id, room_id) VALUES ($1, $2) RETURNING *",
        )
        .bind(user_id)
        .bind(room_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return AppError::conflict("Room already in favorites");
                }
            }
            AppError::with_source(ErrorKind::Database, "Failed to create favorite", e)
        })
    }

    /// Delete a favorite row. Returns whether a row was removed.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM favorites WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete favorite", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
