//! Building repository implementation.

use sqlx::PgPool;

use renthub_core::error::{AppError, ErrorKind};
use renthub_core::result::AppResult;
use renthub_core::types::pagination::ListQuery;
use renthub_entity::building::{Building, CreateBuilding, UpdateBuilding};

/// Repository for building CRUD operations.
#[derive(Debug, Clone)]
pub struct BuildingRepository {
    pool: PgPool,
}

impl BuildingRepository {
    /// Create a new building repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a building by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Building>> {
        sqlx::query_as::<_, Building>("SELECT * FROM buildings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find building", e))
    }

    /// List buildings.
    pub async fn find_all(&self, query: &ListQuery) -> AppResult<Vec<Building>> {
        sqlx::query_as::<_, Building>("SELECT * FROM buildings ORDER BY id LIMIT $1 OFFSET $2")
            .bind(query.limit())
            .bind(query.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list buildings", e))
    }

    /// Create a new building.
    pub async fn create(&self, data: &CreateBuilding) -> AppResult<Building> {
        sqlx::query_as::<_, Building>(
            "INSERT INTO buildings (company_id, name, address, year_built, total_area, description) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(data.company_id)
        .bind(&data.name)
        .bind(&data.address)
        .bind(data.year_built)
        .bind(data.total_area)
        .bind(&data.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create building", e))
    }

    /// Apply a partial update; unset fields keep their current value.
    pub async fn update(&self, id: i64, data: &UpdateBuilding) -> AppResult<Building> {
        sqlx::query_as::<_, Building>(
            "UPDATE buildings SET \
                company_id = COALESCE($2, company_id), \
                name = COALESCE($3, name), \
                address = COALESCE($4, address), \
                year_built = COALESCE($5, year_built), \
                total_area = COALESCE($6, total_area), \
                description = COALESCE($7, description) \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(data.company_id)
        .bind(&data.name)
        .bind(&data.address)
        .bind(data.year_built)
        .bind(data.total_area)
        .bind(&data.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update building", e))
    }

    /// Delete a building row. Returns whether a row was removed.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM buildings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete building", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
