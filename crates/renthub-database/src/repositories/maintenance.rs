//! Maintenance request repository implementation.

use sqlx::PgPool;

use renthub_core::error::{AppError, ErrorKind};
use renthub_core::result::AppResult;
use renthub_core::types::pagination::ListQuery;
use renthub_entity::maintenance::model::{CreateMaintenanceRequest, UpdateMaintenanceRequest};
use renthub_entity::maintenance::MaintenanceRequest;

/// Repository for maintenance request CRUD.
#[derive(Debug, Clone)]
pub struct MaintenanceRepository {
    pool: PgPool,
}

impl MaintenanceRepository {
    /// Create a new maintenance repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a request by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<MaintenanceRequest>> {
        sqlx::query_as::<_, MaintenanceRequest>("SELECT * FROM maintenance_requests WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find maintenance request", e)
            })
    }

    /// List all requests, newest first.
    pub async fn find_all(&self, query: &ListQuery) -> AppResult<Vec<MaintenanceRequest>> {
        sqlx::query_as::<_, MaintenanceRequest>(
            "SELECT * FROM maintenance_requests ORDER BY created_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(query.limit())
        .bind(query.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list maintenance requests", e)
        })
    }

    /// List requests raised by a tenant, newest first.
    pub async fn find_by_tenant(
        &self,
        tenant_id: i64,
        query: &ListQuery,
    ) -> AppResult<Vec<MaintenanceRequest>> {
        sqlx::query_as::<_, MaintenanceRequest>(
            "SELECT * FROM maintenance_requests WHERE tenant_id = $1 \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(tenant_id)
        .bind(query.limit())
        .bind(query.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list maintenance requests", e)
        })
    }

    /// Raise a new request.
    pub async fn create(&self, data: &CreateMaintenanceRequest) -> AppResult<MaintenanceRequest> {
        sqlx::query_as::<_, MaintenanceRequest>(
            "INSERT INTO maintenance_requests (room_id, tenant_id, description, priority) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(data.room_id)
        .bind(data.tenant_id)
        .bind(&data.description)
        .bind(data.priority.as_deref().unwrap_or("medium"))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create maintenance request", e)
        })
    }

    /// Apply a partial update.
    ///
    /// `resolved_at` is stamped with the server clock exactly when the
    /// update transitions the status into `resolved` from some other
    /// status; every other edit leaves the existing stamp untouched.
    /// The CASE reads the pre-update `status`, so this is a single atomic
    /// statement.
    pub async fn update(
        &self,
        id: i64,
        data: &UpdateMaintenanceRequest,
    ) -> AppResult<MaintenanceRequest> {
        sqlx::query_as::<_, MaintenanceRequest>(
            "UPDATE maintenance_requests SET \
                description = COALESCE($2, description), \
                priority = COALESCE($3, priority), \
                resolved_at = CASE \
                    WHEN $4::request_status = 'resolved' AND status <> 'resolved' THEN now() \
                    ELSE resolved_at \
                END, \
                status = COALESCE($4, status) \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.description)
        .bind(&data.priority)
        .bind(data.status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update maintenance request", e)
        })
    }

    /// Delete a request row. Returns whether a row was removed.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM maintenance_requests WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete maintenance request", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
