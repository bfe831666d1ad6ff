//! Lease repository implementation.
//!
//! Lease creation and deletion are coupled to the room occupancy state
//! machine. Both writes run inside a single transaction so that either
//! the lease row and the room status commit together or neither does.

use sqlx::PgPool;
use tracing::info;

use renthub_core::error::{AppError, ErrorKind};
use renthub_core::result::AppResult;
use renthub_core::types::pagination::ListQuery;
use renthub_entity::lease::model::{CreateLease, UpdateLease};
use renthub_entity::lease::Lease;

/// Repository for lease CRUD, coupled to room occupancy.
#[derive(Debug, Clone)]
pub struct LeaseRepository {
    pool: PgPool,
}

impl LeaseRepository {
    /// Create a new lease repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a lease by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Lease>> {
        sqlx::query_as::<_, Lease>("SELECT * FROM leases WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find lease", e))
    }

    /// List all leases, newest first.
    pub async fn find_all(&self, query: &ListQuery) -> AppResult<Vec<Lease>> {
        sqlx::query_as::<_, Lease>(
            "SELECT * FROM leases ORDER BY created_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(query.limit())
        .bind(query.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list leases", e))
    }

    /// List leases held by a tenant, newest first.
    pub async fn find_by_tenant(&self, tenant_id: i64, query: &ListQuery) -> AppResult<Vec<Lease>> {
        sqlx::query_as::<_, Lease>(
            "SELECT * FROM leases WHERE tenant_id = $1 ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(tenant_id)
        .bind(query.limit())
        .bind(query.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list leases by tenant", e)
        })
    }

    /// Insert a lease and mark its room occupied, atomically.
    ///
    /// The room update is guarded on `status = 'available'`; if no row
    /// matches (room already occupied, under maintenance, or flipped by a
    /// concurrent lease), the transaction rolls back and a `Conflict` is
    /// returned. The caller is expected to have already resolved the room,
    /// so a missing row here also reports as unavailable.
    pub async fn create_occupying_room(&self, data: &CreateLease) -> AppResult<Lease> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let updated =
            sqlx::query("UPDATE rooms SET status = 'occupied' WHERE id = $1 AND status = 'available'")
                .bind(data.room_id)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to occupy room", e)
                })?;

        if updated.rows_affected() == 0 {
            tx.rollback().await.map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to roll back transaction", e)
            })?;
            return Err(AppError::conflict("Room is not available"));
        }

        let lease = sqlx::query_as::<_, Lease>(
            "INSERT INTO leases (room_id, tenant_id, start_date, end_date, monthly_rent, deposit) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(data.room_id)
        .bind(data.tenant_id)
        .bind(data.start_date)
        .bind(data.end_date)
        .bind(data.monthly_rent)
        .bind(data.deposit)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create lease", e))?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
        })?;

        info!(lease_id = lease.id, room_id = lease.room_id, "Lease created, room occupied");

        Ok(lease)
    }

    /// Delete a lease and release its room, atomically.
    ///
    /// If the room has since been deleted, the lease removal still goes
    /// through; the release is best-effort reconciliation.
    pub async fn delete_releasing_room(&self, lease: &Lease) -> AppResult<()> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        sqlx::query("UPDATE rooms SET status = 'available' WHERE id = $1")
            .bind(lease.room_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to release room", e))?;

        sqlx::query("DELETE FROM leases WHERE id = $1")
            .bind(lease.id)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete lease", e))?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
        })?;

        info!(lease_id = lease.id, room_id = lease.room_id, "Lease deleted, room released");

        Ok(())
    }

    /// Apply a partial update; unset fields keep their current value.
    pub async fn update(&self, id: i64, data: &UpdateLease) -> AppResult<Lease> {
        sqlx::query_as::<_, Lease>(
            "UPDATE leases SET \
                start_date = COALESCE($2, start_date), \
                end_date = COALESCE($3, end_date), \
                monthly_rent = COALESCE($4, monthly_rent), \
                deposit = COALESCE($5, deposit), \
                status = COALESCE($6, status) \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(data.start_date)
        .bind(data.end_date)
        .bind(data.monthly_rent)
        .bind(data.deposit)
        .bind(data.status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update lease", e))
    }
}
