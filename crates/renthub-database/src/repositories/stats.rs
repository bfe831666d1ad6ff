//! Dashboard statistics queries.

use sqlx::PgPool;

use renthub_core::error::{AppError, ErrorKind};
use renthub_core::result::AppResult;

/// Aggregate counters shown on the dashboard.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct DashboardStats {
    /// Rooms currently available for lease.
    pub available_rooms: i64,
    /// Total number of buildings.
    pub total_buildings: i64,
    /// Leases currently active.
    pub active_leases: i64,
    /// Registered user accounts.
    pub registered_users: i64,
}

/// Repository for aggregate dashboard statistics.
#[derive(Debug, Clone)]
pub struct StatsRepository {
    pool: PgPool,
}

impl StatsRepository {
    /// Create a new stats repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Collect all dashboard counters in one round trip.
    pub async fn dashboard(&self) -> AppResult<DashboardStats> {
        let (available_rooms, total_buildings, active_leases, registered_users): (i64, i64, i64, i64) =
            sqlx::query_as(
                "SELECT \
                    (SELECT COUNT(*) FROM rooms WHERE status = 'available'), \
                    (SELECT COUNT(*) FROM buildings), \
                    (SELECT COUNT(*) FROM leases WHERE status = 'active'), \
                    (SELECT COUNT(*) FROM users)",
            )
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to collect statistics", e)
            })?;

        Ok(DashboardStats {
            available_rooms,
            total_buildings,
            active_leases,
            registered_users,
        })
    }
}
