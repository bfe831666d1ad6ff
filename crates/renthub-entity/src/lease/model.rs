//! Lease entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::status::LeaseStatus;

/// A lease binding a tenant to a room for a date range.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Lease {
    /// Unique lease identifier.
    pub id: i64,
    /// Leased room.
    pub room_id: i64,
    /// Tenant holding the lease.
    pub tenant_id: i64,
    /// Lease start date.
    pub start_date: DateTime<Utc>,
    /// Lease end date (exclusive).
    pub end_date: DateTime<Utc>,
    /// Monthly rent amount.
    pub monthly_rent: f64,
    /// Security deposit.
    pub deposit: Option<f64>,
    /// Lease lifecycle status.
    pub status: LeaseStatus,
    /// When the lease was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a lease.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLease {
    pub room_id: i64,
    pub tenant_id: i64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub monthly_rent: f64,
    pub deposit: Option<f64>,
}

/// Partial update for a lease; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateLease {
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub monthly_rent: Option<f64>,
    pub deposit: Option<f64>,
    pub status: Option<LeaseStatus>,
}
