//! Maintenance request entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::status::RequestStatus;

/// A tenant-raised maintenance issue against a room.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MaintenanceRequest {
    /// Unique request identifier.
    pub id: i64,
    /// Room the issue concerns.
    pub room_id: i64,
    /// Tenant who raised the issue.
    pub tenant_id: i64,
    /// Issue description.
    pub description: String,
    /// Priority label (free text: low/medium/high).
    pub priority: String,
    /// Processing status.
    pub status: RequestStatus,
    /// When the request was raised.
    pub created_at: DateTime<Utc>,
    /// When the request was resolved; stamped once on the transition
    /// into `resolved`.
    pub resolved_at: Option<DateTime<Utc>>,
}

/// Data required to raise a maintenance request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMaintenanceRequest {
    pub room_id: i64,
    pub tenant_id: i64,
    pub description: String,
    /// Priority label; defaults to "medium".
    pub priority: Option<String>,
}

/// Partial update for a maintenance request; `None` fields are left
/// unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateMaintenanceRequest {
    pub description: Option<String>,
    pub priority: Option<String>,
    pub status: Option<RequestStatus>,
}
