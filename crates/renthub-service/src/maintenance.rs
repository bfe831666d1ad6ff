//! Maintenance request service.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use renthub_auth::policy::{AccessPolicy, Action};
use renthub_core::error::AppError;
use renthub_core::types::pagination::ListQuery;
use renthub_database::repositories::maintenance::MaintenanceRepository;
use renthub_database::repositories::room::RoomRepository;
use renthub_entity::maintenance::model::{CreateMaintenanceRequest, UpdateMaintenanceRequest};
use renthub_entity::maintenance::MaintenanceRequest;

use crate::context::RequestContext;

/// Data for raising a maintenance request. The tenant is always the
/// caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaiseRequest {
    /// Room the issue concerns.
    pub room_id: i64,
    /// Issue description.
    pub description: String,
    /// Priority label; defaults to "medium".
    pub priority: Option<String>,
}

/// Manages tenant maintenance requests.
#[derive(Debug, Clone)]
pub struct MaintenanceService {
    /// Maintenance repository.
    maintenance_repo: Arc<MaintenanceRepository>,
    /// Room repository.
    room_repo: Arc<RoomRepository>,
    /// Access policy.
    policy: Arc<AccessPolicy>,
}

impl MaintenanceService {
    /// Creates a new maintenance service.
    pub fn new(
        maintenance_repo: Arc<MaintenanceRepository>,
        room_repo: Arc<RoomRepository>,
        policy: Arc<AccessPolicy>,
    ) -> Self {
        Self {
            maintenance_repo,
            room_repo,
            policy,
        }
    }

    /// Lists requests: admins see all, everyone else only their own.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        query: &ListQuery,
    ) -> Result<Vec<MaintenanceRequest>, AppError> {
        if ctx.is_admin() {
            self.maintenance_repo.find_all(query).await
        } else {
            self.maintenance_repo.find_by_tenant(ctx.user_id, query).await
        }
    }

    /// Gets a request, subject to the ownership check.
    pub async fn get(&self, ctx: &RequestContext, id: i64) -> Result<MaintenanceRequest, AppError> {
        let request = self.require_request(id).await?;
        self.policy.require(
            ctx.role,
            Action::MaintenanceRead,
            ctx.user_id,
            Some(request.tenant_id),
        )?;
        Ok(request)
    }

    /// Raises a new request on behalf of the caller.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        req: RaiseRequest,
    ) -> Result<MaintenanceRequest, AppError> {
        self.policy
            .require(ctx.role, Action::MaintenanceCreate, ctx.user_id, None)?;

        self.room_repo
            .find_by_id(req.room_id)
            .await?
            .ok_or_else(|| AppError::not_found("Room not found"))?;

        let request = self
            .maintenance_repo
            .create(&CreateMaintenanceRequest {
                room_id: req.room_id,
                tenant_id: ctx.user_id,
                description: req.description,
                priority: req.priority,
            })
            .await?;

        info!(request_id = request.id, user_id = ctx.user_id, "Maintenance request raised");

        Ok(request)
    }

    /// Updates a request (admin only).
    ///
    /// A status transition into `resolved` stamps `resolved_at` with the
    /// server clock; the stamping itself happens atomically in the
    /// repository update.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: i64,
        data: UpdateMaintenanceRequest,
    ) -> Result<MaintenanceRequest, AppError> {
        let request = self.require_request(id).await?;
        self.policy.require(
            ctx.role,
            Action::MaintenanceUpdate,
            ctx.user_id,
            Some(request.tenant_id),
        )?;

        self.maintenance_repo.update(id, &data).await
    }

    /// Deletes a request (owner or admin).
    pub async fn delete(&self, ctx: &RequestContext, id: i64) -> Result<(), AppError> {
        let request = self.require_request(id).await?;
        self.policy.require(
            ctx.role,
            Action::MaintenanceDelete,
            ctx.user_id,
            Some(request.tenant_id),
        )?;

        self.maintenance_repo.delete(id).await?;
        Ok(())
    }

    async fn require_request(&self, id: i64) -> Result<MaintenanceRequest, AppError> {
        self.maintenance_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Maintenance request not found"))
    }
}
