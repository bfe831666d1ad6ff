//! Building CRUD service.

use std::sync::Arc;

use tracing::info;

use renthub_auth::policy::{AccessPolicy, Action};
use renthub_core::error::AppError;
use renthub_core::types::pagination::ListQuery;
use renthub_database::repositories::building::BuildingRepository;
use renthub_entity::building::{Building, CreateBuilding, UpdateBuilding};

use crate::context::RequestContext;

/// Manages buildings. Reads are public; mutations require the landlord
/// carve-out or admin.
#[derive(Debug, Clone)]
pub struct BuildingService {
    /// Building repository.
    building_repo: Arc<BuildingRepository>,
    /// Access policy.
    policy: Arc<AccessPolicy>,
}

impl BuildingService {
    /// Creates a new building service.
    pub fn new(building_repo: Arc<BuildingRepository>, policy: Arc<AccessPolicy>) -> Self {
        Self {
            building_repo,
            policy,
        }
    }

    /// Lists buildings.
    pub async fn list(&self, query: &ListQuery) -> Result<Vec<Building>, AppError> {
        self.building_repo.find_all(query).await
    }

    /// Gets a building by id.
    pub async fn get(&self, id: i64) -> Result<Building, AppError> {
        self.building_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Building not found"))
    }

    /// Creates a building.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        data: CreateBuilding,
    ) -> Result<Building, AppError> {
        self.policy
            .require(ctx.role, Action::BuildingCreate, ctx.user_id, None)?;

        let building = self.building_repo.create(&data).await?;
        info!(building_id = building.id, user_id = ctx.user_id, "Building created");
        Ok(building)
    }

    /// Updates a building.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: i64,
        data: UpdateBuilding,
    ) -> Result<Building, AppError> {
        self.policy
            .require(ctx.role, Action::BuildingUpdate, ctx.user_id, None)?;

        self.get(id).await?;
        self.building_repo.update(id, &data).await
    }

    /// Deletes a building.
    pub async fn delete(&self, ctx: &RequestContext, id: i64) -> Result<(), AppError> {
        self.policy
            .require(ctx.role, Action::BuildingDelete, ctx.user_id, None)?;

        if !self.building_repo.delete(id).await? {
            return Err(AppError::not_found("Building not found"));
        }
        info!(building_id = id, user_id = ctx.user_id, "Building deleted");
        Ok(())
    }
}
