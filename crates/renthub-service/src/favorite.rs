//! Favorite service.

use std::sync::Arc;

use renthub_auth::policy::{AccessPolicy, Action};
use renthub_core::error::AppError;
use renthub_database::repositories::favorite::FavoriteRepository;
use renthub_database::repositories::room::RoomRepository;
use renthub_entity::favorite::Favorite;

use crate::context::RequestContext;

/// Manages per-user room bookmarks.
#[derive(Debug, Clone)]
pub struct FavoriteService {
    /// Favorite repository.
    favorite_repo: Arc<FavoriteRepository>,
    /// Room repository.
    room_repo: Arc<RoomRepository>,
    /// Access policy.
    policy: Arc<AccessPolicy>,
}

impl FavoriteService {
    /// Creates a new favorite service.
    pub fn new(
        favorite_repo: Arc<FavoriteRepository>,
        room_repo: Arc<RoomRepository>,
        policy: Arc<AccessPolicy>,
    ) -> Self {
        Self {
            favorite_repo,
            room_repo,
            policy,
        }
    }

    /// Lists the caller's favorites.
    pub async fn list(&self, ctx: &RequestContext) -> Result<Vec<Favorite>, AppError> {
        self.favorite_repo.find_by_user(ctx.user_id).await
    }

    /// Bookmarks a room for the caller. Each (user, room) pair may exist
    /// at most once; a duplicate is a conflict.
    pub async fn create(&self, ctx: &RequestContext, room_id: i64) -> Result<Favorite, AppError> {
        self.policy
            .require(ctx.role, Action::FavoriteCreate, ctx.user_id, None)?;

        self.room_repo
            .find_by_id(room_id)
            .await?
            .ok_or_else(|| AppError::not_found("Room not found"))?;

        if self.favorite_repo.exists(ctx.user_id, room_id).await? {
            return Err(AppError::conflict("Room already in favorites"));
        }

        self.favorite_repo.create(ctx.user_id, room_id).await
    }

    /// Removes a favorite (owner or admin).
    pub async fn delete(&self, ctx: &RequestContext, id: i64) -> Result<(), AppError> {
        let favorite = self
            .favorite_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Favorite not found"))?;

        self.policy
            .require(ctx.role, Action::FavoriteDelete, ctx.user_id, Some(favorite.user_id))?;

        self.favorite_repo.delete(id).await?;
        Ok(())
    }
}
