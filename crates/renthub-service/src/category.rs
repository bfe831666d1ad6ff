//! Room category service.

use std::sync::Arc;

use renthub_auth::policy::{AccessPolicy, Action};
use renthub_core::error::AppError;
use renthub_database::repositories::category::CategoryRepository;
use renthub_entity::room::category::{CreateRoomCategory, RoomCategory};

use crate::context::RequestContext;

/// Manages room category tags.
#[derive(Debug, Clone)]
pub struct CategoryService {
    /// Category repository.
    category_repo: Arc<CategoryRepository>,
    /// Access policy.
    policy: Arc<AccessPolicy>,
}

impl CategoryService {
    /// Creates a new category service.
    pub fn new(category_repo: Arc<CategoryRepository>, policy: Arc<AccessPolicy>) -> Self {
        Self {
            category_repo,
            policy,
        }
    }

    /// Lists all categories.
    pub async fn list(&self) -> Result<Vec<RoomCategory>, AppError> {
        self.category_repo.find_all().await
    }

    /// Creates a category (admin only).
    pub async fn create(
        &self,
        ctx: &RequestContext,
        data: CreateRoomCategory,
    ) -> Result<RoomCategory, AppError> {
        self.policy
            .require(ctx.role, Action::CategoryCreate, ctx.user_id, None)?;

        self.category_repo.create(&data).await
    }
}
