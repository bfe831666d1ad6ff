//! Review service.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use renthub_auth::policy::{AccessPolicy, Action};
use renthub_core::error::AppError;
use renthub_database::repositories::review::ReviewRepository;
use renthub_database::repositories::room::RoomRepository;
use renthub_entity::review::model::CreateReview;
use renthub_entity::review::Review;

use crate::context::RequestContext;

/// Data for writing a review. The author is always the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WriteReviewRequest {
    /// Reviewed room.
    pub room_id: i64,
    /// Rating in the range 1..=5.
    pub rating: i32,
    /// Free-form comment.
    pub comment: Option<String>,
}

/// Manages room reviews.
#[derive(Debug, Clone)]
pub struct ReviewService {
    /// Review repository.
    review_repo: Arc<ReviewRepository>,
    /// Room repository.
    room_repo: Arc<RoomRepository>,
    /// Access policy.
    policy: Arc<AccessPolicy>,
}

impl ReviewService {
    /// Creates a new review service.
    pub fn new(
        review_repo: Arc<ReviewRepository>,
        room_repo: Arc<RoomRepository>,
        policy: Arc<AccessPolicy>,
    ) -> Self {
        Self {
            review_repo,
            room_repo,
            policy,
        }
    }

    /// Lists reviews for a room (public).
    pub async fn list_by_room(&self, room_id: i64) -> Result<Vec<Review>, AppError> {
        self.review_repo.find_by_room(room_id).await
    }

    /// Writes a review on behalf of the caller.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        req: WriteReviewRequest,
    ) -> Result<Review, AppError> {
        self.policy
            .require(ctx.role, Action::ReviewCreate, ctx.user_id, None)?;

        if !(1..=5).contains(&req.rating) {
            return Err(AppError::validation("Rating must be between 1 and 5"));
        }

        self.room_repo
            .find_by_id(req.room_id)
            .await?
            .ok_or_else(|| AppError::not_found("Room not found"))?;

        self.review_repo
            .create(&CreateReview {
                user_id: ctx.user_id,
                room_id: req.room_id,
                rating: req.rating,
                comment: req.comment,
            })
            .await
    }

    /// Deletes a review (author or admin).
    pub async fn delete(&self, ctx: &RequestContext, id: i64) -> Result<(), AppError> {
        let review = self
            .review_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Review not found"))?;

        self.policy
            .require(ctx.role, Action::ReviewDelete, ctx.user_id, Some(review.user_id))?;

        self.review_repo.delete(id).await?;
        Ok(())
    }
}
