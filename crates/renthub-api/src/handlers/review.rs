//! Review handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use renthub_core::error::AppError;
use renthub_entity::review::Review;
use renthub_service::review::WriteReviewRequest;

use crate::dto::response::MessageResponse;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/reviews
pub async fn create_review(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<WriteReviewRequest>,
) -> Result<(StatusCode, Json<Review>), AppError> {
    let review = state.review_service.create(&auth, req).await?;
    Ok((StatusCode::CREATED, Json(review)))
}

/// DELETE /api/reviews/{id}
pub async fn delete_review(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    state.review_service.delete(&auth, id).await?;
    Ok(Json(MessageResponse::new("Review deleted successfully")))
}
