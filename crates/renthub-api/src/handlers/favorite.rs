//! Favorite handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use renthub_core::error::AppError;
use renthub_entity::favorite::Favorite;

use crate::dto::request::AddFavoriteRequest;
use crate::dto::response::MessageResponse;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/favorites
pub async fn list_favorites(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<Favorite>>, AppError> {
    Ok(Json(state.favorite_service.list(&auth).await?))
}

/// POST /api/favorites
pub async fn add_favorite(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<AddFavoriteRequest>,
) -> Result<(StatusCode, Json<Favorite>), AppError> {
    let favorite = state.favorite_service.create(&auth, req.room_id).await?;
    Ok((StatusCode::CREATED, Json(favorite)))
}

/// DELETE /api/favorites/{id}
pub async fn remove_favorite(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    state.favorite_service.delete(&auth, id).await?;
    Ok(Json(MessageResponse::new("Removed from favorites")))
}
