//! Room category handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use renthub_core::error::AppError;
use renthub_entity::room::category::{CreateRoomCategory, RoomCategory};

use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<RoomCategory>>, AppError> {
    Ok(Json(state.category_service.list().await?))
}

/// POST /api/categories
pub async fn create_category(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateRoomCategory>,
) -> Result<(StatusCode, Json<RoomCategory>), AppError> {
    let category = state.category_service.create(&auth, req).await?;
    Ok((StatusCode::CREATED, Json(category)))
}
