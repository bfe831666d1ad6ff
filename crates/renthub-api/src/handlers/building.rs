//! Building CRUD handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use renthub_core::error::AppError;
use renthub_core::types::pagination::ListQuery;
use renthub_entity::building::{Building, CreateBuilding, UpdateBuilding};

use crate::dto::response::MessageResponse;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/buildings
pub async fn list_buildings(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Building>>, AppError> {
    Ok(Json(state.building_service.list(&query).await?))
}

/// GET /api/buildings/{id}
pub async fn get_building(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Building>, AppError> {
    Ok(Json(state.building_service.get(id).await?))
}

/// POST /api/buildings
pub async fn create_building(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateBuilding>,
) -> Result<(StatusCode, Json<Building>), AppError> {
    let building = state.building_service.create(&auth, req).await?;
    Ok((StatusCode::CREATED, Json(building)))
}

/// PUT /api/buildings/{id}
pub async fn update_building(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
    Json(req): Json<UpdateBuilding>,
) -> Result<Json<Building>, AppError> {
    Ok(Json(state.building_service.update(&auth, id, req).await?))
}

/// DELETE /api/buildings/{id}
pub async fn delete_building(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    state.building_service.delete(&auth, id).await?;
    Ok(Json(MessageResponse::new("Building deleted successfully")))
}
