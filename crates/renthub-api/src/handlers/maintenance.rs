//! Maintenance request handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use renthub_core::error::AppError;
use renthub_core::types::pagination::ListQuery;
use renthub_entity::maintenance::model::UpdateMaintenanceRequest;
use renthub_entity::maintenance::MaintenanceRequest;
use renthub_service::maintenance::RaiseRequest;

use crate::dto::response::MessageResponse;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/maintenance
pub async fn list_requests(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<MaintenanceRequest>>, AppError> {
    Ok(Json(state.maintenance_service.list(&auth, &query).await?))
}

/// GET /api/maintenance/{id}
pub async fn get_request(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<MaintenanceRequest>, AppError> {
    Ok(Json(state.maintenance_service.get(&auth, id).await?))
}

/// POST /api/maintenance
pub async fn create_request(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<RaiseRequest>,
) -> Result<(StatusCode, Json<MaintenanceRequest>), AppError> {
    let request = state.maintenance_service.create(&auth, req).await?;
    Ok((StatusCode::CREATED, Json(request)))
}

/// PUT /api/maintenance/{id}
pub async fn update_request(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
    Json(req): Json<UpdateMaintenanceRequest>,
) -> Result<Json<MaintenanceRequest>, AppError> {
    Ok(Json(state.maintenance_service.update(&auth, id, req).await?))
}

/// DELETE /api/maintenance/{id}
pub async fn delete_request(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    state.maintenance_service.delete(&auth, id).await?;
    Ok(Json(MessageResponse::new(
        "Maintenance request deleted successfully",
    )))
}
