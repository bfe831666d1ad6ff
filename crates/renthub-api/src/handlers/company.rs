//! Company CRUD handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use renthub_core::error::AppError;
use renthub_core::types::pagination::ListQuery;
use renthub_entity::company::{Company, CreateCompany, UpdateCompany};

use crate::dto::response::MessageResponse;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/companies
pub async fn list_companies(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Company>>, AppError> {
    Ok(Json(state.company_service.list(&query).await?))
}

/// GET /api/companies/{id}
pub async fn get_company(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Company>, AppError> {
    Ok(Json(state.company_service.get(id).await?))
}

/// POST /api/companies
pub async fn create_company(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateCompany>,
) -> Result<(StatusCode, Json<Company>), AppError> {
    let company = state.company_service.create(&auth, req).await?;
    Ok((StatusCode::CREATED, Json(company)))
}

/// PUT /api/companies/{id}
pub async fn update_company(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
    Json(req): Json<UpdateCompany>,
) -> Result<Json<Company>, AppError> {
    Ok(Json(state.company_service.update(&auth, id, req).await?))
}

/// DELETE /api/companies/{id}
pub async fn delete_company(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    state.company_service.delete(&auth, id).await?;
    Ok(Json(MessageResponse::new("Company deleted successfully")))
}
