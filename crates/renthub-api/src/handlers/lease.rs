//! Lease and payment handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use renthub_core::error::AppError;
use renthub_core::types::pagination::ListQuery;
use renthub_entity::lease::model::UpdateLease;
use renthub_entity::lease::payment::Payment;
use renthub_entity::lease::Lease;
use renthub_service::lease::{CreateLeaseRequest, CreatePaymentRequest};

use crate::dto::response::MessageResponse;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/leases
pub async fn list_leases(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Lease>>, AppError> {
    Ok(Json(state.lease_service.list(&auth, &query).await?))
}

/// GET /api/leases/{id}
pub async fn get_lease(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<Lease>, AppError> {
    Ok(Json(state.lease_service.get(&auth, id).await?))
}

/// POST /api/leases
pub async fn create_lease(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateLeaseRequest>,
) -> Result<(StatusCode, Json<Lease>), AppError> {
    let lease = state.lease_service.create(&auth, req).await?;
    Ok((StatusCode::CREATED, Json(lease)))
}

/// PUT /api/leases/{id}
pub async fn update_lease(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
    Json(req): Json<UpdateLease>,
) -> Result<Json<Lease>, AppError> {
    Ok(Json(state.lease_service.update(&auth, id, req).await?))
}

/// DELETE /api/leases/{id}
pub async fn delete_lease(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    state.lease_service.delete(&auth, id).await?;
    Ok(Json(MessageResponse::new("Lease deleted successfully")))
}

/// GET /api/leases/{id}/payments
pub async fn list_payments(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Payment>>, AppError> {
    Ok(Json(state.lease_service.payments(&auth, id).await?))
}

/// POST /api/leases/{id}/payments
pub async fn create_payment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
    Json(req): Json<CreatePaymentRequest>,
) -> Result<(StatusCode, Json<Payment>), AppError> {
    let payment = state.lease_service.add_payment(&auth, id, req).await?;
    Ok((StatusCode::CREATED, Json(payment)))
}
