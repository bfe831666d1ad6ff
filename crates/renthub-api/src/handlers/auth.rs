//! Auth handlers — register, login, me.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use validator::Validate;

use renthub_core::error::AppError;
use renthub_service::auth::RegisterRequest as SvcRegister;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{TokenResponse, UserResponse};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let role = match req.role.as_deref() {
        Some(role) => Some(role.parse()?),
        None => None,
    };

    let user = state
        .auth_service
        .register(SvcRegister {
            full_name: req.full_name,
            email: req.email,
            phone: req.phone,
            password: req.password,
            role,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let outcome = state.auth_service.login(&req.email, &req.password).await?;

    Ok(Json(TokenResponse {
        access_token: outcome.access_token,
        token_type: "bearer".to_string(),
        expires_at: outcome.expires_at,
        user: UserResponse::from(outcome.user),
    }))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.auth_service.profile(&auth).await?;
    Ok(Json(UserResponse::from(user)))
}
