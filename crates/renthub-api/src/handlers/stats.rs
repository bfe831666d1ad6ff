//! Dashboard statistics handler.

use axum::Json;
use axum::extract::State;

use renthub_core::error::AppError;
use renthub_database::repositories::stats::DashboardStats;

use crate::state::AppState;

/// GET /api/stats
pub async fn get_stats(State(state): State<AppState>) -> Result<Json<DashboardStats>, AppError> {
    Ok(Json(state.stats_service.dashboard().await?))
}
