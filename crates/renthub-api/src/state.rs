//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use renthub_auth::identity::IdentityResolver;
use renthub_core::config::AppConfig;
use renthub_service::auth::AuthService;
use renthub_service::building::BuildingService;
use renthub_service::category::CategoryService;
use renthub_service::company::CompanyService;
use renthub_service::favorite::FavoriteService;
use renthub_service::lease::LeaseService;
use renthub_service::maintenance::MaintenanceService;
use renthub_service::review::ReviewService;
use renthub_service::room::RoomService;
use renthub_service::stats::StatsService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,
    /// Token-to-user identity resolver.
    pub identity_resolver: Arc<IdentityResolver>,
    /// Registration/login service.
    pub auth_service: Arc<AuthService>,
    /// Company service.
    pub company_service: Arc<CompanyService>,
    /// Building service.
    pub building_service: Arc<BuildingService>,
    /// Category service.
    pub category_service: Arc<CategoryService>,
    /// Room service.
    pub room_service: Arc<RoomService>,
    /// Lease and payment service.
    pub lease_service: Arc<LeaseService>,
    /// Maintenance request service.
    pub maintenance_service: Arc<MaintenanceService>,
    /// Review service.
    pub review_service: Arc<ReviewService>,
    /// Favorite service.
    pub favorite_service: Arc<FavoriteService>,
    /// Statistics service.
    pub stats_service: Arc<StatsService>,
}
