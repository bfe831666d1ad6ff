//! Application builder — wires repositories, auth components, and
//! services into `AppState`, then into the Axum app.

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use renthub_auth::identity::IdentityResolver;
use renthub_auth::jwt::{JwtDecoder, JwtEncoder};
use renthub_auth::password::{PasswordHasher, PasswordValidator};
use renthub_auth::policy::AccessPolicy;
use renthub_core::config::AppConfig;
use renthub_core::error::AppError;
use renthub_database::repositories::building::BuildingRepository;
use renthub_database::repositories::category::CategoryRepository;
use renthub_database::repositories::company::CompanyRepository;
use renthub_database::repositories::favorite::FavoriteRepository;
use renthub_database::repositories::lease::LeaseRepository;
use renthub_database::repositories::maintenance::MaintenanceRepository;
use renthub_database::repositories::payment::PaymentRepository;
use renthub_database::repositories::photo::PhotoRepository;
use renthub_database::repositories::review::ReviewRepository;
use renthub_database::repositories::room::RoomRepository;
use renthub_database::repositories::stats::StatsRepository;
use renthub_database::repositories::user::UserRepository;
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
use renthub_storage::PhotoStore;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete application state and router.
pub async fn build_app(config: AppConfig, db_pool: PgPool) -> Result<Router, AppError> {
    let config = Arc::new(config);

    // ── Repositories ─────────────────────────────────────────────
    let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
    let company_repo = Arc::new(CompanyRepository::new(db_pool.clone()));
    let building_repo = Arc::new(BuildingRepository::new(db_pool.clone()));
    let category_repo = Arc::new(CategoryRepository::new(db_pool.clone()));
    let room_repo = Arc::new(RoomRepository::new(db_pool.clone()));
    let photo_repo = Arc::new(PhotoRepository::new(db_pool.clone()));
    let lease_repo = Arc::new(LeaseRepository::new(db_pool.clone()));
    let payment_repo = Arc::new(PaymentRepository::new(db_pool.clone()));
    let maintenance_repo = Arc::new(MaintenanceRepository::new(db_pool.clone()));
    let review_repo = Arc::new(ReviewRepository::new(db_pool.clone()));
    let favorite_repo = Arc::new(FavoriteRepository::new(db_pool.clone()));
    let stats_repo = Arc::new(StatsRepository::new(db_pool.clone()));

    // ── Auth components ──────────────────────────────────────────
    let password_hasher = Arc::new(PasswordHasher::new());
    let password_validator = Arc::new(PasswordValidator::new(&config.auth));
    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
    let identity_resolver = Arc::new(IdentityResolver::new(
        Arc::clone(&jwt_decoder),
        Arc::clone(&user_repo),
    ));
    let policy = Arc::new(AccessPolicy::new());

    // ── Storage ──────────────────────────────────────────────────
    let photo_store = Arc::new(PhotoStore::new(&config.storage).await?);

    // ── Services ─────────────────────────────────────────────────
    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&password_validator),
        Arc::clone(&jwt_encoder),
    ));
    let company_service = Arc::new(CompanyService::new(
        Arc::clone(&company_repo),
        Arc::clone(&policy),
    ));
    let building_service = Arc::new(BuildingService::new(
        Arc::clone(&building_repo),
        Arc::clone(&policy),
    ));
    let category_service = Arc::new(CategoryService::new(
        Arc::clone(&category_repo),
        Arc::clone(&policy),
    ));
    let room_service = Arc::new(RoomService::new(
        Arc::clone(&room_repo),
        Arc::clone(&photo_repo),
        Arc::clone(&photo_store),
        Arc::clone(&policy),
    ));
    let lease_service = Arc::new(LeaseService::new(
        Arc::clone(&lease_repo),
        Arc::clone(&room_repo),
        Arc::clone(&payment_repo),
        Arc::clone(&policy),
    ));
    let maintenance_service = Arc::new(MaintenanceService::new(
        Arc::clone(&maintenance_repo),
        Arc::clone(&room_repo),
        Arc::clone(&policy),
    ));
    let review_service = Arc::new(ReviewService::new(
        Arc::clone(&review_repo),
        Arc::clone(&room_repo),
        Arc::clone(&policy),
    ));
    let favorite_service = Arc::new(FavoriteService::new(
        Arc::clone(&favorite_repo),
        Arc::clone(&room_repo),
        Arc::clone(&policy),
    ));
    let stats_service = Arc::new(StatsService::new(Arc::clone(&stats_repo)));

    let state = AppState {
        config,
        db_pool,
        identity_resolver,
        auth_service,
        company_service,
        building_service,
        category_service,
        room_service,
        lease_service,
        maintenance_service,
        review_service,
        favorite_service,
        stats_service,
    };

    Ok(build_router(state))
}

/// Runs the RentHub server with the given configuration and database pool.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let app = build_app(config, db_pool).await?;

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!(addr = %addr, "RentHub server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))
}

/// Resolves when the process receives Ctrl-C / SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
