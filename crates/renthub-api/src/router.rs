//! Route definitions for the RentHub HTTP API.
//!
//! All resource routes are organized by path prefix and mounted under
//! `/api`. The router receives `AppState` and passes it to all handlers
//! via Axum's `State` extractor. Uploaded photos are served statically
//! under the configured public prefix.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_upload = state.config.storage.max_upload_size_bytes as usize;

    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(room_routes())
        .merge(company_routes())
        .merge(building_routes())
        .merge(category_routes())
        .merge(lease_routes())
        .merge(maintenance_routes())
        .merge(review_routes())
        .merge(favorite_routes())
        .merge(stats_routes());

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);
    let uploads = ServeDir::new(&state.config.storage.upload_dir);
    let public_prefix = state.config.storage.public_prefix.clone();

    Router::new()
        .nest("/api", api_routes)
        .route("/health", get(handlers::health::health_check))
        .nest_service(&public_prefix, uploads)
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints: register, login, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/me", get(handlers::auth::me))
}

/// Room CRUD, reviews-by-room, and photo management
fn room_routes() -> Router<AppState> {
    Router::new()
        .route("/rooms", get(handlers::room::list_rooms))
        .route("/rooms", post(handlers::room::create_room))
        .route("/rooms/{id}", get(handlers::room::get_room))
        .route("/rooms/{id}", put(handlers::room::update_room))
        .route("/rooms/{id}", delete(handlers::room::delete_room))
        .route("/rooms/{id}/reviews", get(handlers::room::list_room_reviews))
        .route("/rooms/{id}/photos", post(handlers::room::upload_room_photo))
        .route(
            "/rooms/photos/{photo_id}",
            delete(handlers::room::delete_room_photo),
        )
}

/// Company CRUD
fn company_routes() -> Router<AppState> {
    Router::new()
        .route("/companies", get(handlers::company::list_companies))
        .route("/companies", post(handlers::company::create_company))
        .route("/companies/{id}", get(handlers::company::get_company))
        .route("/companies/{id}", put(handlers::company::update_company))
        .route("/companies/{id}", delete(handlers::company::delete_company))
}

/// Building CRUD
fn building_routes() -> Router<AppState> {
    Router::new()
        .route("/buildings", get(handlers::building::list_buildings))
        .route("/buildings", post(handlers::building::create_building))
        .route("/buildings/{id}", get(handlers::building::get_building))
        .route("/buildings/{id}", put(handlers::building::update_building))
        .route("/buildings/{id}", delete(handlers::building::delete_building))
}

/// Room category endpoints
fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(handlers::category::list_categories))
        .route("/categories", post(handlers::category::create_category))
}

/// Lease CRUD and the nested payment ledger
fn lease_routes() -> Router<AppState> {
    Router::new()
        .route("/leases", get(handlers::lease::list_leases))
        .route("/leases", post(handlers::lease::create_lease))
        .route("/leases/{id}", get(handlers::lease::get_lease))
        .route("/leases/{id}", put(handlers::lease::update_lease))
        .route("/leases/{id}", delete(handlers::lease::delete_lease))
        .route("/leases/{id}/payments", get(handlers::lease::list_payments))
        .route("/leases/{id}/payments", post(handlers::lease::create_payment))
}

/// Maintenance request CRUD
fn maintenance_routes() -> Router<AppState> {
    Router::new()
        .route("/maintenance", get(handlers::maintenance::list_requests))
        .route("/maintenance", post(handlers::maintenance::create_request))
        .route("/maintenance/{id}", get(handlers::maintenance::get_request))
        .route("/maintenance/{id}", put(handlers::maintenance::update_request))
        .route(
            "/maintenance/{id}",
            delete(handlers::maintenance::delete_request),
        )
}

/// Review endpoints
fn review_routes() -> Router<AppState> {
    Router::new()
        .route("/reviews", post(handlers::review::create_review))
        .route("/reviews/{id}", delete(handlers::review::delete_review))
}

/// Favorite endpoints
fn favorite_routes() -> Router<AppState> {
    Router::new()
        .route("/favorites", get(handlers::favorite::list_favorites))
        .route("/favorites", post(handlers::favorite::add_favorite))
        .route("/favorites/{id}", delete(handlers::favorite::remove_favorite))
}

/// Statistics endpoint
fn stats_routes() -> Router<AppState> {
    Router::new().route("/stats", get(handlers::stats::get_stats))
}
