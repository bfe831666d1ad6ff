//! # renthub-api
//!
//! HTTP API layer for RentHub built on Axum: application state,
//! extractors, DTOs, handlers, routing, middleware, and the mapping from
//! domain errors to HTTP responses.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
