//! Maps domain `AppError` to HTTP responses.
//!
//! The `IntoResponse for AppError` mapping and `ApiErrorResponse` body live
//! in `renthub-core` (which carries the axum dependency) because `AppError`
//! is defined there; the orphan rule forbids implementing the foreign
//! `IntoResponse` trait for the foreign `AppError` type in this crate. This
//! module re-exports the response body for callers that expect it here.

pub use renthub_core::error::ApiErrorResponse;
