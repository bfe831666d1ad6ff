//! # renthub-core
//!
//! Core crate for RentHub. Contains configuration schemas, shared types,
//! and the unified error system.
//!
//! This crate has **no** internal dependencies on other RentHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
