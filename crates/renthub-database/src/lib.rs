//! # renthub-database
//!
//! PostgreSQL connection management and concrete repository
//! implementations for all RentHub entities. The lease lifecycle
//! transactions (room occupancy flips) live in the lease repository.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
