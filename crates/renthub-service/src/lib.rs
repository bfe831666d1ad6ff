//! # renthub-service
//!
//! Business logic services for RentHub. Each service owns the operations
//! of one resource family, consulting the access policy before every
//! mutation or restricted read and delegating persistence to the
//! repositories.

pub mod auth;
pub mod building;
pub mod category;
pub mod company;
pub mod context;
pub mod favorite;
pub mod lease;
pub mod maintenance;
pub mod review;
pub mod room;
pub mod stats;

pub use context::RequestContext;
