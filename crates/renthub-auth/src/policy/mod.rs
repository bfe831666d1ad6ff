//! Centralized access-control policy.
//!
//! Every resource service consults [`AccessPolicy`] before mutating or
//! returning restricted data; no permission logic exists anywhere else.

pub mod action;
pub mod enforcer;

pub use action::Action;
pub use enforcer::AccessPolicy;
