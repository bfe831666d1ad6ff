//! Lease and payment domain entities.

pub mod model;
pub mod payment;
pub mod status;

pub use model::{CreateLease, Lease, UpdateLease};
pub use payment::{CreatePayment, Payment, PaymentStatus};
pub use status::LeaseStatus;
