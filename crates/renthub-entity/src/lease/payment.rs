//! Payment ledger entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

/// Settlement status of a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "payment_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// Payment initiated but not settled.
    Pending,
    /// Payment settled.
    Completed,
    /// Payment failed.
    Failed,
}

impl PaymentStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An append-only payment ledger entry against a lease.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Payment {
    /// Unique payment identifier.
    pub id: i64,
    /// Lease this payment settles.
    pub lease_id: i64,
    /// When the payment was made.
    pub payment_date: DateTime<Utc>,
    /// Payment amount.
    pub amount: f64,
    /// Payment method (free text).
    pub payment_method: Option<String>,
    /// Settlement status.
    pub status: PaymentStatus,
}

/// Data required to record a payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePayment {
    pub lease_id: i64,
    pub amount: f64,
    pub payment_method: Option<String>,
    /// Settlement status; defaults to `completed`.
    pub status: Option<PaymentStatus>,
}
