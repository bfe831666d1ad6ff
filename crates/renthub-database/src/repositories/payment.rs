//! Payment repository implementation. The ledger is append-only: rows are
//! inserted and read, never updated or removed.

use sqlx::PgPool;

use renthub_core::error::{AppError, ErrorKind};
use renthub_core::result::AppResult;
use renthub_entity::lease::payment::{CreatePayment, Payment, PaymentStatus};

/// Repository for the payment ledger.
#[derive(Debug, Clone)]
pub struct PaymentRepository {
    pool: PgPool,
}

impl PaymentRepository {
    /// Create a new payment repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all payments recorded against a lease.
    pub async fn find_by_lease(&self, lease_id: i64) -> AppResult<Vec<Payment>> {
        sqlx::query_as::<_, Payment>(
            "SELECT * FROM payments WHERE lease_id = $1 ORDER BY payment_date",
        )
        .bind(lease_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list payments", e))
    }

    /// Append a payment to the ledger.
    pub async fn create(&self, data: &CreatePayment) -> AppResult<Payment> {
        sqlx::query_as::<_, Payment>(
            "INSERT INTO payments (lease_id, amount, payment_method, status) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(data.lease_id)
        .bind(data.amount)
        .bind(&data.payment_method)
        .bind(data.status.unwrap_or(PaymentStatus::Completed))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create payment", e))
    }
}
