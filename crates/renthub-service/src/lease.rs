//! Lease lifecycle service and the payment ledger hanging off it.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use renthub_auth::policy::{AccessPolicy, Action};
use renthub_core::error::AppError;
use renthub_core::types::pagination::ListQuery;
use renthub_database::repositories::lease::LeaseRepository;
use renthub_database::repositories::payment::PaymentRepository;
use renthub_database::repositories::room::RoomRepository;
use renthub_entity::lease::model::{CreateLease, UpdateLease};
use renthub_entity::lease::payment::{CreatePayment, Payment, PaymentStatus};
use renthub_entity::lease::Lease;

use crate::context::RequestContext;

/// Data for a lease creation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLeaseRequest {
    /// Room to lease.
    pub room_id: i64,
    /// Tenant to bind; non-admin callers always lease for themselves.
    pub tenant_id: Option<i64>,
    /// Lease start date.
    pub start_date: DateTime<Utc>,
    /// Lease end date.
    pub end_date: DateTime<Utc>,
    /// Monthly rent amount.
    pub monthly_rent: f64,
    /// Security deposit.
    pub deposit: Option<f64>,
}

/// Data for a payment creation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePaymentRequest {
    /// Payment amount.
    pub amount: f64,
    /// Payment method (free text).
    pub payment_method: Option<String>,
    /// Settlement status; defaults to `completed`.
    pub status: Option<PaymentStatus>,
}

/// Manages lease lifecycle and payments.
///
/// Creation and deletion drive the room occupancy state machine through
/// the repository's transactions: a lease insert and the room flip to
/// `occupied` commit together, as do lease removal and the flip back to
/// `available`.
#[derive(Debug, Clone)]
pub struct LeaseService {
    /// Lease repository.
    lease_repo: Arc<LeaseRepository>,
    /// Room repository.
    room_repo: Arc<RoomRepository>,
    /// Payment repository.
    payment_repo: Arc<PaymentRepository>,
    /// Access policy.
    policy: Arc<AccessPolicy>,
}

impl LeaseService {
    /// Creates a new lease service.
    pub fn new(
        lease_repo: Arc<LeaseRepository>,
        room_repo: Arc<RoomRepository>,
        payment_repo: Arc<PaymentRepository>,
        policy: Arc<AccessPolicy>,
    ) -> Self {
        Self {
            lease_repo,
            room_repo,
            payment_repo,
            policy,
        }
    }

    /// Lists leases: admins see all, everyone else only their own.
    pub async fn list(&self, ctx: &RequestContext, query: &ListQuery) -> Result<Vec<Lease>, AppError> {
        if ctx.is_admin() {
            self.lease_repo.find_all(query).await
        } else {
            self.lease_repo.find_by_tenant(ctx.user_id, query).await
        }
    }

    /// Gets a lease, subject to the ownership check.
    pub async fn get(&self, ctx: &RequestContext, id: i64) -> Result<Lease, AppError> {
        let lease = self.require_lease(id).await?;
        self.policy
            .require(ctx.role, Action::LeaseRead, ctx.user_id, Some(lease.tenant_id))?;
        Ok(lease)
    }

    /// Creates a lease against an available room.
    ///
    /// The room must exist (`NotFound` otherwise) and be `available`; the
    /// insert and the room status flip are one atomic unit. Only admins
    /// may name a tenant other than themselves.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        req: CreateLeaseRequest,
    ) -> Result<Lease, AppError> {
        self.policy
            .require(ctx.role, Action::LeaseCreate, ctx.user_id, None)?;

        let tenant_id = if ctx.is_admin() {
            req.tenant_id.unwrap_or(ctx.user_id)
        } else {
            ctx.user_id
        };

        if req.end_date <= req.start_date {
            return Err(AppError::validation("Lease end date must be after start date"));
        }

        // Resolve the room up front so a missing room reports as 404,
        // distinct from the unavailable-room conflict.
        self.room_repo
            .find_by_id(req.room_id)
            .await?
            .ok_or_else(|| AppError::not_found("Room not found"))?;

        self.lease_repo
            .create_occupying_room(&CreateLease {
                room_id: req.room_id,
                tenant_id,
                start_date: req.start_date,
                end_date: req.end_date,
                monthly_rent: req.monthly_rent,
                deposit: req.deposit,
            })
            .await
    }

    /// Updates lease fields (admin only).
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: i64,
        data: UpdateLease,
    ) -> Result<Lease, AppError> {
        let lease = self.require_lease(id).await?;
        self.policy
            .require(ctx.role, Action::LeaseUpdate, ctx.user_id, Some(lease.tenant_id))?;

        self.lease_repo.update(id, &data).await
    }

    /// Deletes (terminates) a lease, releasing its room.
    pub async fn delete(&self, ctx: &RequestContext, id: i64) -> Result<(), AppError> {
        let lease = self.require_lease(id).await?;
        self.policy
            .require(ctx.role, Action::LeaseDelete, ctx.user_id, Some(lease.tenant_id))?;

        self.lease_repo.delete_releasing_room(&lease).await?;

        info!(lease_id = id, user_id = ctx.user_id, "Lease terminated");

        Ok(())
    }

    /// Lists the payment ledger of a lease, subject to ownership.
    pub async fn payments(&self, ctx: &RequestContext, lease_id: i64) -> Result<Vec<Payment>, AppError> {
        let lease = self.require_lease(lease_id).await?;
        self.policy
            .require(ctx.role, Action::PaymentRead, ctx.user_id, Some(lease.tenant_id))?;

        self.payment_repo.find_by_lease(lease_id).await
    }

    /// Appends a payment to a lease's ledger, subject to ownership.
    pub async fn add_payment(
        &self,
        ctx: &RequestContext,
        lease_id: i64,
        req: CreatePaymentRequest,
    ) -> Result<Payment, AppError> {
        let lease = self.require_lease(lease_id).await?;
        self.policy
            .require(ctx.role, Action::PaymentCreate, ctx.user_id, Some(lease.tenant_id))?;

        if req.amount <= 0.0 {
            return Err(AppError::validation("Payment amount must be positive"));
        }

        self.payment_repo
            .create(&CreatePayment {
                lease_id,
                amount: req.amount,
                payment_method: req.payment_method,
                status: req.status,
            })
            .await
    }

    async fn require_lease(&self, id: i64) -> Result<Lease, AppError> {
        self.lease_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Lease not found"))
    }
}
