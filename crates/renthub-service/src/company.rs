//! Company CRUD service.

use std::sync::Arc;

use tracing::info;

use renthub_auth::policy::{AccessPolicy, Action};
use renthub_core::error::AppError;
use renthub_core::types::pagination::ListQuery;
use renthub_database::repositories::company::CompanyRepository;
use renthub_entity::company::{Company, CreateCompany, UpdateCompany};

use crate::context::RequestContext;

/// Manages companies. Reads are public; mutations are admin-only.
#[derive(Debug, Clone)]
pub struct CompanyService {
    /// Company repository.
    company_repo: Arc<CompanyRepository>,
    /// Access policy.
    policy: Arc<AccessPolicy>,
}

impl CompanyService {
    /// Creates a new company service.
    pub fn new(company_repo: Arc<CompanyRepository>, policy: Arc<AccessPolicy>) -> Self {
        Self {
            company_repo,
            policy,
        }
    }

    /// Lists companies.
    pub async fn list(&self, query: &ListQuery) -> Result<Vec<Company>, AppError> {
        self.company_repo.find_all(query).await
    }

    /// Gets a company by id.
    pub async fn get(&self, id: i64) -> Result<Company, AppError> {
        self.company_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Company not found"))
    }

    /// Creates a company.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        data: CreateCompany,
    ) -> Result<Company, AppError> {
        self.policy
            .require(ctx.role, Action::CompanyCreate, ctx.user_id, None)?;

        let company = self.company_repo.create(&data).await?;
        info!(company_id = company.id, user_id = ctx.user_id, "Company created");
        Ok(company)
    }

    /// Updates a company.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: i64,
        data: UpdateCompany,
    ) -> Result<Company, AppError> {
        self.policy
            .require(ctx.role, Action::CompanyUpdate, ctx.user_id, None)?;

        self.get(id).await?;
        self.company_repo.update(id, &data).await
    }

    /// Deletes a company.
    pub async fn delete(&self, ctx: &RequestContext, id: i64) -> Result<(), AppError> {
        self.policy
            .require(ctx.role, Action::CompanyDelete, ctx.user_id, None)?;

        if !self.company_repo.delete(id).await? {
            return Err(AppError::not_found("Company not found"));
        }
        info!(company_id = id, user_id = ctx.user_id, "Company deleted");
        Ok(())
    }
}
