//! Company repository implementation.

use sqlx::PgPool;

use renthub_core::error::{AppError, ErrorKind};
use renthub_core::result::AppResult;
use renthub_core::types::pagination::ListQuery;
use renthub_entity::company::{Company, CreateCompany, UpdateCompany};

/// Repository for company CRUD operations.
#[derive(Debug, Clone)]
pub struct CompanyRepository {
    pool: PgPool,
}

impl CompanyRepository {
    /// Create a new company repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a company by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Company>> {
        sqlx::query_as::<_, Company>("SELECT * FROM companies WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find company", e))
    }

    /// List companies.
    pub async fn find_all(&self, query: &ListQuery) -> AppResult<Vec<Company>> {
        sqlx::query_as::<_, Company>("SELECT * FROM companies ORDER BY id LIMIT $1 OFFSET $2")
            .bind(query.limit())
            .bind(query.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list companies", e))
    }

    /// Create a new company.
    pub async fn create(&self, data: &CreateCompany) -> AppResult<Company> {
        sqlx::query_as::<_, Company>(
            "INSERT INTO companies (name, tax_id, address, contact_person, phone, email, description) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.tax_id)
        .bind(&data.address)
        .bind(&data.contact_person)
        .bind(&data.phone)
        .bind(&data.email)
        .bind(&data.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create company", e))
    }

    /// Apply a partial update; unset fields keep their current value.
    pub async fn update(&self, id: i64, data: &UpdateCompany) -> AppResult<Company> {
        sqlx::query_as::<_, Company>(
            "UPDATE companies SET \
                name = COALESCE($2, name), \
                tax_id = COALESCE($3, tax_id), \
                address = COALESCE($4, address), \
                contact_person = COALESCE($5, contact_person), \
                phone = COALESCE($6, phone), \
                email = COALESCE($7, email), \
                description = COALESCE($8, description) \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.tax_id)
        .bind(&data.address)
        .bind(&data.contact_person)
        .bind(&data.phone)
        .bind(&data.email)
        .bind(&data.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update company", e))
    }

    /// Delete a company row. Returns whether a row was removed.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM companies WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete company", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
