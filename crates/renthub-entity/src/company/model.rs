//! Company entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A company that owns one or more buildings.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Company {
    /// Unique company identifier.
    pub id: i64,
    /// Legal company name.
    pub name: String,
    /// Tax identification number (unique).
    pub tax_id: Option<String>,
    /// Registered address.
    pub address: Option<String>,
    /// Primary contact person.
    pub contact_person: Option<String>,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Contact email.
    pub email: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
}

/// Data required to create a company.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCompany {
    pub name: String,
    pub tax_id: Option<String>,
    pub address: Option<String>,
    pub contact_person: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub description: Option<String>,
}

/// Partial update for a company; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCompany {
    pub name: Option<String>,
    pub tax_id: Option<String>,
    pub address: Option<String>,
    pub contact_person: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub description: Option<String>,
}
