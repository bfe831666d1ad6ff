//! Building entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A building belonging to a company, containing rentable rooms.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Building {
    /// Unique building identifier.
    pub id: i64,
    /// Owning company.
    pub company_id: Option<i64>,
    /// Building name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// Construction year.
    pub year_built: Option<i32>,
    /// Total floor area in square meters.
    pub total_area: Option<f64>,
    /// Free-form description.
    pub description: Option<String>,
}

/// Data required to create a building.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBuilding {
    pub company_id: Option<i64>,
    pub name: String,
    pub address: String,
    pub year_built: Option<i32>,
    pub total_area: Option<f64>,
    pub description: Option<String>,
}

/// Partial update for a building; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateBuilding {
    pub company_id: Option<i64>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub year_built: Option<i32>,
    pub total_area: Option<f64>,
    pub description: Option<String>,
}
