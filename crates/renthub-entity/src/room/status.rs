//! Room occupancy status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Occupancy status of a room.
///
/// This is a state machine driven by the lease lifecycle, not a free-form
/// field: lease creation moves `Available` → `Occupied`, and lease
/// termination moves it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "room_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    /// Room can be leased.
    Available,
    /// Room is held by an active lease.
    Occupied,
    /// Room is under maintenance and cannot be leased.
    Maintenance,
}

impl RoomStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Occupied => "occupied",
            Self::Maintenance => "maintenance",
        }
    }
}

impl Default for RoomStatus {
    fn default() -> Self {
        Self::Available
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RoomStatus {
    type Err = renthub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "available" => Ok(Self::Available),
            "occupied" => Ok(Self::Occupied),
            "maintenance" => Ok(Self::Maintenance),
            _ => Err(renthub_core::AppError::validation(format!(
                "Invalid room status: '{s}'. Expected one of: available, occupied, maintenance"
            ))),
        }
    }
}
