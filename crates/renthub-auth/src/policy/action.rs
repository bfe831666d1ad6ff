//! Gated operations, one variant per permission-checked endpoint action.

use serde::{Deserialize, Serialize};

/// An operation subject to the access policy.
///
/// Read operations that are fully public (room/company/building listings,
/// reviews by room, categories, stats) never reach the policy and have no
/// variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // Company management
    CompanyCreate,
    CompanyUpdate,
    CompanyDelete,

    // Building management
    BuildingCreate,
    BuildingUpdate,
    BuildingDelete,

    // Room management
    RoomCreate,
    RoomUpdate,
    RoomDelete,
    RoomPhotoUpload,
    RoomPhotoDelete,

    // Category management
    CategoryCreate,

    // Lease lifecycle
    LeaseCreate,
    LeaseRead,
    LeaseUpdate,
    LeaseDelete,

    // Payment ledger
    PaymentRead,
    PaymentCreate,

    // Maintenance requests
    MaintenanceCreate,
    MaintenanceRead,
    MaintenanceUpdate,
    MaintenanceDelete,

    // Reviews
    ReviewCreate,
    ReviewDelete,

    // Favorites
    FavoriteCreate,
    FavoriteDelete,
}
