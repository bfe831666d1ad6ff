//! The access-control decision function.

use renthub_core::error::AppError;
use renthub_entity::user::UserRole;

use super::action::Action;

/// Pure access-control decision function.
///
/// Given the caller's role and id, the attempted [`Action`], and the
/// owner of the target resource (where one exists), decides allow/deny.
/// Holds no state and performs no I/O; ownership is an exact match on
/// the designated owner field of the resource (`Lease.tenant_id`,
/// `MaintenanceRequest.tenant_id`, `Review.user_id`, `Favorite.user_id`).
#[derive(Debug, Clone, Default)]
pub struct AccessPolicy;

impl AccessPolicy {
    /// Creates the policy.
    pub fn new() -> Self {
        Self
    }

    /// Decides whether the caller may perform the action.
    ///
    /// `owner_id` is the owner of the resource being acted on, for
    /// actions that target an existing owned resource; `None` for
    /// creations and for resources without an owner.
    pub fn allow(
        &self,
        role: UserRole,
        action: Action,
        caller_id: i64,
        owner_id: Option<i64>,
    ) -> bool {
        // Admins may do everything, unconditionally.
        if role.is_admin() {
            return true;
        }

        // Landlords get the explicit building-management carve-out and
        // otherwise fall through to user-level rules.
        if role.is_landlord()
            && matches!(
                action,
                Action::BuildingCreate | Action::BuildingUpdate | Action::BuildingDelete
            )
        {
            return true;
        }

        match action {
            // Any authenticated caller may create these for themselves.
            Action::LeaseCreate
            | Action::MaintenanceCreate
            | Action::ReviewCreate
            | Action::FavoriteCreate => true,

            // Owned-resource access: exact match on the owner field.
            // Payment creation is keyed on the owning lease's tenant.
            Action::LeaseRead
            | Action::LeaseDelete
            | Action::PaymentRead
            | Action::PaymentCreate
            | Action::MaintenanceRead
            | Action::MaintenanceDelete
            | Action::ReviewDelete
            | Action::FavoriteDelete => owner_id == Some(caller_id),

            // Everything else is reserved for admins (or the landlord
            // carve-out handled above).
            Action::CompanyCreate
            | Action::CompanyUpdate
            | Action::CompanyDelete
            | Action::BuildingCreate
            | Action::BuildingUpdate
            | Action::BuildingDelete
            | Action::RoomCreate
            | Action::RoomUpdate
            | Action::RoomDelete
            | Action::RoomPhotoUpload
            | Action::RoomPhotoDelete
            | Action::CategoryCreate
            | Action::LeaseUpdate
            | Action::MaintenanceUpdate => false,
        }
    }

    /// Checks the action, returning a permission error on denial.
    ///
    /// The error kind is `Authorization` (403), always distinguishable
    /// from a missing resource (404).
    pub fn require(
        &self,
        role: UserRole,
        action: Action,
        caller_id: i64,
        owner_id: Option<i64>,
    ) -> Result<(), AppError> {
        if self.allow(role, action, caller_id, owner_id) {
            Ok(())
        } else {
            Err(AppError::authorization("Not enough permissions"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CALLER: i64 = 7;
    const OTHER: i64 = 8;

    fn policy() -> AccessPolicy {
        AccessPolicy::new()
    }

    #[test]
    fn test_admin_allowed_everything() {
        let p = policy();
        for action in [
            Action::CompanyCreate,
            Action::RoomDelete,
            Action::LeaseUpdate,
            Action::MaintenanceUpdate,
            Action::ReviewDelete,
            Action::FavoriteDelete,
        ] {
            assert!(p.allow(UserRole::Admin, action, CALLER, Some(OTHER)));
            assert!(p.allow(UserRole::Admin, action, CALLER, None));
        }
    }

    #[test]
    fn test_landlord_building_carve_out() {
        let p = policy();
        assert!(p.allow(UserRole::Landlord, Action::BuildingCreate, CALLER, None));
        assert!(p.allow(UserRole::Landlord, Action::BuildingUpdate, CALLER, None));
        assert!(p.allow(UserRole::Landlord, Action::BuildingDelete, CALLER, None));

        // No other admin-only operation leaks through.
        assert!(!p.allow(UserRole::Landlord, Action::CompanyCreate, CALLER, None));
        assert!(!p.allow(UserRole::Landlord, Action::RoomCreate, CALLER, None));
        assert!(!p.allow(UserRole::Landlord, Action::RoomPhotoUpload, CALLER, None));
        assert!(!p.allow(UserRole::Landlord, Action::CategoryCreate, CALLER, None));
        assert!(!p.allow(UserRole::Landlord, Action::LeaseUpdate, CALLER, Some(OTHER)));
    }

    #[test]
    fn test_landlord_keeps_user_level_access() {
        let p = policy();
        assert!(p.allow(UserRole::Landlord, Action::LeaseRead, CALLER, Some(CALLER)));
        assert!(!p.allow(UserRole::Landlord, Action::LeaseRead, CALLER, Some(OTHER)));
        assert!(p.allow(UserRole::Landlord, Action::FavoriteCreate, CALLER, None));
    }

    #[test]
    fn test_user_creates_own_resources() {
        let p = policy();
        for action in [
            Action::LeaseCreate,
            Action::MaintenanceCreate,
            Action::ReviewCreate,
            Action::FavoriteCreate,
        ] {
            assert!(p.allow(UserRole::User, action, CALLER, None));
        }
    }

    #[test]
    fn test_user_ownership_exact_match() {
        let p = policy();
        for action in [
            Action::LeaseRead,
            Action::LeaseDelete,
            Action::PaymentRead,
            Action::PaymentCreate,
            Action::MaintenanceRead,
            Action::MaintenanceDelete,
            Action::ReviewDelete,
            Action::FavoriteDelete,
        ] {
            assert!(p.allow(UserRole::User, action, CALLER, Some(CALLER)));
            assert!(!p.allow(UserRole::User, action, CALLER, Some(OTHER)));
            assert!(!p.allow(UserRole::User, action, CALLER, None));
        }
    }

    #[test]
    fn test_user_denied_management_operations() {
        let p = policy();
        for action in [
            Action::CompanyCreate,
            Action::CompanyUpdate,
            Action::CompanyDelete,
            Action::BuildingCreate,
            Action::BuildingUpdate,
            Action::BuildingDelete,
            Action::RoomCreate,
            Action::RoomUpdate,
            Action::RoomDelete,
            Action::RoomPhotoUpload,
            Action::RoomPhotoDelete,
            Action::CategoryCreate,
        ] {
            assert!(!p.allow(UserRole::User, action, CALLER, None));
            assert!(!p.allow(UserRole::User, action, CALLER, Some(CALLER)));
        }
    }

    #[test]
    fn test_status_updates_are_admin_only() {
        let p = policy();
        // Even the owner may not update lease or maintenance status.
        assert!(!p.allow(UserRole::User, Action::LeaseUpdate, CALLER, Some(CALLER)));
        assert!(!p.allow(UserRole::User, Action::MaintenanceUpdate, CALLER, Some(CALLER)));
    }

    #[test]
    fn test_require_maps_denial_to_authorization() {
        let p = policy();
        let err = p
            .require(UserRole::User, Action::RoomCreate, CALLER, None)
            .unwrap_err();
        assert_eq!(err.kind, renthub_core::error::ErrorKind::Authorization);

        assert!(p.require(UserRole::Admin, Action::RoomCreate, CALLER, None).is_ok());
    }
}
