use crate::domain::models::user::{Role, UserProfile};

/// Actions the UI may offer. Computed once per role instead of re-deriving
/// scattered role booleans at every call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    CreateReservation,
    ModifyOwnReservation,
    CreateTicket,
    RegisterWalkIn,
    RegisterPayment,
    ViewAllReservations,
    ManageShifts,
}

pub fn capabilities_for(role: Role) -> &'static [Capability] {
    use Capability::*;
    match role {
        Role::Admin => &[
            CreateReservation,
            ModifyOwnReservation,
            CreateTicket,
            RegisterWalkIn,
            RegisterPayment,
            ViewAllReservations,
            ManageShifts,
        ],
        Role::Staff => &[
            CreateReservation,
            CreateTicket,
            RegisterWalkIn,
            ViewAllReservations,
            ManageShifts,
        ],
        Role::Customer => &[
            CreateReservation,
            ModifyOwnReservation,
            CreateTicket,
            RegisterPayment,
        ],
    }
}

pub fn has_capability(user: &UserProfile, capability: Capability) -> bool {
    capabilities_for(user.role).contains(&capability)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role) -> UserProfile {
        UserProfile {
            id: "u".into(),
            name: "U".into(),
            email: None,
            document: None,
            role,
        }
    }

    #[test]
    fn walk_in_registration_is_staff_and_admin_only() {
        assert!(has_capability(&user(Role::Admin), Capability::RegisterWalkIn));
        assert!(has_capability(&user(Role::Staff), Capability::RegisterWalkIn));
        assert!(!has_capability(&user(Role::Customer), Capability::RegisterWalkIn));
    }

    #[test]
    fn shift_management_is_staff_and_admin_only() {
        assert!(has_capability(&user(Role::Admin), Capability::ManageShifts));
        assert!(has_capability(&user(Role::Staff), Capability::ManageShifts));
        assert!(!has_capability(&user(Role::Customer), Capability::ManageShifts));
    }

    #[test]
    fn customers_book_and_pay() {
        let customer = user(Role::Customer);
        assert!(has_capability(&customer, Capability::CreateReservation));
        assert!(has_capability(&customer, Capability::RegisterPayment));
        assert!(!has_capability(&customer, Capability::ViewAllReservations));
    }
}
