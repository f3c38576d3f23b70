//! Role gates deciding which console affordances a viewer gets.
//!
//! All predicates take the viewer role explicitly and fail closed: `None`
//! (signed out, or a role token this build does not recognize) grants
//! nothing. Rendering decisions go through these gates; nothing else in the
//! crate inspects roles directly.

use crate::models::role::Role;

/// Manager-level access: managers and superusers.
pub fn is_manager(viewer: Option<Role>) -> bool {
    matches!(viewer, Some(Role::Manager | Role::Superuser))
}

/// Superuser-only access.
pub fn is_superuser(viewer: Option<Role>) -> bool {
    matches!(viewer, Some(Role::Superuser))
}

/// Whether the viewer may open the user edit flow.
pub fn can_edit_user(viewer: Option<Role>) -> bool {
    is_manager(viewer)
}

/// Roles the viewer may assign to another user.
///
/// Only superusers may hand out `manager` or `superuser`; managers are
/// limited to the cashier tier and below.
pub fn assignable_roles(viewer: Option<Role>) -> &'static [Role] {
    match viewer {
        Some(Role::Superuser) => &Role::ALL,
        Some(Role::Manager) => &[Role::Regular, Role::Cashier],
        _ => &[],
    }
}

/// Whether the viewer may flip the suspicious flag on the target user.
///
/// The flag only exists for cashiers, so the gate also checks the target.
pub fn can_toggle_suspicious(viewer: Option<Role>, target: Option<Role>) -> bool {
    is_manager(viewer) && target == Some(Role::Cashier)
}

/// Whether the viewer may create promotions.
pub fn can_create_promotion(viewer: Option<Role>) -> bool {
    is_manager(viewer)
}

/// Whether the viewer may publish events.
pub fn can_publish_event(viewer: Option<Role>) -> bool {
    is_manager(viewer)
}

/// Whether unpublished events (and the published filter) are visible.
pub fn can_see_unpublished(viewer: Option<Role>) -> bool {
    is_manager(viewer)
}
