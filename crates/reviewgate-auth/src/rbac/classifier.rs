//! Pure role classification: `(Session, RoleRequirement) -> GuardDecision`.

use reviewgate_entity::session::Session;
use reviewgate_entity::user::{ADMIN_GROUP, User};

use super::requirement::RoleRequirement;
use crate::guard::decision::GuardDecision;

/// Decide what a protected region should show for the given session.
///
/// An absent session always redirects to login, whatever the requirement.
/// Admin and moderator are independent facts; neither implies the other.
/// Missing role data on the user counts as "requirement not met".
pub fn classify(session: &Session, requirement: RoleRequirement) -> GuardDecision {
    let Some(user) = session.user() else {
        return GuardDecision::RedirectToLogin;
    };

    let satisfied = match requirement {
        RoleRequirement::None => true,
        RoleRequirement::RequireAdmin => is_admin(user),
        RoleRequirement::RequireModerator => is_moderator(user),
    };

    if satisfied {
        GuardDecision::Allow
    } else {
        GuardDecision::ShowNotFound
    }
}

/// Whether the user is a member of the `admin` group (exact match).
pub fn is_admin(user: &User) -> bool {
    user.is_member_of(ADMIN_GROUP)
}

/// Whether the user's moderator flag is set.
pub fn is_moderator(user: &User) -> bool {
    user.moderator_flag()
}
