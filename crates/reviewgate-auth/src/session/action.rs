//! Scripted session mutations, used for replaying sign-in histories.

use serde::{Deserialize, Serialize};

use reviewgate_entity::user::User;

use super::store::SessionStore;

/// One mutation of the session store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum SessionAction {
    /// Sign the given user in.
    SignIn {
        /// The user record.
        user: User,
    },
    /// Sign the current user out.
    SignOut,
    /// Expire the current session.
    Expire,
    /// Add a group to the signed-in user.
    GrantGroup {
        /// Group name.
        group: String,
    },
    /// Remove a group from the signed-in user.
    RevokeGroup {
        /// Group name.
        group: String,
    },
    /// Set the signed-in user's moderator flag.
    SetModerator {
        /// New flag value.
        moderator: bool,
    },
}

impl SessionAction {
    /// Apply the action. Returns whether the store published a change.
    pub fn apply(&self, store: &mut SessionStore) -> bool {
        match self {
            Self::SignIn { user } => {
                store.sign_in(user.clone());
                true
            }
            Self::SignOut => store.sign_out(),
            Self::Expire => store.expire(),
            Self::GrantGroup { group } => store.update_user(|user| user.grant_group(group.as_str())),
            Self::RevokeGroup { group } => store.update_user(|user| user.revoke_group(group)),
            Self::SetModerator { moderator } => {
                store.update_user(|user| user.moderator = Some(*moderator))
            }
        }
    }

    /// Short label for output.
    pub fn label(&self) -> String {
        match self {
            Self::SignIn { user } => format!("sign_in {}", user.id),
            Self::SignOut => "sign_out".to_string(),
            Self::Expire => "expire".to_string(),
            Self::GrantGroup { group } => format!("grant_group {group}"),
            Self::RevokeGroup { group } => format!("revoke_group {group}"),
            Self::SetModerator { moderator } => format!("set_moderator {moderator}"),
        }
    }
}
