//! Session value model.

use std::sync::Arc;

use crate::user::User;

/// The browser client's authentication state.
///
/// Created as [`Session::Absent`] at start, becomes
/// [`Session::Authenticated`] on sign-in, and returns to `Absent` on
/// sign-out or expiry. The user record is shared behind an `Arc` so that
/// observers receive cheap read-only snapshots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    /// Nobody is signed in.
    #[default]
    Absent,
    /// A user is signed in.
    Authenticated(Arc<User>),
}

impl Session {
    /// Wrap a user into an authenticated session.
    pub fn authenticated(user: User) -> Self {
        Self::Authenticated(Arc::new(user))
    }

    /// Whether a user is signed in.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// The signed-in user, if any.
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Absent => None,
            Self::Authenticated(user) => Some(user),
        }
    }

    /// A shared handle to the signed-in user, if any.
    pub fn shared_user(&self) -> Option<Arc<User>> {
        match self {
            Self::Absent => None,
            Self::Authenticated(user) => Some(Arc::clone(user)),
        }
    }
}

impl From<Option<User>> for Session {
    fn from(user: Option<User>) -> Self {
        user.map(Self::authenticated).unwrap_or_default()
    }
}
