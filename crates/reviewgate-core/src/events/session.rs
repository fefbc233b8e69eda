//! Session-related domain events.

use serde::{Deserialize, Serialize};

use crate::types::UserId;

/// Events emitted by the session store on every mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// A user signed in and the session became authenticated.
    SignedIn {
        /// The user ID.
        user_id: UserId,
    },
    /// The user signed out and the session became absent.
    SignedOut {
        /// The user ID.
        user_id: UserId,
    },
    /// The session expired and became absent.
    Expired {
        /// The user ID.
        user_id: UserId,
    },
    /// The signed-in user's record changed (groups or moderator flag).
    UserUpdated {
        /// The user ID.
        user_id: UserId,
    },
}

impl SessionEvent {
    /// The user the event concerns.
    pub fn user_id(&self) -> &UserId {
        match self {
            Self::SignedIn { user_id }
            | Self::SignedOut { user_id }
            | Self::Expired { user_id }
            | Self::UserUpdated { user_id } => user_id,
        }
    }

    /// Short machine-readable event name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SignedIn { .. } => "signed_in",
            Self::SignedOut { .. } => "signed_out",
            Self::Expired { .. } => "expired",
            Self::UserUpdated { .. } => "user_updated",
        }
    }
}
