//! In-memory session store backed by a `tokio::sync::watch` channel.
//!
//! The store is the only writer; every mutator takes `&mut self`, so a
//! second writer cannot exist. Observers hold a [`SessionSubscription`],
//! which always sees the latest value and is woken on change.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{info, warn};

use reviewgate_core::error::AppError;
use reviewgate_core::events::{DomainEvent, SessionEvent};
use reviewgate_core::result::AppResult;
use reviewgate_core::types::UserId;
use reviewgate_entity::session::Session;
use reviewgate_entity::user::User;

/// Holds the current [`Session`] and publishes every change.
#[derive(Debug)]
pub struct SessionStore {
    /// Publishing half of the session channel.
    tx: watch::Sender<Session>,
    /// Most recent mutation, for auditing.
    last_event: Option<DomainEvent>,
}

impl SessionStore {
    /// Creates a store with no one signed in.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Session::Absent);
        Self {
            tx,
            last_event: None,
        }
    }

    /// The current session snapshot.
    pub fn current(&self) -> Session {
        self.tx.borrow().clone()
    }

    /// The signed-in user, if any.
    pub fn current_user(&self) -> Option<Arc<User>> {
        self.tx.borrow().shared_user()
    }

    /// Subscribe to session changes. The subscription starts at the
    /// current value, already marked as seen.
    pub fn subscribe(&self) -> SessionSubscription {
        SessionSubscription {
            rx: self.tx.subscribe(),
        }
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }

    /// The most recent session event, if any mutation happened.
    pub fn last_event(&self) -> Option<&DomainEvent> {
        self.last_event.as_ref()
    }

    /// Sign a user in, replacing any previous session.
    pub fn sign_in(&mut self, user: User) {
        if !user.has_group_data() {
            warn!(user_id = %user.id, "User record has no usable group list; admin checks will fail");
        }

        let user_id = user.id.clone();
        let previous = self.tx.send_replace(Session::authenticated(user));
        if let Some(previous) = previous.user() {
            info!(previous = %previous.id, user_id = %user_id, "Session replaced by new sign-in");
        } else {
            info!(user_id = %user_id, "User signed in");
        }

        self.record(SessionEvent::SignedIn { user_id });
    }

    /// Sign the current user out. Returns `false` if nobody was signed in.
    pub fn sign_out(&mut self) -> bool {
        match self.end_session() {
            Some(user_id) => {
                info!(user_id = %user_id, "User signed out");
                self.record(SessionEvent::SignedOut { user_id });
                true
            }
            None => false,
        }
    }

    /// Expire the current session. Returns `false` if nobody was signed in.
    pub fn expire(&mut self) -> bool {
        match self.end_session() {
            Some(user_id) => {
                info!(user_id = %user_id, "Session expired");
                self.record(SessionEvent::Expired { user_id });
                true
            }
            None => false,
        }
    }

    /// Modify the signed-in user's record in place.
    ///
    /// Observers are notified only if the record actually changed. Earlier
    /// snapshots keep the old record. Returns whether a change was
    /// published; always `false` when nobody is signed in.
    pub fn update_user(&mut self, update: impl FnOnce(&mut User)) -> bool {
        let mut updated: Option<UserId> = None;

        self.tx.send_if_modified(|session| match session {
            Session::Absent => false,
            Session::Authenticated(user) => {
                let before = User::clone(user);
                let user = Arc::make_mut(user);
                update(user);
                if *user == before {
                    false
                } else {
                    updated = Some(user.id.clone());
                    true
                }
            }
        });

        match updated {
            Some(user_id) => {
                info!(user_id = %user_id, "Signed-in user record updated");
                self.record(SessionEvent::UserUpdated { user_id });
                true
            }
            None => false,
        }
    }

    /// Replace the session with `Absent`, notifying only if someone was
    /// signed in. Returns the id of the user whose session ended.
    fn end_session(&mut self) -> Option<UserId> {
        let mut ended = None;
        self.tx.send_if_modified(|session| match std::mem::take(session) {
            Session::Absent => false,
            Session::Authenticated(user) => {
                ended = Some(user.id.clone());
                true
            }
        });
        ended
    }

    fn record(&mut self, event: SessionEvent) {
        self.last_event = Some(DomainEvent::new(event));
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only view of the store, woken on every change.
#[derive(Debug, Clone)]
pub struct SessionSubscription {
    rx: watch::Receiver<Session>,
}

impl SessionSubscription {
    /// The latest session without marking it as seen.
    pub fn snapshot(&self) -> Session {
        self.rx.borrow().clone()
    }

    /// Run `f` against the latest session and mark it as seen.
    pub fn with_latest<R>(&mut self, f: impl FnOnce(&Session) -> R) -> R {
        f(&self.rx.borrow_and_update())
    }

    /// Whether a change was published since the value was last seen.
    pub fn has_changed(&self) -> AppResult<bool> {
        self.rx
            .has_changed()
            .map_err(|_| AppError::session("Session store was dropped"))
    }

    /// Wait for the next change and return the new session.
    pub async fn changed(&mut self) -> AppResult<Session> {
        self.rx
            .changed()
            .await
            .map_err(|_| AppError::session("Session store was dropped"))?;
        Ok(self.rx.borrow_and_update().clone())
    }
}
