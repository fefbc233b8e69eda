//! The route guard: a mounted observer of the session store that decides,
//! on every evaluation, what a protected region renders.

use tracing::debug;

use reviewgate_core::result::AppResult;

use super::decision::{GuardDecision, GuardOutcome};
use super::state::GuardState;
use crate::rbac::{RoleRequirement, classify};
use crate::session::{SessionStore, SessionSubscription};

/// Guards one protected region.
///
/// Construction counts as mounting and evaluates immediately, so the first
/// [`render`](Self::render) already reflects the real session and the
/// guard is never observed in [`GuardState::Pending`] by callers. The guard
/// only reads the session; it never mutates it.
#[derive(Debug, Clone)]
pub struct RouteGuard {
    /// Role the region demands.
    requirement: RoleRequirement,
    /// Read-only view of the session store.
    subscription: SessionSubscription,
    /// State after the latest evaluation.
    state: GuardState,
}

impl RouteGuard {
    /// Mount a guard against the given store.
    pub fn new(store: &SessionStore, requirement: RoleRequirement) -> Self {
        Self::from_subscription(store.subscribe(), requirement)
    }

    /// Mount a guard on an existing subscription.
    pub fn from_subscription(subscription: SessionSubscription, requirement: RoleRequirement) -> Self {
        let mut guard = Self {
            requirement,
            subscription,
            state: GuardState::Pending,
        };
        guard.evaluate();
        guard
    }

    /// The requirement this guard enforces.
    pub fn requirement(&self) -> RoleRequirement {
        self.requirement
    }

    /// State after the latest evaluation.
    pub fn state(&self) -> GuardState {
        self.state
    }

    /// Re-run the classifier against the latest session.
    pub fn evaluate(&mut self) -> GuardDecision {
        let requirement = self.requirement;
        let decision = self
            .subscription
            .with_latest(|session| classify(session, requirement));

        let next = self.state.next(decision);
        if next != self.state {
            debug!(
                requirement = %requirement,
                from = %self.state,
                to = %next,
                "Route guard transition"
            );
        }
        self.state = next;
        decision
    }

    /// Evaluate and produce exactly one renderable outcome.
    ///
    /// `content` is invoked only when access is allowed.
    pub fn render<C>(&mut self, content: impl FnOnce() -> C) -> GuardOutcome<C> {
        let decision = self.evaluate();
        GuardOutcome::from_decision(decision, content)
    }

    /// Re-evaluate if the store published a change since the last
    /// evaluation. Returns the new state, or `None` if nothing changed.
    pub fn refresh(&mut self) -> AppResult<Option<GuardState>> {
        if self.subscription.has_changed()? {
            self.evaluate();
            Ok(Some(self.state))
        } else {
            Ok(None)
        }
    }

    /// Wait for the next session change, re-evaluate, and return the new
    /// state. Fails with a session error once the store is dropped.
    pub async fn changed(&mut self) -> AppResult<GuardState> {
        self.subscription.changed().await?;
        self.evaluate();
        Ok(self.state)
    }
}
