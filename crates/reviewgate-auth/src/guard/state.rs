//! Guard state machine.

use serde::Serialize;

use super::decision::GuardDecision;

/// Where a mounted guard stands after its latest evaluation.
///
/// Every state is re-entered from every other on the next evaluation;
/// there is no terminal state, since expiry must revoke granted access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardState {
    /// Not evaluated yet.
    #[default]
    Pending,
    /// Protected content is shown.
    Allowed,
    /// A login redirect was issued.
    Redirecting,
    /// The not-found view is shown.
    NotFound,
}

impl GuardState {
    /// The state a decision leads to. Independent of the current state.
    pub fn next(self, decision: GuardDecision) -> Self {
        Self::from(decision)
    }

    /// Return the state as a snake-case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Allowed => "allowed",
            Self::Redirecting => "redirecting",
            Self::NotFound => "not_found",
        }
    }
}

impl From<GuardDecision> for GuardState {
    fn from(decision: GuardDecision) -> Self {
        match decision {
            GuardDecision::Allow => Self::Allowed,
            GuardDecision::RedirectToLogin => Self::Redirecting,
            GuardDecision::ShowNotFound => Self::NotFound,
        }
    }
}

impl std::fmt::Display for GuardState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
