//! Per-evaluation guard decisions and the outcomes handed back to callers.

use serde::{Deserialize, Serialize};

/// Fixed login route used for every redirect. Carries no parameters.
pub const LOGIN_PATH: &str = "/login";

/// Three-way result of classifying a session against a requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardDecision {
    /// Render the protected content.
    Allow,
    /// Nobody is signed in; send them to the login page.
    RedirectToLogin,
    /// Signed in but lacking the required role.
    ShowNotFound,
}

impl GuardDecision {
    /// Return the decision as a snake-case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Allow => "allow",
            Self::RedirectToLogin => "redirect_to_login",
            Self::ShowNotFound => "show_not_found",
        }
    }
}

impl std::fmt::Display for GuardDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A redirect instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Redirect {
    /// Target path.
    pub to: &'static str,
}

/// What a guarded region renders for one evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome<C> {
    /// The protected content, produced only when access is allowed.
    Protected(C),
    /// Navigate to the login page.
    Redirect(Redirect),
    /// Render the not-found view.
    NotFound,
}

impl<C> GuardOutcome<C> {
    /// Build the outcome for a decision, invoking `content` only on `Allow`.
    pub fn from_decision(decision: GuardDecision, content: impl FnOnce() -> C) -> Self {
        match decision {
            GuardDecision::Allow => Self::Protected(content()),
            GuardDecision::RedirectToLogin => Self::Redirect(Redirect { to: LOGIN_PATH }),
            GuardDecision::ShowNotFound => Self::NotFound,
        }
    }

    /// Whether the protected content was produced.
    pub fn is_protected(&self) -> bool {
        matches!(self, Self::Protected(_))
    }

    /// The protected content, if access was allowed.
    pub fn into_content(self) -> Option<C> {
        match self {
            Self::Protected(content) => Some(content),
            _ => None,
        }
    }
}
