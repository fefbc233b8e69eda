//! # reviewgate-auth
//!
//! Access-control routing for the review platform.
//!
//! ## Modules
//!
//! - `rbac` — role requirements and the pure role classifier
//! - `session` — the session store, its single writer, and subscriptions
//! - `guard` — the route guard state machine and the guarded route table

pub mod guard;
pub mod rbac;
pub mod session;

pub use guard::{
    GuardDecision, GuardOutcome, GuardState, GuardedRoutes, LOGIN_PATH, Redirect, Resolution,
    RouteGuard, RouteTable,
};
pub use rbac::{RoleRequirement, classify};
pub use session::{SessionAction, SessionStore, SessionSubscription};
