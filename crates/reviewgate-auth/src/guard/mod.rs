//! Route guarding: one parameterized guard for every protected region.

pub mod decision;
pub mod route_guard;
pub mod routes;
pub mod state;

pub use decision::{GuardDecision, GuardOutcome, LOGIN_PATH, Redirect};
pub use route_guard::RouteGuard;
pub use routes::{GuardedRoutes, Resolution, RouteTable};
pub use state::GuardState;
