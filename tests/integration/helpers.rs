//! Shared test helpers for integration tests.

#![allow(dead_code)]

use reviewgate_auth::{GuardedRoutes, RouteTable, SessionStore};
use reviewgate_core::config::AppConfig;
use reviewgate_entity::user::User;

/// Route layout mirroring the review platform's guarded regions.
pub const TEST_CONFIG: &str = r#"
[logging]
level = "debug"

[[guard.routes]]
path = "/dashboard"
requires = "authenticated"

[[guard.routes]]
path = "/settings"

[[guard.routes]]
path = "/admin"
requires = "admin"

[[guard.routes]]
path = "/moderate"
requires = "moderator"
"#;

/// Test application context
pub struct TestApp {
    /// The session store (sole writer)
    pub store: SessionStore,
    /// Route table bound to the store
    pub routes: GuardedRoutes,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application with nobody signed in
    pub fn new() -> Self {
        let config = AppConfig::from_toml(TEST_CONFIG).expect("Failed to parse test config");
        let table = RouteTable::from_config(&config.guard).expect("Failed to build route table");
        let store = SessionStore::new();
        let routes = GuardedRoutes::new(table, &store);
        Self {
            store,
            routes,
            config,
        }
    }
}

/// A user with the given groups and no moderator flag
pub fn user_with_groups(id: &str, groups: &[&str]) -> User {
    User::new(id).with_groups(groups.iter().copied())
}

/// A user with only the moderator flag set as given
pub fn user_with_moderator(id: &str, moderator: bool) -> User {
    User::new(id).with_moderator(moderator)
}
