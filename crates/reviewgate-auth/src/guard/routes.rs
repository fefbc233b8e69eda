//! Guarded route table: maps URL paths to the requirement of the region
//! mounted there.

use serde::Serialize;
use tracing::debug;

use reviewgate_core::config::guard::GuardConfig;
use reviewgate_core::error::AppError;
use reviewgate_core::result::AppResult;

use super::decision::{GuardDecision, LOGIN_PATH};
use super::route_guard::RouteGuard;
use crate::rbac::{RoleRequirement, classify};
use crate::session::{SessionStore, SessionSubscription};

/// One guarded path prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteEntry {
    /// Normalized path prefix.
    pub path: String,
    /// Requirement for everything under `path`.
    pub requires: RoleRequirement,
}

/// Validated set of guarded path prefixes.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    /// Sorted longest path first so the first hit is the most specific.
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// Build a table from configuration.
    ///
    /// Fails on unknown requirement tags, relative or duplicate paths
    /// (compared after canonicalization), and tables that would guard the
    /// login page itself.
    pub fn from_config(config: &GuardConfig) -> AppResult<Self> {
        config.validate()?;

        let mut entries = config
            .routes
            .iter()
            .map(|route| {
                let requires = route.requires.parse::<RoleRequirement>().map_err(|e| {
                    AppError::configuration(format!("Route '{}': {}", route.path, e.message))
                })?;
                Ok(RouteEntry {
                    path: canonical_path(&route.path),
                    requires,
                })
            })
            .collect::<AppResult<Vec<_>>>()?;

        entries.sort_by(|a, b| b.path.len().cmp(&a.path.len()).then(a.path.cmp(&b.path)));
        if let Some(pair) = entries.windows(2).find(|pair| pair[0].path == pair[1].path) {
            return Err(AppError::configuration(format!(
                "Guarded route path '{}' is configured more than once",
                pair[0].path
            )));
        }
        let table = Self { entries };

        if let Some(requirement) = table.requirement_for(LOGIN_PATH) {
            return Err(AppError::configuration(format!(
                "Login page '{LOGIN_PATH}' must stay public but is guarded by '{requirement}'"
            )));
        }

        debug!(routes = table.entries.len(), "Route table loaded");
        Ok(table)
    }

    /// Entries, most specific first.
    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// Whether no routes are guarded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The requirement guarding `path`, or `None` if the path is public.
    ///
    /// Matching is by longest prefix on segment boundaries, so `/admin`
    /// covers `/admin/users` but not `/administrator`. The path is
    /// canonicalized first, so `//admin`, `/./admin` and `/x/../admin` all
    /// match `/admin`.
    pub fn requirement_for(&self, path: &str) -> Option<RoleRequirement> {
        let path = canonical_path(path);
        self.entries
            .iter()
            .find(|entry| covers(&entry.path, &path))
            .map(|entry| entry.requires)
    }
}

/// Reduce a request path to the form the browser router resolves it to.
///
/// Drops the query string and fragment, collapses repeated `/`, removes `.`
/// segments, and resolves `..` against the preceding segment (never above
/// the root). The result always starts with `/` and has no trailing `/`.
pub fn canonical_path(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or(path);

    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }

    format!("/{}", segments.join("/"))
}

fn covers(prefix: &str, path: &str) -> bool {
    if prefix == "/" {
        return true;
    }
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// How a navigation to a path is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Resolution {
    /// No guard is mounted on the path.
    Public,
    /// A guard is mounted and decided as shown.
    Guarded {
        /// The requirement of the matching route.
        requirement: RoleRequirement,
        /// The decision for the current session.
        decision: GuardDecision,
    },
}

/// A route table bound to a session store.
#[derive(Debug, Clone)]
pub struct GuardedRoutes {
    table: RouteTable,
    subscription: SessionSubscription,
}

impl GuardedRoutes {
    /// Bind a table to a store.
    pub fn new(table: RouteTable, store: &SessionStore) -> Self {
        Self {
            table,
            subscription: store.subscribe(),
        }
    }

    /// The underlying table.
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Decide how navigating to `path` is handled right now.
    pub fn resolve(&self, path: &str) -> Resolution {
        match self.table.requirement_for(path) {
            None => Resolution::Public,
            Some(requirement) => Resolution::Guarded {
                requirement,
                decision: classify(&self.subscription.snapshot(), requirement),
            },
        }
    }

    /// Mount a guard for `path`, or `None` if the path is public.
    pub fn mount(&self, path: &str) -> Option<RouteGuard> {
        self.table
            .requirement_for(path)
            .map(|requirement| RouteGuard::from_subscription(self.subscription.clone(), requirement))
    }
}
