//! Route guard configuration.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Guarded regions of the application.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GuardConfig {
    /// Guarded path prefixes and the requirement tag each one carries.
    #[serde(default)]
    pub routes: Vec<RouteConfig>,
}

/// A single guarded path prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteConfig {
    /// Absolute path prefix, e.g. `/admin`.
    pub path: String,
    /// Requirement tag: `authenticated` (or `none`), `admin`, `moderator`.
    #[serde(default = "default_requires")]
    pub requires: String,
}

impl GuardConfig {
    /// Structural checks that do not depend on the requirement vocabulary.
    ///
    /// Tag parsing happens where the requirement type lives; here we only
    /// reject relative and duplicate paths.
    pub fn validate(&self) -> Result<(), AppError> {
        let mut seen = HashSet::new();
        for route in &self.routes {
            if !route.path.starts_with('/') {
                return Err(AppError::configuration(format!(
                    "Guarded route path '{}' must start with '/'",
                    route.path
                )));
            }
            if !seen.insert(normalize(&route.path)) {
                return Err(AppError::configuration(format!(
                    "Guarded route path '{}' is configured more than once",
                    route.path
                )));
            }
        }
        Ok(())
    }
}

/// Strip trailing slashes so `/admin/` and `/admin` compare equal. The root
/// path stays `/`.
pub fn normalize(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

fn default_requires() -> String {
    "authenticated".to_string()
}
