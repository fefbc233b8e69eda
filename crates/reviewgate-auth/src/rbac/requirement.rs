//! Declarative role requirements attached to protected regions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use reviewgate_core::error::AppError;

/// What a protected region demands of the signed-in user.
///
/// The set is closed: an unknown tag cannot be represented, and parsing one
/// from configuration is an error rather than a silent allow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RoleRequirement {
    /// Any signed-in user.
    #[default]
    #[serde(rename = "authenticated", alias = "none")]
    None,
    /// Members of the `admin` group.
    #[serde(rename = "admin")]
    RequireAdmin,
    /// Users carrying the moderator flag.
    #[serde(rename = "moderator")]
    RequireModerator,
}

impl RoleRequirement {
    /// Every requirement variant.
    pub const ALL: [RoleRequirement; 3] = [Self::None, Self::RequireAdmin, Self::RequireModerator];

    /// Return the configuration tag for this requirement.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "authenticated",
            Self::RequireAdmin => "admin",
            Self::RequireModerator => "moderator",
        }
    }
}

impl fmt::Display for RoleRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RoleRequirement {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "authenticated" | "none" => Ok(Self::None),
            "admin" => Ok(Self::RequireAdmin),
            "moderator" => Ok(Self::RequireModerator),
            _ => Err(AppError::configuration(format!(
                "Invalid role requirement: '{s}'. Expected one of: authenticated, admin, moderator"
            ))),
        }
    }
}
