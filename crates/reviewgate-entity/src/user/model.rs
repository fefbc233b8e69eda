//! User entity model.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use reviewgate_core::types::UserId;

use super::group::deserialize_groups;

/// A signed-in user as delivered by the authentication service.
///
/// `groups` and `moderator` are optional because upstream records are not
/// always complete. Accessors treat missing data as "no membership" and
/// "not a moderator".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Human-readable display name.
    #[serde(default)]
    pub display_name: Option<String>,
    /// Ordered group memberships, e.g. `["admin"]`.
    #[serde(default, deserialize_with = "deserialize_groups")]
    pub groups: Option<Vec<String>>,
    /// Moderator flag. Accepts booleans, `0`/`1`, and `"true"`/`"false"`.
    #[serde(default, alias = "is_moderator", deserialize_with = "deserialize_flag")]
    pub moderator: Option<bool>,
}

impl User {
    /// Create a user with no group memberships and the moderator flag unset.
    pub fn new(id: impl Into<UserId>) -> Self {
        Self {
            id: id.into(),
            display_name: None,
            groups: Some(Vec::new()),
            moderator: Some(false),
        }
    }

    /// Set the display name.
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Replace the group memberships.
    pub fn with_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups = Some(groups.into_iter().map(Into::into).collect());
        self
    }

    /// Set the moderator flag.
    pub fn with_moderator(mut self, moderator: bool) -> Self {
        self.moderator = Some(moderator);
        self
    }

    /// Group memberships; empty when the record carried none.
    pub fn groups(&self) -> &[String] {
        self.groups.as_deref().unwrap_or(&[])
    }

    /// Exact, case-sensitive membership test.
    pub fn is_member_of(&self, group: &str) -> bool {
        self.groups().iter().any(|g| g == group)
    }

    /// Whether the record carried a usable group list at all.
    pub fn has_group_data(&self) -> bool {
        self.groups.is_some()
    }

    /// The moderator flag, `false` when missing.
    pub fn moderator_flag(&self) -> bool {
        self.moderator.unwrap_or(false)
    }

    /// Add a group membership if not already present.
    pub fn grant_group(&mut self, group: impl Into<String>) {
        let group = group.into();
        let groups = self.groups.get_or_insert_with(Vec::new);
        if !groups.iter().any(|g| *g == group) {
            groups.push(group);
        }
    }

    /// Remove every occurrence of a group membership.
    pub fn revoke_group(&mut self, group: &str) {
        if let Some(groups) = self.groups.as_mut() {
            groups.retain(|g| g != group);
        }
    }

    /// Name to show in logs and CLI output.
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(self.id.as_str())
    }
}

/// Lenient boolean: anything unrecognised becomes `None`.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(b)) => Some(b),
        Some(Value::Number(n)) => match n.as_i64() {
            Some(0) => Some(false),
            Some(1) => Some(true),
            _ => None,
        },
        Some(Value::String(s)) => match s.as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        _ => None,
    })
}
