//! Group membership names and lenient group-list parsing.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Group name that grants administrator access. Compared case-sensitively.
pub const ADMIN_GROUP: &str = "admin";

/// Deserialize a group list, keeping only string entries.
///
/// Anything other than an array (a bare string, a number, an object) yields
/// `None`, which role checks treat as "no memberships". Non-string entries
/// inside an array are skipped. Neither case is an error: a broken record
/// must never fail the whole session load.
pub(crate) fn deserialize_groups<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => Some(
            items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(name) => Some(name),
                    _ => None,
                })
                .collect(),
        ),
        _ => None,
    })
}
