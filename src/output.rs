//! Table and JSON rendering for CLI commands.

use anyhow::Context;
use serde::Serialize;
use serde_json::Value;
use tabled::{Table, Tabled};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

impl OutputFormat {
    /// Print rows as a table or a JSON array.
    pub fn list<T: Serialize + Tabled>(self, rows: &[T]) {
        match self {
            Self::Table if rows.is_empty() => println!("No results found."),
            Self::Table => println!("{}", Table::new(rows)),
            Self::Json => {
                println!("{}", serde_json::to_string_pretty(rows).unwrap_or_else(|_| "[]".into()))
            }
        }
    }

    /// Print one record. Tables flatten it to dotted `key: value` lines.
    pub fn item<T: Serialize>(self, item: &T) -> anyhow::Result<()> {
        let value = serde_json::to_value(item).context("Failed to serialize output")?;
        match self {
            Self::Json => println!("{}", serde_json::to_string_pretty(&value)?),
            Self::Table => {
                let mut lines = Vec::new();
                flatten("", &value, &mut lines);
                for (key, value) in lines {
                    kv(&key, &value);
                }
            }
        }
        Ok(())
    }
}

/// Collect `(dotted.key, scalar)` pairs; arrays of tables are indexed.
fn flatten(prefix: &str, value: &Value, out: &mut Vec<(String, String)>) {
    let join = |key: &str| {
        if prefix.is_empty() {
            key.to_string()
        } else {
            format!("{prefix}.{key}")
        }
    };
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                flatten(&join(key), child, out);
            }
        }
        Value::Array(items) if items.iter().any(|i| i.is_object()) => {
            for (index, child) in items.iter().enumerate() {
                flatten(&join(&index.to_string()), child, out);
            }
        }
        Value::String(s) => out.push((prefix.to_string(), s.clone())),
        Value::Null => out.push((prefix.to_string(), "-".to_string())),
        other => out.push((prefix.to_string(), other.to_string())),
    }
}

/// Print a success message
pub fn success(msg: &str) {
    println!("✓ {msg}");
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("✗ {msg}");
}

/// Print a key-value pair
pub fn kv(key: &str, value: &str) {
    println!("  {:<24} {value}", format!("{key}:"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flatten_nested_record() {
        let value = json!({
            "logging": { "level": "info" },
            "guard": { "routes": [{ "path": "/admin", "requires": "admin" }] },
            "user": null,
            "tags": ["a", "b"]
        });
        let mut lines = Vec::new();
        flatten("", &value, &mut lines);

        assert!(lines.contains(&("logging.level".to_string(), "info".to_string())));
        assert!(lines.contains(&("guard.routes.0.path".to_string(), "/admin".to_string())));
        assert!(lines.contains(&("user".to_string(), "-".to_string())));
        assert!(lines.contains(&("tags".to_string(), r#"["a","b"]"#.to_string())));
    }
}
