//! Route table listing.

use serde::Serialize;
use tabled::Tabled;

use reviewgate_auth::RouteTable;

use crate::output::OutputFormat;

#[derive(Debug, Serialize, Tabled)]
struct RouteRow {
    /// Path prefix
    path: String,
    /// Requirement
    requires: String,
}

/// Execute `routes`
pub fn execute(table: &RouteTable, format: OutputFormat) -> anyhow::Result<()> {
    let rows: Vec<RouteRow> = table
        .entries()
        .iter()
        .map(|entry| RouteRow {
            path: entry.path.clone(),
            requires: entry.requires.to_string(),
        })
        .collect();

    format.list(&rows);
    Ok(())
}
