//! Replay a session script against a mounted guard.

use std::path::PathBuf;

use anyhow::bail;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use reviewgate_auth::{GuardedRoutes, RouteTable, SessionAction, SessionStore};

use crate::output::OutputFormat;

/// Arguments for `replay`
#[derive(Debug, Args)]
pub struct ReplayArgs {
    /// JSON file containing a list of session actions
    pub script: PathBuf,

    /// Guarded path to mount
    #[arg(short, long)]
    pub path: String,
}

#[derive(Debug, Serialize, Tabled)]
struct StepRow {
    /// Step number
    step: usize,
    /// Action applied
    action: String,
    /// Whether the store published a change
    published: bool,
    /// Guard state after the step
    state: String,
}

/// Execute `replay`
pub fn execute(args: &ReplayArgs, table: RouteTable, format: OutputFormat) -> anyhow::Result<()> {
    let actions: Vec<SessionAction> = super::read_json(&args.script)?;
    let rows = run_script(table, &args.path, &actions)?;
    format.list(&rows);
    Ok(())
}

/// Mount a guard on `path` with no session, then apply each action and
/// refresh the guard. Row 0 is the state at mount.
fn run_script(
    table: RouteTable,
    path: &str,
    actions: &[SessionAction],
) -> anyhow::Result<Vec<StepRow>> {
    let mut store = SessionStore::new();
    let routes = GuardedRoutes::new(table, &store);
    let Some(mut guard) = routes.mount(path) else {
        bail!("Path '{path}' is not guarded");
    };

    let mut rows = vec![StepRow {
        step: 0,
        action: "mount".to_string(),
        published: false,
        state: guard.state().to_string(),
    }];

    for (index, action) in actions.iter().enumerate() {
        let published = action.apply(&mut store);
        guard.refresh()?;
        rows.push(StepRow {
            step: index + 1,
            action: action.label(),
            published,
            state: guard.state().to_string(),
        });
    }

    Ok(rows)
}
