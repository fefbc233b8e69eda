//! CLI command definitions and dispatch.

pub mod check;
pub mod config;
pub mod replay;
pub mod routes;

use anyhow::Context;
use clap::{Parser, Subcommand};

use reviewgate_auth::RouteTable;
use reviewgate_core::config::AppConfig;

use crate::output::OutputFormat;

/// review-gate — role-scoped route guarding for the review platform
#[derive(Debug, Parser)]
#[command(name = "review-gate", version, about, long_about = None)]
pub struct Cli {
    /// Configuration overlay to merge over `config/default` (`config/<env>`)
    #[arg(short, long, default_value = "development", env = "REVIEWGATE_ENV")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List guarded routes
    Routes,
    /// Decide how a path is handled for a user (or nobody)
    Check(check::CheckArgs),
    /// Replay a script of session actions against a guarded path
    Replay(replay::ReplayArgs),
    /// Configuration inspection
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// The route table is built before dispatch so that every command,
    /// including `config show`, rejects unknown requirement tags.
    pub fn execute(&self, config: &AppConfig) -> anyhow::Result<()> {
        let table = load_routes(config)?;
        match &self.command {
            Commands::Routes => routes::execute(&table, self.format),
            Commands::Check(args) => check::execute(args, table, self.format),
            Commands::Replay(args) => replay::execute(args, table, self.format),
            Commands::Config(args) => config::execute(args, config, &table, &self.env, self.format),
        }
    }
}

/// Helper: build the route table from configuration
pub fn load_routes(config: &AppConfig) -> anyhow::Result<RouteTable> {
    RouteTable::from_config(&config.guard).context("Invalid guard configuration")
}

/// Helper: read and parse a JSON file
pub fn read_json<T: serde::de::DeserializeOwned>(path: &std::path::Path) -> anyhow::Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read '{}'", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse '{}'", path.display()))
}
