//! Configuration inspection commands.

use clap::{Args, Subcommand};

use reviewgate_auth::RouteTable;
use reviewgate_core::config::AppConfig;

use crate::output::{self, OutputFormat};

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the merged configuration
    Show,
    /// Validate the configuration, including requirement tags
    Validate,
}

/// Execute config commands. `table` has already been validated.
pub fn execute(
    args: &ConfigArgs,
    config: &AppConfig,
    table: &RouteTable,
    env: &str,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match &args.command {
        ConfigCommand::Show => format.item(config)?,
        ConfigCommand::Validate => {
            output::success(&format!("Configuration for '{env}' is valid"));
            output::kv("Log level", &config.logging.level);
            output::kv("Log format", &config.logging.format);
            output::kv("Guarded routes", &table.entries().len().to_string());
        }
    }
    Ok(())
}
