//! review-gate — inspect and exercise the access-control routing layer.
//!
//! Loads the layered configuration, initialises tracing, and dispatches to
//! the CLI commands.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use reviewgate_core::config::AppConfig;
use reviewgate_core::config::logging::LoggingConfig;

mod commands;
mod output;

use commands::Cli;

fn main() {
    let cli = Cli::parse();

    let config = match AppConfig::load(&cli.env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config.logging);
    tracing::debug!(env = %cli.env, routes = config.guard.routes.len(), "Configuration loaded");

    if let Err(e) = cli.execute(&config) {
        output::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
