//! Rancher CLI - inspect, validate and normalize Rancher management v3 documents.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Merge configuration layers and install the tracing subscriber.
//! - Map command errors to structured exit codes.
//!
//! Does NOT handle:
//! - Record definitions or the schema registry (see `crates/client`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Logs go to stderr; stdout carries only command output.

mod args;
mod commands;
mod dispatch;
mod error;
mod formatters;

use anyhow::{Context, Result};
use args::{Cli, Commands, LogFormat};
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use rancher_config::{Config, ConfigLoader};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{:#}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    init_tracing(cli.log_format, &config.log_level);
    tracing::debug!(?config, "starting");

    let exit_code = match run_command(cli, &config) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

/// Merge defaults, config file, environment and command-line overrides.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut loader = ConfigLoader::new();

    // Blank/whitespace-only values are ignored to allow fallback to the default path
    if let Some(ref path) = cli.config_path
        && !path.to_string_lossy().trim().is_empty()
    {
        loader = loader.with_config_path(path.clone());
    }

    loader = loader
        .from_file()
        .context("Failed to load configuration file")?
        .from_env()
        .context("Failed to load configuration from environment")?;

    if let Some(ref level) = cli.log_level {
        loader = loader.with_log_level(level.clone());
    }
    match &cli.command {
        Commands::Validate { strict: true, .. } => loader = loader.with_strict(true),
        Commands::Normalize {
            show_secrets: true, ..
        } => loader = loader.with_show_secrets(true),
        _ => {}
    }

    loader.build().context("Failed to build configuration")
}

/// Install the stderr subscriber. `RUST_LOG` wins over the configured level.
fn init_tracing(log_format: LogFormat, default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let registry = tracing_subscriber::registry().with(filter);

    match log_format {
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
    }
}
