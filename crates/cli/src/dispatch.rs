//! Command dispatch for the CLI.
//!
//! Responsibilities:
//! - Route the parsed subcommand to its implementation.
//!
//! Does NOT handle:
//! - Argument parsing (see `args`).
//! - Configuration merging (see `main`).

use anyhow::Result;
use rancher_config::Config;
use tracing::debug;

use crate::args::{Cli, Commands};
use crate::commands;

/// Run the command selected on the command line.
pub fn run_command(cli: Cli, config: &Config) -> Result<()> {
    let Cli {
        output,
        output_file,
        command,
        ..
    } = cli;

    match command {
        Commands::Schemas { filter } => {
            debug!("running schemas");
            commands::schemas::run(filter, &output, output_file)
        }
        Commands::Fields { type_name } => {
            debug!(type_name = %type_name, "running fields");
            commands::fields::run(&type_name, &output, output_file)
        }
        Commands::Validate {
            type_name,
            file,
            input_format,
            ..
        } => {
            debug!(type_name = %type_name, strict = config.strict, "running validate");
            commands::validate::run(
                &type_name,
                &file,
                input_format.as_deref(),
                config.strict,
                &output,
                output_file,
            )
        }
        Commands::Normalize {
            type_name,
            file,
            to,
            input_format,
            ..
        } => {
            debug!(type_name = %type_name, show_secrets = config.show_secrets, "running normalize");
            commands::normalize::run(
                &type_name,
                &file,
                input_format.as_deref(),
                to.as_deref(),
                config,
                output_file,
            )
        }
        Commands::Sample { type_name, to } => {
            debug!(type_name = %type_name, "running sample");
            commands::sample::run(&type_name, to.as_deref(), config, output_file)
        }
    }
}
