//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not merge configuration layers (see `main`).

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "rancher-cli")]
#[command(about = "Inspect, validate and normalize Rancher management v3 resource documents", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  rancher-cli schemas --filter openstack\n  rancher-cli fields cloudProvider\n  rancher-cli validate cluster cluster.json --strict\n  rancher-cli normalize githubConfig github.yaml --to json\n  rancher-cli sample nodePool --to yaml\n"
)]
pub struct Cli {
    /// Path to a custom configuration file (overrides default location).
    ///
    /// Can also be set via RANCHER_CLI_CONFIG environment variable.
    #[arg(long, global = true, env = "RANCHER_CLI_CONFIG", value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// Output format for listings and reports (table, json, yaml)
    #[arg(short, long, global = true, default_value = "table")]
    pub output: String,

    /// Output file path (saves results to file instead of stdout)
    #[arg(long, global = true, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Tracing filter when RUST_LOG is unset (e.g. debug, rancher_client=trace)
    #[arg(long, global = true, value_name = "FILTER")]
    pub log_level: Option<String>,

    /// Log line format on stderr
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List registered record types with their field counts
    Schemas {
        /// Only show type names containing this text (case-insensitive)
        #[arg(short, long)]
        filter: Option<String>,
    },

    /// List the serialized field names of a record type
    Fields {
        /// Record type name (e.g. globalOpenstackOpts)
        type_name: String,
    },

    /// Check a document against a record type
    Validate {
        /// Record type name
        type_name: String,

        /// Document to check (`-` reads stdin)
        file: PathBuf,

        /// Treat unknown top-level fields as errors
        #[arg(long)]
        strict: bool,

        /// Document format when it cannot be inferred from the extension (json, yaml)
        #[arg(long, value_name = "FORMAT")]
        input_format: Option<String>,
    },

    /// Decode a document into a record type and print it back out
    Normalize {
        /// Record type name
        type_name: String,

        /// Document to normalize (`-` reads stdin)
        file: PathBuf,

        /// Document format to print (json, yaml)
        #[arg(long, value_name = "FORMAT")]
        to: Option<String>,

        /// Print secret values instead of masking them
        #[arg(long)]
        show_secrets: bool,

        /// Document format when it cannot be inferred from the extension (json, yaml)
        #[arg(long, value_name = "FORMAT")]
        input_format: Option<String>,
    },

    /// Print a document with every field of a record type populated
    Sample {
        /// Record type name
        type_name: String,

        /// Document format to print (json, yaml)
        #[arg(long, value_name = "FORMAT")]
        to: Option<String>,
    },
}
