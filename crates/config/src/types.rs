//! Configuration type definitions.
//!
//! Responsibilities:
//! - Define the resolved `Config` consumed by the CLI.
//! - Define `OutputFormat` with parsing and display helpers.
//!
//! Does NOT handle:
//! - Loading values from files or the environment (see `loader`).
//! - Mapping the output format to a codec (the CLI owns that).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_LOG_LEVEL;

/// Document format used when printing records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            other => Err(format!("must be json or yaml (got '{other}')")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}

/// Resolved CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Format for `normalize` and `sample` output.
    pub output_format: OutputFormat,
    /// Treat unknown fields as errors in `validate`.
    pub strict: bool,
    /// Print secret values instead of masking them.
    pub show_secrets: bool,
    /// Tracing filter used when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::default(),
            strict: false,
            show_secrets: false,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
