//! Config file reading.
//!
//! Responsibilities:
//! - Define the on-disk `ConfigFile` shape and its errors.
//! - Read and parse a config file from a path.
//! - Resolve the platform-standard config file location.
//!
//! Does NOT handle:
//! - Merging file values with the environment (see `loader`).
//! - Validating values (the loader does that when building `Config`).
//!
//! Invariants:
//! - Every key is optional; a missing key leaves the lower layer in place.
//! - Unknown keys are rejected so typos do not silently fall back to defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

mod path;

pub(crate) use path::default_config_path;

/// Contents of `config.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    /// `json` or `yaml`.
    pub output_format: Option<String>,
    pub strict: Option<bool>,
    pub show_secrets: Option<bool>,
    pub log_level: Option<String>,
}

/// Errors from reading a config file.
#[derive(Error, Debug)]
pub enum ConfigFileError {
    #[error("Failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Read and parse a config file.
pub fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigFileError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigFileError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| ConfigFileError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}
