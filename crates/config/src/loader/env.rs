//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `RANCHER_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//!
//! Does NOT handle:
//! - Loading from the config file (see file.rs).
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - Environment variables take precedence over config file settings.
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid values return ConfigError::InvalidValue.

use std::path::PathBuf;

use tracing::debug;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{
    ENV_CONFIG_PATH, ENV_LOG_LEVEL, ENV_OUTPUT_FORMAT, ENV_SHOW_SECRETS, ENV_STRICT,
};
use crate::types::OutputFormat;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Config file path from `RANCHER_CLI_CONFIG`, if set.
pub(crate) fn config_path_from_env() -> Option<PathBuf> {
    env_var_or_none(ENV_CONFIG_PATH).map(PathBuf::from)
}

/// Parse a boolean flag the way users write them in shells.
pub(crate) fn parse_bool(var: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            var: var.to_string(),
            message: "must be true or false".to_string(),
        }),
    }
}

/// Parse an output format name.
pub(crate) fn parse_output_format(var: &str, value: &str) -> Result<OutputFormat, ConfigError> {
    value
        .parse()
        .map_err(|message| ConfigError::InvalidValue {
            var: var.to_string(),
            message,
        })
}

/// Apply environment variable configuration to the loader.
///
/// Environment variables take precedence over config file settings.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(format) = env_var_or_none(ENV_OUTPUT_FORMAT) {
        loader.set_output_format(Some(parse_output_format(ENV_OUTPUT_FORMAT, &format)?));
    }
    if let Some(strict) = env_var_or_none(ENV_STRICT) {
        loader.set_strict(Some(parse_bool(ENV_STRICT, &strict)?));
    }
    if let Some(show) = env_var_or_none(ENV_SHOW_SECRETS) {
        loader.set_show_secrets(Some(parse_bool(ENV_SHOW_SECRETS, &show)?));
    }
    if let Some(level) = env_var_or_none(ENV_LOG_LEVEL) {
        loader.set_log_level(Some(level));
    }
    debug!("applied environment configuration");
    Ok(())
}
