//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for layered configuration merging.
//! - Support loading from the config file, environment variables, and direct builder methods.
//! - Build and validate the final `Config`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Config file resolution (delegated to file.rs).
//!
//! Invariants / Assumptions:
//! - Environment variables take precedence over config file values.
//! - Builder methods take precedence over environment variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use std::path::PathBuf;

use tracing::debug;

use super::env::apply_env;
use super::error::ConfigError;
use super::file::apply_file;
use crate::constants::{ENV_DOTENV_DISABLED, LOG_LEVELS};
use crate::types::{Config, OutputFormat};

/// Configuration loader that builds config from files, environment variables and overrides.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    output_format: Option<OutputFormat>,
    strict: Option<bool>,
    show_secrets: Option<bool>,
    log_level: Option<String>,
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(ENV_DOTENV_DISABLED).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read this file instead of `RANCHER_CLI_CONFIG` or the default location.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Apply values from the config file.
    ///
    /// A file named with `with_config_path` or `RANCHER_CLI_CONFIG` must exist;
    /// the default location is optional.
    pub fn from_file(mut self) -> Result<Self, ConfigError> {
        apply_file(&mut self)?;
        Ok(self)
    }

    /// Apply `RANCHER_*` environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = Some(format);
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = Some(strict);
        self
    }

    pub fn with_show_secrets(mut self, show: bool) -> Self {
        self.show_secrets = Some(show);
        self
    }

    pub fn with_log_level(mut self, level: String) -> Self {
        self.log_level = Some(level);
        self
    }

    /// Build the final configuration.
    ///
    /// Unset values fall back to `Config::default()`.
    pub fn build(self) -> Result<Config, ConfigError> {
        let defaults = Config::default();
        let log_level = match self.log_level {
            Some(level) => {
                Self::validate_log_level(&level)?;
                level
            }
            None => defaults.log_level,
        };

        let config = Config {
            output_format: self.output_format.unwrap_or(defaults.output_format),
            strict: self.strict.unwrap_or(defaults.strict),
            show_secrets: self.show_secrets.unwrap_or(defaults.show_secrets),
            log_level,
        };
        debug!(
            output_format = %config.output_format,
            strict = config.strict,
            config_path = ?self.config_path,
            "configuration resolved"
        );
        Ok(config)
    }

    /// Accept a plain level name or a full `EnvFilter` directive list.
    fn validate_log_level(level: &str) -> Result<(), ConfigError> {
        let normalized = level.trim().to_ascii_lowercase();
        if LOG_LEVELS.contains(&normalized.as_str())
            || normalized.contains('=')
            || normalized.contains(',')
        {
            return Ok(());
        }
        Err(ConfigError::InvalidValue {
            var: "log_level".to_string(),
            message: format!("must be one of {}", LOG_LEVELS.join(", ")),
        })
    }

    pub(crate) fn config_path(&self) -> Option<&PathBuf> {
        self.config_path.as_ref()
    }

    pub(crate) fn set_config_path(&mut self, path: Option<PathBuf>) {
        self.config_path = path;
    }

    pub(crate) fn set_output_format(&mut self, format: Option<OutputFormat>) {
        self.output_format = format;
    }

    pub(crate) fn set_strict(&mut self, strict: Option<bool>) {
        self.strict = strict;
    }

    pub(crate) fn set_show_secrets(&mut self, show: Option<bool>) {
        self.show_secrets = show;
    }

    pub(crate) fn set_log_level(&mut self, level: Option<String>) {
        self.log_level = level;
    }
}
