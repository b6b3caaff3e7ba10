//! Config file loading.
//!
//! Responsibilities:
//! - Resolve which config file to read (explicit path, `RANCHER_CLI_CONFIG`, or default).
//! - Apply config file values to a ConfigLoader instance.
//!
//! Does NOT handle:
//! - Environment variable parsing (see env.rs).
//! - Building the final Config (see builder.rs).
//!
//! Invariants:
//! - File settings are applied before environment variables (env vars take precedence).
//! - A missing file at the default location is not an error; a missing file
//!   the user named explicitly is.

use tracing::debug;

use super::builder::ConfigLoader;
use super::env::{config_path_from_env, parse_output_format};
use super::error::ConfigError;
use crate::persistence::{ConfigFile, default_config_path, read_config_file};

/// Apply config file values to the loader.
pub fn apply_file(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    let explicit = loader.config_path().cloned().or_else(config_path_from_env);

    let path = match explicit {
        Some(path) => path,
        None => {
            let path = default_config_path()
                .map_err(|e| ConfigError::ConfigDirUnavailable(e.to_string()))?;
            if !path.exists() {
                debug!(path = %path.display(), "no config file at default location");
                return Ok(());
            }
            path
        }
    };

    debug!(path = %path.display(), "reading config file");
    let file = read_config_file(&path)?;
    apply_file_config(loader, &file)?;
    loader.set_config_path(Some(path));
    Ok(())
}

/// Apply parsed config file values to the loader.
fn apply_file_config(loader: &mut ConfigLoader, file: &ConfigFile) -> Result<(), ConfigError> {
    if let Some(format) = &file.output_format {
        loader.set_output_format(Some(parse_output_format("output_format", format)?));
    }
    if let Some(strict) = file.strict {
        loader.set_strict(Some(strict));
    }
    if let Some(show) = file.show_secrets {
        loader.set_show_secrets(Some(show));
    }
    if let Some(level) = &file.log_level {
        loader.set_log_level(Some(level.clone()));
    }
    Ok(())
}
