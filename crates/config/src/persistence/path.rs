//! Path helpers for configuration file locations.
//!
//! Responsibilities:
//! - Determine the standard configuration file path.
//! - Use `directories` crate for platform-appropriate paths.
//!
//! Does NOT handle:
//! - File I/O operations.

use std::path::PathBuf;

use anyhow::Context;

use crate::constants::{APP_NAME, CONFIG_FILE_NAME};

/// Returns the default path to the configuration file.
///
/// - Linux: `~/.config/rancher-cli/config.json`
/// - macOS: `~/Library/Application Support/rancher-cli/config.json`
/// - Windows: `%AppData%\rancher-cli\config\config.json`
pub(crate) fn default_config_path() -> Result<PathBuf, anyhow::Error> {
    let proj_dirs = directories::ProjectDirs::from("", "", APP_NAME)
        .context("Failed to determine project directories")?;

    Ok(proj_dirs.config_dir().join(CONFIG_FILE_NAME))
}
