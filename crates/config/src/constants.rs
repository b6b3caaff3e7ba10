//! Centralized constants for the rancher-cli workspace.
//!
//! Environment variable names and default values shared by the loader and
//! the binary.

// =============================================================================
// Environment Variables
// =============================================================================

/// Path to the JSON config file.
pub const ENV_CONFIG_PATH: &str = "RANCHER_CLI_CONFIG";

/// Output format for rendered documents (`json` or `yaml`).
pub const ENV_OUTPUT_FORMAT: &str = "RANCHER_OUTPUT_FORMAT";

/// Treat unknown fields as validation errors.
pub const ENV_STRICT: &str = "RANCHER_STRICT";

/// Print secret values instead of the redaction placeholder.
pub const ENV_SHOW_SECRETS: &str = "RANCHER_SHOW_SECRETS";

/// Default tracing filter when `RUST_LOG` is not set.
pub const ENV_LOG_LEVEL: &str = "RANCHER_LOG_LEVEL";

/// Set to `1` or `true` to skip `.env` loading.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";

// =============================================================================
// Defaults
// =============================================================================

/// Default tracing level.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Application name used for the platform config directory.
pub const APP_NAME: &str = "rancher-cli";

/// Config file name inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Plain level names accepted for `log_level`.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];
