//! Configuration management for the Rancher record CLI.
//!
//! This crate provides the `Config` type and a layered `ConfigLoader` that
//! merges built-in defaults, an optional JSON config file, environment
//! variables and explicit overrides.

pub mod constants;
mod loader;
pub mod persistence;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use persistence::{ConfigFile, ConfigFileError};
pub use types::{Config, OutputFormat};
