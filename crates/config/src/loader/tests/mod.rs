//! Tests for the configuration loader.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub mod builder_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Write `content` to `config.json` under `dir` and return its path.
pub fn write_config_file(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("config.json");
    std::fs::write(&path, content).unwrap();
    path
}

/// Every variable the loader reads cleared, then `overrides` applied.
pub fn loader_env(overrides: &[(&'static str, &str)]) -> Vec<(&'static str, Option<String>)> {
    [
        "RANCHER_CLI_CONFIG",
        "RANCHER_OUTPUT_FORMAT",
        "RANCHER_STRICT",
        "RANCHER_SHOW_SECRETS",
        "RANCHER_LOG_LEVEL",
    ]
    .into_iter()
    .map(|var| {
        let value = overrides
            .iter()
            .find(|(name, _)| *name == var)
            .map(|(_, value)| value.to_string());
        (var, value)
    })
    .collect()
}
