//! Shared test utilities for rancher-cli integration tests.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic: no `.env`, no
//!   host `RANCHER_*` variables, and a config path that does not exist
//!   unless a test supplies one.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;

/// Returns a hermetic `rancher-cli` command for integration testing.
pub fn rancher_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("rancher-cli");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    cmd.env_remove("RANCHER_CLI_CONFIG")
        .env_remove("RANCHER_OUTPUT_FORMAT")
        .env_remove("RANCHER_STRICT")
        .env_remove("RANCHER_SHOW_SECRETS")
        .env_remove("RANCHER_LOG_LEVEL")
        .env_remove("RUST_LOG");

    // Keep the user's real config file out of the picture
    cmd.env("XDG_CONFIG_HOME", std::env::temp_dir().join("rancher-cli-tests-no-config"));
    cmd.env("HOME", std::env::temp_dir().join("rancher-cli-tests-no-home"));

    cmd
}

/// Path to a client fixture file.
pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("client")
        .join("fixtures")
        .join(name)
}

/// Write `content` to `name` inside `dir`.
pub fn write_doc(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}
