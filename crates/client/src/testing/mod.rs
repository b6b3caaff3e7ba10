//! Testing utilities for rancher-client tests.
//!
//! Fixture loading and proptest strategies shared by unit tests, integration
//! tests and benchmarks. Available when running tests or when the `test-utils`
//! feature is enabled.
//!
//! # Example
//! ```ignore
//! use rancher_client::testing::{load_fixture, strategies::sparse_document};
//!
//! // Load a static fixture (JSON or YAML by extension)
//! let fixture = load_fixture("cluster.json");
//!
//! // Random subsets of a record's fields
//! let schema = rancher_client::registry::require("cluster").unwrap();
//! let strategy = sparse_document(schema);
//! ```

pub mod strategies;

use std::path::Path;

/// Load a fixture file from the fixtures directory.
///
/// Files ending in `.yaml` or `.yml` are parsed as YAML, everything else as JSON.
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content does not parse
pub fn load_fixture(fixture_path: &str) -> serde_json::Value {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let full_path = manifest_dir.join("fixtures").join(fixture_path);
    let content = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()));

    let is_yaml = full_path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));
    if is_yaml {
        serde_yaml::from_str(&content).expect("Invalid YAML in fixture")
    } else {
        serde_json::from_str(&content).expect("Invalid JSON in fixture")
    }
}

/// Names of every fixture file shipped with the crate, sorted.
pub fn fixture_names() -> Vec<String> {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures");
    let mut names: Vec<String> = std::fs::read_dir(&dir)
        .unwrap_or_else(|_| panic!("Failed to list fixtures: {}", dir.display()))
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect();
    names.sort();
    names
}
