//! Common test utilities for integration tests.
//!
//! Shared helpers and re-exports for the rancher-client integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - Fixture files are JSON or YAML, chosen by extension
//!
//! # What this does NOT handle
//! - Test-specific assertions or test logic

use std::collections::BTreeSet;

#[allow(unused_imports)]
pub use rancher_client::registry::{self, NormalizeOptions, Schema};
#[allow(unused_imports)]
pub use rancher_client::testing::load_fixture;

/// Top-level keys of an encoded document.
#[allow(dead_code)]
pub fn keys_of(document: &serde_json::Value) -> BTreeSet<String> {
    document
        .as_object()
        .map(|object| object.keys().cloned().collect())
        .unwrap_or_default()
}

/// Declared wire keys of a schema.
#[allow(dead_code)]
pub fn declared_keys(schema: &Schema) -> BTreeSet<String> {
    schema
        .fields()
        .iter()
        .map(|field| field.name.to_string())
        .collect()
}

/// Fixture file and the record type it holds.
#[allow(dead_code)]
pub const TYPED_FIXTURES: &[(&str, &str)] = &[
    ("cluster.json", "cluster"),
    ("github_config.json", "githubConfig"),
    ("okta_config.yaml", "oktaConfig"),
    ("openstack_cloud_provider.json", "cloudProvider"),
    ("rke_config.json", "rancherKubernetesEngineConfig"),
];
