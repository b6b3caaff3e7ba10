//! Wire-name tests across the whole registry.
//!
//! This module checks, for every registered record:
//! - A fully populated sample encodes exactly the declared keys
//! - Declared keys are unique within a record
//! - Type names resolve through the registry lookups
//!
//! # What this does NOT handle
//! - Per-record irregular key spot checks (see `irregular_key_tests.rs`)

mod common;

use std::collections::BTreeSet;

use common::*;
use rancher_client::Record;
use rancher_client::models::{
    AciNetworkProvider, ActiveDirectoryConfig, Cluster, DnsConfig, GlobalAwsOpts,
    GlobalVsphereOpts, MetadataOpenstackOpts, RkeSystemImages,
};

#[test]
fn test_sample_encodes_every_declared_key() {
    for schema in registry::schemas() {
        let sample = schema.sample().unwrap();
        assert_eq!(
            keys_of(&sample),
            declared_keys(schema),
            "sample keys differ for {}",
            schema.type_name()
        );
    }
}

#[test]
fn test_declared_keys_are_unique() {
    for schema in registry::schemas() {
        assert_eq!(
            declared_keys(schema).len(),
            schema.fields().len(),
            "duplicate key in {}",
            schema.type_name()
        );
    }
}

#[test]
fn test_type_names_are_unique() {
    let names: BTreeSet<_> = registry::schemas()
        .iter()
        .map(Schema::type_name)
        .collect();
    assert_eq!(names.len(), registry::schemas().len());
}

#[test]
fn test_every_schema_resolves_by_name() {
    for schema in registry::schemas() {
        let found = registry::lookup(schema.type_name()).unwrap();
        assert_eq!(found.type_name(), schema.type_name());

        let upper = schema.type_name().to_ascii_uppercase();
        assert_eq!(
            registry::require(&upper).unwrap().type_name(),
            schema.type_name()
        );
    }
}

#[test]
fn test_registry_matches_record_impls() {
    fn check<T: Record>() {
        let schema = registry::lookup(T::TYPE_NAME).unwrap();
        assert_eq!(schema.fields(), T::FIELDS);
    }

    check::<AciNetworkProvider>();
    check::<ActiveDirectoryConfig>();
    check::<Cluster>();
    check::<DnsConfig>();
    check::<GlobalAwsOpts>();
    check::<GlobalVsphereOpts>();
    check::<MetadataOpenstackOpts>();
    check::<RkeSystemImages>();
}

#[test]
fn test_secret_fields_are_strings_in_samples() {
    for schema in registry::schemas() {
        let sample = schema.sample().unwrap();
        for field in schema.secret_fields() {
            assert!(
                sample[field.name].is_string(),
                "{}.{} is flagged secret but is not a string",
                schema.type_name(),
                field.name
            );
        }
    }
}
