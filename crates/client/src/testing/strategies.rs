//! Proptest strategies over record documents.
//!
//! `sparse_document` works for any registered type; the typed strategies
//! cover records with irregular keys or explicit-false optionals, where
//! empty-versus-absent handling matters most.

use proptest::prelude::*;
use proptest::sample::subsequence;
use serde_json::{Map, Value};

use crate::models::{
    GlobalOpenstackOpts, GlobalVsphereOpts, LinearAutoscalerParams, MetadataOpenstackOpts,
    OwnerReference,
};
use crate::registry::Schema;

/// Short strings, empty included, drawn from characters common in config values.
pub fn wire_string() -> impl Strategy<Value = String> {
    prop_oneof![
        1 => Just(String::new()),
        4 => "[a-zA-Z0-9._:/-]{1,24}",
    ]
}

/// Non-negative integers with zero over-represented.
pub fn wire_int() -> impl Strategy<Value = i64> {
    prop_oneof![1 => Just(0i64), 4 => 1i64..100_000]
}

/// Quarter steps so decimal text round-trips exactly.
pub fn wire_float() -> impl Strategy<Value = f64> {
    (0i32..400_000).prop_map(|quarters| f64::from(quarters) / 4.0)
}

/// A random subset of the fields of `schema`'s sample document.
///
/// Every kept value is non-empty, so normalizing the result returns it unchanged.
pub fn sparse_document(schema: &'static Schema) -> impl Strategy<Value = Value> {
    let sample = match schema.sample() {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    };
    let keys: Vec<String> = sample.keys().cloned().collect();
    let len = keys.len();
    subsequence(keys, 0..=len).prop_map(move |kept| {
        let document: Map<String, Value> = kept
            .into_iter()
            .filter_map(|key| sample.get(&key).cloned().map(|value| (key, value)))
            .collect();
        Value::Object(document)
    })
}

pub fn global_openstack_opts() -> impl Strategy<Value = GlobalOpenstackOpts> {
    (
        wire_string(),
        wire_string(),
        wire_string(),
        wire_string(),
        wire_string(),
        wire_string(),
        wire_string(),
    )
        .prop_map(
            |(auth_url, username, password, tenant_id, domain_name, region, trust_id)| {
                GlobalOpenstackOpts {
                    auth_url,
                    username,
                    password,
                    tenant_id,
                    domain_name,
                    region,
                    trust_id,
                    ..Default::default()
                }
            },
        )
}

pub fn metadata_openstack_opts() -> impl Strategy<Value = MetadataOpenstackOpts> {
    (wire_string(), wire_int()).prop_map(|(search_order, request_timeout)| {
        MetadataOpenstackOpts {
            search_order,
            request_timeout,
        }
    })
}

pub fn global_vsphere_opts() -> impl Strategy<Value = GlobalVsphereOpts> {
    (
        wire_string(),
        wire_string(),
        any::<bool>(),
        wire_int(),
        wire_string(),
        wire_string(),
    )
        .prop_map(
            |(vcenter_ip, default_datastore, insecure_flag, round_tripper_count, user, password)| {
                GlobalVsphereOpts {
                    vcenter_ip,
                    default_datastore,
                    insecure_flag,
                    round_tripper_count,
                    user,
                    password,
                    ..Default::default()
                }
            },
        )
}

pub fn owner_reference() -> impl Strategy<Value = OwnerReference> {
    (
        wire_string(),
        wire_string(),
        wire_string(),
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
    )
        .prop_map(
            |(api_version, kind, name, block_owner_deletion, controller)| OwnerReference {
                api_version,
                kind,
                name,
                block_owner_deletion,
                controller,
                ..Default::default()
            },
        )
}

pub fn linear_autoscaler_params() -> impl Strategy<Value = LinearAutoscalerParams> {
    (
        wire_float(),
        wire_float(),
        wire_int(),
        wire_int(),
        proptest::option::of(any::<bool>()),
    )
        .prop_map(
            |(cores_per_replica, nodes_per_replica, min, max, prevent_single_point_failure)| {
                LinearAutoscalerParams {
                    cores_per_replica,
                    nodes_per_replica,
                    min,
                    max,
                    prevent_single_point_failure,
                }
            },
        )
}
