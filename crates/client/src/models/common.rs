//! Types shared across management API resources.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::serde_helpers::{is_empty, null_as_default};

record! {
    /// Link from a resource to the object that owns it.
    pub struct OwnerReference => "ownerReference" {
        FIELD_API_VERSION: api_version: String = "apiVersion",
        FIELD_BLOCK_OWNER_DELETION: block_owner_deletion: Option<bool> = "blockOwnerDeletion",
        FIELD_CONTROLLER: controller: Option<bool> = "controller",
        FIELD_KIND: kind: String = "kind",
        FIELD_NAME: name: String = "name",
        FIELD_UID: uid: String = "uid",
    }
}

record! {
    /// Generic status condition.
    pub struct Condition => "condition" {
        FIELD_LAST_TRANSITION_TIME: last_transition_time: String = "lastTransitionTime",
        FIELD_LAST_UPDATE_TIME: last_update_time: String = "lastUpdateTime",
        FIELD_MESSAGE: message: String = "message",
        FIELD_REASON: reason: String = "reason",
        FIELD_STATUS: status: String = "status",
        FIELD_TYPE: r#type: String = "type",
    }
}

record! {
    /// Paging cursor attached to list responses.
    pub struct Pagination => "pagination" {
        FIELD_FIRST: first: String = "first",
        FIELD_LAST: last: String = "last",
        FIELD_LIMIT: limit: Option<i64> = "limit",
        FIELD_MARKER: marker: String = "marker",
        FIELD_NEXT: next: String = "next",
        FIELD_PARTIAL: partial: bool = "partial",
        FIELD_PREVIOUS: previous: String = "previous",
        FIELD_TOTAL: total: Option<i64> = "total",
    }
}

record! {
    /// Sort order of a list response.
    pub struct Sort => "sort" {
        FIELD_LINKS: links: BTreeMap<String, String> = "links",
        FIELD_ORDER: order: String = "order",
        FIELD_REVERSE: reverse: String = "reverse",
    }
}

/// List response envelope.
///
/// Only the shape is modeled; following `pagination.next` is left to callers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Collection<T> {
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "is_empty"
    )]
    pub r#type: String,
    #[serde(
        rename = "resourceType",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "is_empty"
    )]
    pub resource_type: String,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "is_empty"
    )]
    pub links: BTreeMap<String, String>,
    #[serde(
        rename = "createTypes",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "is_empty"
    )]
    pub create_types: BTreeMap<String, String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "is_empty"
    )]
    pub actions: BTreeMap<String, String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "is_empty"
    )]
    pub pagination: Option<Pagination>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "is_empty"
    )]
    pub sort: Option<Sort>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "is_empty"
    )]
    pub filters: BTreeMap<String, Vec<serde_json::Value>>,
    #[serde(default = "Vec::new", skip_serializing_if = "is_empty")]
    pub data: Vec<T>,
}

impl<T> Collection<T> {
    /// Whether the server reported more pages after this one.
    pub fn has_next(&self) -> bool {
        self.pagination
            .as_ref()
            .is_some_and(|pagination| !pagination.next.is_empty())
    }
}
