//! Serde helpers for the generated-client `omitempty` convention.
//!
//! Responsibilities:
//! - Decide whether a field value is "empty" and must be left out of encoded output.
//! - Keep the rule in one place so every record applies it identically.
//!
//! - Decode an explicit `null` as the field's empty value.
//!
//! Explicitly does NOT handle:
//! - Filling defaults for missing keys (records use `#[serde(default)]` for that).
//! - Validating higher-level semantics (required fields, enum options, ranges).
//!
//! Invariants / assumptions:
//! - A value is empty exactly when it equals its type's `Default`, except for
//!   `Option`, where only `None` is empty (`Some(false)` and `Some(0)` are sent).
//! - Decoding an omitted key or a `null` yields the same empty value, so
//!   omission round-trips.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

/// Values that can be left out of an encoded record when empty.
pub trait OmitEmpty {
    fn is_omitted(&self) -> bool;
}

/// `skip_serializing_if` predicate shared by all record fields.
pub fn is_empty<T: OmitEmpty + ?Sized>(value: &T) -> bool {
    value.is_omitted()
}

/// `deserialize_with` helper mapping `null` to `T::default()`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl OmitEmpty for String {
    fn is_omitted(&self) -> bool {
        self.is_empty()
    }
}

impl OmitEmpty for i64 {
    fn is_omitted(&self) -> bool {
        *self == 0
    }
}

impl OmitEmpty for f64 {
    fn is_omitted(&self) -> bool {
        *self == 0.0
    }
}

impl OmitEmpty for bool {
    fn is_omitted(&self) -> bool {
        !*self
    }
}

impl<T> OmitEmpty for Option<T> {
    fn is_omitted(&self) -> bool {
        self.is_none()
    }
}

impl<T> OmitEmpty for Vec<T> {
    fn is_omitted(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> OmitEmpty for BTreeMap<K, V> {
    fn is_omitted(&self) -> bool {
        self.is_empty()
    }
}

impl OmitEmpty for serde_json::Value {
    fn is_omitted(&self) -> bool {
        self.is_null()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Wrapper {
        #[serde(default, skip_serializing_if = "is_empty")]
        name: String,
        #[serde(default, skip_serializing_if = "is_empty")]
        count: i64,
        #[serde(default, skip_serializing_if = "is_empty")]
        flag: Option<bool>,
        #[serde(default, skip_serializing_if = "is_empty")]
        tags: Vec<String>,
    }

    #[test]
    fn test_default_values_are_omitted() {
        let encoded = serde_json::to_string(&Wrapper::default()).unwrap();
        assert_eq!(encoded, "{}");
    }

    #[test]
    fn test_some_false_is_kept() {
        let wrapper = Wrapper {
            flag: Some(false),
            ..Default::default()
        };
        let encoded = serde_json::to_string(&wrapper).unwrap();
        assert_eq!(encoded, r#"{"flag":false}"#);
    }

    #[test]
    fn test_missing_keys_decode_to_default() {
        let parsed: Wrapper = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, Wrapper::default());
    }

    #[derive(Debug, Default, PartialEq, Deserialize)]
    struct Nullable {
        #[serde(default, deserialize_with = "null_as_default")]
        name: String,
        #[serde(default, deserialize_with = "null_as_default")]
        count: i64,
        #[serde(default, deserialize_with = "null_as_default")]
        flag: Option<bool>,
        #[serde(default, deserialize_with = "null_as_default")]
        labels: BTreeMap<String, String>,
    }

    #[test]
    fn test_null_decodes_to_default() {
        let parsed: Nullable = serde_json::from_str(
            r#"{"name": null, "count": null, "flag": null, "labels": null}"#,
        )
        .unwrap();
        assert_eq!(parsed, Nullable::default());

        let parsed: Nullable = serde_json::from_str(r#"{"name": "prod", "flag": false}"#).unwrap();
        assert_eq!(parsed.name, "prod");
        assert_eq!(parsed.flag, Some(false));
    }

    #[test]
    fn test_zero_float_and_null_value_are_empty() {
        assert!(is_empty(&0.0_f64));
        assert!(!is_empty(&1.5_f64));
        assert!(is_empty(&serde_json::Value::Null));
        assert!(!is_empty(&serde_json::json!({})));
    }
}
