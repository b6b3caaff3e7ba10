//! Fully populated example values.
//!
//! Every field of a sample record holds a non-empty value, so encoding a
//! sample emits every wire key the record declares. The CLI uses samples as
//! document templates; the tests use them to check wire names.

use std::collections::BTreeMap;

/// A record that can produce an example with every field set.
pub trait Sample {
    fn sample() -> Self;
}

/// A field value that can produce a non-empty example derived from its key.
pub trait SampleValue {
    fn sample_value(key: &str) -> Self;
}

impl SampleValue for String {
    fn sample_value(key: &str) -> Self {
        format!("{key}-value")
    }
}

impl SampleValue for i64 {
    fn sample_value(key: &str) -> Self {
        key.len() as i64
    }
}

impl SampleValue for f64 {
    fn sample_value(key: &str) -> Self {
        key.len() as f64 + 0.5
    }
}

impl SampleValue for bool {
    fn sample_value(_key: &str) -> Self {
        true
    }
}

impl SampleValue for serde_json::Value {
    fn sample_value(key: &str) -> Self {
        serde_json::json!({ "sample": key })
    }
}

impl<T: SampleValue> SampleValue for Option<T> {
    fn sample_value(key: &str) -> Self {
        Some(T::sample_value(key))
    }
}

impl<T: SampleValue> SampleValue for Vec<T> {
    fn sample_value(key: &str) -> Self {
        vec![T::sample_value(key)]
    }
}

impl<T: SampleValue> SampleValue for BTreeMap<String, T> {
    fn sample_value(key: &str) -> Self {
        BTreeMap::from([(format!("{key}-key"), T::sample_value(key))])
    }
}
