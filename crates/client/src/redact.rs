//! Masking of credential fields before records are displayed or logged.
//!
//! Responsibilities:
//! - Replace every non-empty secret field with [`REDACTED`], recursing into nested records.
//! - Back the `Debug` impls of records so secrets never reach log output.
//!
//! Does NOT handle:
//! - Secrets inside opaque JSON sub-documents (their schema is unknown here).

use std::collections::BTreeMap;

/// Placeholder written in place of a secret value.
pub const REDACTED: &str = "*****";

/// Values that may contain secret fields.
pub trait Redact {
    /// Mask all secret fields reachable from `self`.
    fn redact(&mut self);
}

/// Mask a secret string in place. Empty values stay empty so they remain omitted.
pub fn mask(value: &mut String) {
    if !value.is_empty() {
        *value = REDACTED.to_string();
    }
}

/// Return a redacted copy of a record.
pub fn redacted<T: Redact + Clone>(value: &T) -> T {
    let mut copy = value.clone();
    copy.redact();
    copy
}

macro_rules! redact_nothing {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Redact for $ty {
                fn redact(&mut self) {}
            }
        )*
    };
}

redact_nothing!(String, i64, f64, bool, serde_json::Value);

impl<T: Redact> Redact for Option<T> {
    fn redact(&mut self) {
        if let Some(value) = self {
            value.redact();
        }
    }
}

impl<T: Redact> Redact for Vec<T> {
    fn redact(&mut self) {
        self.iter_mut().for_each(Redact::redact);
    }
}

impl<K, V: Redact> Redact for BTreeMap<K, V> {
    fn redact(&mut self) {
        self.values_mut().for_each(Redact::redact);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GlobalVsphereOpts, VirtualCenterConfig, VsphereCloudProvider};

    #[test]
    fn test_mask_leaves_empty_values_empty() {
        let mut empty = String::new();
        mask(&mut empty);
        assert!(empty.is_empty());

        let mut secret = "hunter2".to_string();
        mask(&mut secret);
        assert_eq!(secret, REDACTED);
    }

    #[test]
    fn test_redact_recurses_into_nested_records_and_maps() {
        let mut provider = VsphereCloudProvider {
            global: Some(GlobalVsphereOpts {
                user: "admin".to_string(),
                password: "global-secret".to_string(),
                ..Default::default()
            }),
            virtual_center: [(
                "vc1.example.com".to_string(),
                VirtualCenterConfig {
                    password: "vc-secret".to_string(),
                    ..Default::default()
                },
            )]
            .into_iter()
            .collect(),
            ..Default::default()
        };

        provider.redact();

        let global = provider.global.as_ref().unwrap();
        assert_eq!(global.user, "admin");
        assert_eq!(global.password, REDACTED);
        assert_eq!(provider.virtual_center["vc1.example.com"].password, REDACTED);
    }

    #[test]
    fn test_debug_output_hides_secrets() {
        let opts = GlobalVsphereOpts {
            password: "do-not-print".to_string(),
            ..Default::default()
        };
        let rendered = format!("{opts:?}");
        assert!(!rendered.contains("do-not-print"));
        assert!(rendered.contains(REDACTED));
    }
}
