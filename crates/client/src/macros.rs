//! Declaration macro for management API records.
//!
//! Responsibilities:
//! - Emit the struct, its `FIELD_*` wire-key constants, and the `Record` impl
//!   from a single declaration so keys and constants cannot drift apart.
//! - Emit `Redact`, a secret-masking `Debug`, and `Sample` impls.
//!
//! Does NOT handle:
//! - Generic records (see `models::common::Collection`, written by hand).
//! - Registry membership (records are listed in `registry.rs`).
//!
//! # Syntax
//!
//! ```text
//! record! {
//!     /// Record documentation.
//!     pub struct GlobalOpenstackOpts => "globalOpenstackOpts" {
//!         /// Field documentation.
//!         FIELD_AUTH_URL: auth_url: String = "auth-url",
//!         FIELD_PASSWORD: password: String = "password" secret,
//!     }
//! }
//! ```
//!
//! Each field line is `CONSTANT: field: Type = "wire-key"`, optionally followed
//! by `secret` for credential values. Every field is optional on the wire: it
//! decodes to `Default` when missing or `null` and is skipped on encode when empty.

macro_rules! record {
    (@secret) => {
        false
    };
    (@secret secret) => {
        true
    };

    (@redact $target:expr) => {
        $crate::redact::Redact::redact($target)
    };
    (@redact $target:expr, secret) => {
        $crate::redact::mask($target)
    };

    (
        $(#[$meta:meta])*
        pub struct $name:ident => $type_name:literal {
            $(
                $(#[$field_meta:meta])*
                $konst:ident : $field:ident : $ty:ty = $key:literal $($flag:ident)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        pub struct $name {
            $(
                $(#[$field_meta])*
                #[serde(
                    rename = $key,
                    default,
                    deserialize_with = "crate::serde_helpers::null_as_default",
                    skip_serializing_if = "crate::serde_helpers::is_empty"
                )]
                pub $field: $ty,
            )*
        }

        impl $name {
            $(
                #[doc = concat!("Wire key `", $key, "`.")]
                pub const $konst: &'static str = $key;
            )*
        }

        impl $crate::record::Record for $name {
            const TYPE_NAME: &'static str = $type_name;
            const FIELDS: &'static [$crate::record::Field] = &[
                $(
                    $crate::record::Field {
                        name: $key,
                        secret: record!(@secret $($flag)?),
                    },
                )*
            ];
        }

        impl $crate::redact::Redact for $name {
            fn redact(&mut self) {
                $(
                    record!(@redact &mut self.$field $(, $flag)?);
                )*
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let shown = $crate::redact::redacted(self);
                f.debug_struct(stringify!($name))
                    $(.field(stringify!($field), &shown.$field))*
                    .finish()
            }
        }

        impl $crate::sample::Sample for $name {
            fn sample() -> Self {
                Self {
                    $($field: $crate::sample::SampleValue::sample_value($key),)*
                }
            }
        }

        impl $crate::sample::SampleValue for $name {
            fn sample_value(_key: &str) -> Self {
                <Self as $crate::sample::Sample>::sample()
            }
        }
    };
}
