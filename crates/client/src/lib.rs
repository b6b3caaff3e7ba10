//! Rancher management `v3` record types.
//!
//! This crate provides typed records for the Rancher management API resource
//! model (cloud providers, auth providers, node templates and pools, etcd
//! backups, RKE cluster configuration) together with a `FIELD_*` constant for
//! every serialized key. Every field is optional on the wire: missing keys
//! decode to empty values and empty values are left out on encode.
//!
//! A static registry maps schema type names to field tables so documents can
//! be validated and normalized without naming the Rust type.

#[macro_use]
mod macros;

pub mod error;
pub mod format;
pub mod models;
pub mod record;
pub mod redact;
pub mod registry;
pub mod sample;
mod serde_helpers;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use error::{ClientError, Result};
pub use format::Format;
pub use models::*;
pub use record::{Field, Record};
pub use redact::{REDACTED, Redact};
pub use registry::{NormalizeOptions, Schema};
pub use sample::Sample;
