//! Shared traits implemented by every record type.

/// Serialized field descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// Exact wire key, identical to the matching `FIELD_*` constant.
    pub name: &'static str,
    /// Whether the value is a credential (password, private key, client secret).
    pub secret: bool,
}

/// A management API record with a fixed set of optional fields.
pub trait Record {
    /// Schema type name, e.g. `globalOpenstackOpts`.
    const TYPE_NAME: &'static str;

    /// Every serialized field, in declaration order.
    const FIELDS: &'static [Field];

    /// Look up a field descriptor by its wire key.
    fn field(name: &str) -> Option<&'static Field> {
        Self::FIELDS.iter().find(|field| field.name == name)
    }

    /// Iterate over the wire keys of all fields.
    fn field_names() -> impl Iterator<Item = &'static str> {
        Self::FIELDS.iter().map(|field| field.name)
    }
}
