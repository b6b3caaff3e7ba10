//! Error types for the Rancher record client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while decoding, encoding, or validating records.
#[derive(Error, Debug)]
pub enum ClientError {
    /// JSON encode/decode failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML encode/decode failure.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// No record is registered under this type name.
    #[error("Unknown record type: {0}")]
    UnknownType(String),

    /// A record document was not a JSON/YAML object.
    #[error("Expected an object for {type_name}, found {found}")]
    NotAnObject {
        type_name: &'static str,
        found: &'static str,
    },

    /// The document carries keys the record does not declare.
    #[error("Unknown fields for {type_name}: {}", .fields.join(", "))]
    UnknownFields {
        type_name: &'static str,
        fields: Vec<String>,
    },

    /// Unsupported document format name or file extension.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

impl ClientError {
    /// Check if this error means the input document itself is invalid.
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            Self::Json(_) | Self::Yaml(_) | Self::NotAnObject { .. } | Self::UnknownFields { .. }
        )
    }
}
