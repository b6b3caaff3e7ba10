//! Tag-driven JSON and YAML codec for records.
//!
//! Responsibilities:
//! - Pick a document format from a name or file extension.
//! - Decode and encode records through their serde field tags.
//! - Parse and render untyped documents for validation and normalization.
//!
//! Explicitly does NOT handle:
//! - Reading or writing files (callers pass strings).
//! - Any transport concerns.
//!
//! Invariants / assumptions:
//! - JSON and YAML documents use the same wire keys.
//! - JSON output is pretty-printed; YAML output is serde_yaml's block style.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ClientError, Result};

/// Document format for record input and output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Json,
    Yaml,
}

impl Format {
    /// Infer the format from a file extension (`.json`, `.yaml`, `.yml`).
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        match extension.to_ascii_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "yaml" | "yml" => Ok(Format::Yaml),
            _ => Err(ClientError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

impl FromStr for Format {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "yaml" | "yml" => Ok(Format::Yaml),
            _ => Err(ClientError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Json => write!(f, "json"),
            Format::Yaml => write!(f, "yaml"),
        }
    }
}

/// Decode a typed record from a document.
pub fn decode<T: DeserializeOwned>(format: Format, input: &str) -> Result<T> {
    match format {
        Format::Json => Ok(serde_json::from_str(input)?),
        Format::Yaml => Ok(serde_yaml::from_str(input)?),
    }
}

/// Encode a typed record into a document.
pub fn encode<T: Serialize>(format: Format, value: &T) -> Result<String> {
    match format {
        Format::Json => Ok(serde_json::to_string_pretty(value)?),
        Format::Yaml => Ok(serde_yaml::to_string(value)?),
    }
}

/// Parse a document without a schema.
pub fn parse_value(format: Format, input: &str) -> Result<serde_json::Value> {
    decode(format, input)
}

/// Render an untyped document.
pub fn render_value(format: Format, value: &serde_json::Value) -> Result<String> {
    encode(format, value)
}
