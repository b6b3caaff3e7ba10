//! Output formatters for listings and reports.
//!
//! Responsibilities:
//! - Provide table, JSON and YAML renderings of schema listings, field
//!   listings and validation reports.
//! - Write rendered output to stdout or a file.
//!
//! Does NOT handle:
//! - Rendering record documents (`normalize` and `sample` use the client codec).
//!
//! Invariants:
//! - Tables use tab-separation for consistent alignment in standard terminals.
//! - JSON and YAML output of an empty listing is an empty sequence; tables print a message.

use std::str::FromStr;

use anyhow::Result;
use serde::Serialize;

mod common;
mod json;
mod table;
mod yaml;

pub use common::{output_result, write_to_file};
pub use json::JsonFormatter;
pub use table::TableFormatter;
pub use yaml::YamlFormatter;

/// Supported listing formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            _ => anyhow::bail!("Invalid output format: {}. Valid options: table, json, yaml", s),
        }
    }
}

/// One row of `rancher-cli schemas`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaSummary {
    pub type_name: &'static str,
    pub fields: usize,
    pub secret_fields: usize,
}

/// One row of `rancher-cli fields`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldRow {
    pub name: &'static str,
    pub secret: bool,
}

/// Result of `rancher-cli validate` for a document that passed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub type_name: &'static str,
    pub source: String,
    pub strict: bool,
    /// Top-level keys the record does not declare (tolerated when not strict).
    pub unknown_fields: Vec<String>,
}

/// Formatter trait for different output types.
pub trait Formatter {
    /// Format the schema listing.
    fn format_schemas(&self, schemas: &[SchemaSummary]) -> Result<String>;

    /// Format the field listing of one record type.
    fn format_fields(&self, type_name: &str, fields: &[FieldRow]) -> Result<String>;

    /// Format a validation report.
    fn format_validation(&self, report: &ValidationReport) -> Result<String>;
}

/// Get a formatter for the specified format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Table => Box::new(TableFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Yaml => Box::new(YamlFormatter),
    }
}

#[cfg(test)]
mod tests;
