//! YAML formatter implementation.

use anyhow::Result;
use serde::Serialize;

use crate::formatters::{FieldRow, Formatter, SchemaSummary, ValidationReport};

/// YAML formatter.
pub struct YamlFormatter;

#[derive(Serialize)]
struct FieldListing<'a> {
    type_name: &'a str,
    fields: &'a [FieldRow],
}

impl Formatter for YamlFormatter {
    fn format_schemas(&self, schemas: &[SchemaSummary]) -> Result<String> {
        Ok(serde_yaml::to_string(schemas)?)
    }

    fn format_fields(&self, type_name: &str, fields: &[FieldRow]) -> Result<String> {
        Ok(serde_yaml::to_string(&FieldListing { type_name, fields })?)
    }

    fn format_validation(&self, report: &ValidationReport) -> Result<String> {
        Ok(serde_yaml::to_string(report)?)
    }
}
