//! JSON formatter implementation.

use anyhow::Result;
use serde_json::json;

use crate::formatters::{FieldRow, Formatter, SchemaSummary, ValidationReport};

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_schemas(&self, schemas: &[SchemaSummary]) -> Result<String> {
        Ok(serde_json::to_string_pretty(schemas)?)
    }

    fn format_fields(&self, type_name: &str, fields: &[FieldRow]) -> Result<String> {
        Ok(serde_json::to_string_pretty(&json!({
            "type_name": type_name,
            "fields": fields,
        }))?)
    }

    fn format_validation(&self, report: &ValidationReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}
