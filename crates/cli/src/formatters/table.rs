//! Table formatter implementation.
//!
//! Responsibilities:
//! - Format listings as tab-separated tables with a header row.
//! - Format validation reports as short human-readable lines.

use anyhow::Result;

use crate::formatters::{FieldRow, Formatter, SchemaSummary, ValidationReport};

/// Table formatter.
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn format_schemas(&self, schemas: &[SchemaSummary]) -> Result<String> {
        if schemas.is_empty() {
            return Ok("No schemas found.".to_string());
        }

        let mut output = String::from("TYPE\tFIELDS\tSECRETS\n");
        for schema in schemas {
            output.push_str(&format!(
                "{}\t{}\t{}\n",
                schema.type_name, schema.fields, schema.secret_fields
            ));
        }
        Ok(output)
    }

    fn format_fields(&self, type_name: &str, fields: &[FieldRow]) -> Result<String> {
        if fields.is_empty() {
            return Ok(format!("{type_name} declares no fields."));
        }

        let mut output = String::from("FIELD\tSECRET\n");
        for field in fields {
            let secret = if field.secret { "yes" } else { "" };
            output.push_str(&format!("{}\t{}\n", field.name, secret));
        }
        Ok(output)
    }

    fn format_validation(&self, report: &ValidationReport) -> Result<String> {
        let mut output = format!("{}: valid {}", report.source, report.type_name);
        if report.unknown_fields.is_empty() {
            output.push('\n');
        } else {
            output.push_str(&format!(
                " ({} unknown field(s) ignored)\n",
                report.unknown_fields.len()
            ));
            for field in &report.unknown_fields {
                output.push_str(&format!("  unknown field: {field}\n"));
            }
        }
        Ok(output)
    }
}
