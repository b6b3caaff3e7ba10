//! Fields command implementation.

use std::path::PathBuf;

use anyhow::Result;
use rancher_client::Schema;

use crate::commands::resolve_schema;
use crate::formatters::{FieldRow, OutputFormat, get_formatter, output_result};

/// Field rows in declaration order.
pub fn rows(schema: &Schema) -> Vec<FieldRow> {
    schema
        .fields()
        .iter()
        .map(|field| FieldRow {
            name: field.name,
            secret: field.secret,
        })
        .collect()
}

pub fn run(type_name: &str, output_format: &str, output_file: Option<PathBuf>) -> Result<()> {
    let format: OutputFormat = output_format.parse()?;
    let schema = resolve_schema(type_name)?;

    let output = get_formatter(format).format_fields(schema.type_name(), &rows(schema))?;
    output_result(&output, output_file.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_use_wire_keys_in_order() {
        let schema = resolve_schema("metadataOpenstackOpts").unwrap();
        let names: Vec<_> = rows(schema).into_iter().map(|row| row.name).collect();
        assert_eq!(names, vec!["search-order", "request-timeout"]);
    }

    #[test]
    fn test_rows_flag_secrets() {
        let schema = resolve_schema("s3BackupConfig").unwrap();
        let secrets: Vec<_> = rows(schema)
            .into_iter()
            .filter(|row| row.secret)
            .map(|row| row.name)
            .collect();
        assert_eq!(secrets, vec!["secretKey"]);
    }
}
