//! Schemas command implementation.

use std::path::PathBuf;

use anyhow::Result;
use rancher_client::registry;
use tracing::info;

use crate::formatters::{OutputFormat, SchemaSummary, get_formatter, output_result};

/// Registered schemas whose type name contains `filter` (case-insensitive).
pub fn summaries(filter: Option<&str>) -> Vec<SchemaSummary> {
    let needle = filter.map(str::to_ascii_lowercase);
    registry::schemas()
        .iter()
        .filter(|schema| match &needle {
            Some(needle) => schema.type_name().to_ascii_lowercase().contains(needle),
            None => true,
        })
        .map(|schema| SchemaSummary {
            type_name: schema.type_name(),
            fields: schema.fields().len(),
            secret_fields: schema.secret_fields().count(),
        })
        .collect()
}

pub fn run(filter: Option<String>, output_format: &str, output_file: Option<PathBuf>) -> Result<()> {
    let format: OutputFormat = output_format.parse()?;
    let rows = summaries(filter.as_deref());
    info!(count = rows.len(), "listing schemas");

    let output = get_formatter(format).format_schemas(&rows)?;
    output_result(&output, output_file.as_ref())
}
