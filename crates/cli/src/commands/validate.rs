//! Validate command implementation.
//!
//! Responsibilities:
//! - Parse a document and check it against a record type.
//! - Report unknown top-level fields as warnings, or fail in strict mode.
//!
//! Does NOT handle:
//! - Unknown keys inside nested records (they are dropped on decode).
//!
//! Invariants:
//! - Parse, decode and strict-mode failures surface as `ClientError` so the
//!   binary exits with the validation exit code.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::warn;

use crate::commands::{display_source, read_document, resolve_schema};
use crate::formatters::{OutputFormat, ValidationReport, get_formatter, output_result};

/// Validate one document and build the report.
pub fn check(
    type_name: &str,
    file: &Path,
    input_format: Option<&str>,
    strict: bool,
) -> Result<ValidationReport> {
    let schema = resolve_schema(type_name)?;
    let document = read_document(file, input_format)?;
    let source = display_source(file);

    let unknown_fields = schema
        .validate(&document, strict)
        .with_context(|| format!("{source} is not a valid {}", schema.type_name()))?;

    for field in &unknown_fields {
        warn!(type_name = schema.type_name(), field = %field, "unknown field ignored");
    }

    Ok(ValidationReport {
        type_name: schema.type_name(),
        source,
        strict,
        unknown_fields,
    })
}

pub fn run(
    type_name: &str,
    file: &Path,
    input_format: Option<&str>,
    strict: bool,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<()> {
    let format: OutputFormat = output_format.parse()?;
    let report = check(type_name, file, input_format, strict)?;

    let output = get_formatter(format).format_validation(&report)?;
    output_result(&output, output_file.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rancher_client::ClientError;
    use std::fs;

    fn write(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_unknown_fields_reported_when_lenient() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "route.json", r#"{"router-id": "r1", "routerId": "r2"}"#);

        let report = check("routeOpenstackOpts", &path, None, false).unwrap();
        assert_eq!(report.unknown_fields, vec!["routerId".to_string()]);
        assert!(!report.strict);
    }

    #[test]
    fn test_unknown_fields_fail_when_strict() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "route.json", r#"{"routerId": "r2"}"#);

        let err = check("routeOpenstackOpts", &path, None, true).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ClientError>(),
            Some(ClientError::UnknownFields { .. })
        ));
    }

    #[test]
    fn test_wrong_value_type_is_client_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "meta.yaml", "request-timeout: soon\n");

        let err = check("metadataOpenstackOpts", &path, None, false).unwrap_err();
        let client_err = err.chain().find_map(|c| c.downcast_ref::<ClientError>());
        assert!(client_err.is_some_and(ClientError::is_validation_error));
        assert!(format!("{err:#}").contains("is not a valid metadataOpenstackOpts"));
    }

    #[test]
    fn test_malformed_document_is_client_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "broken.json", "{ \"router-id\": ");

        let err = check("routeOpenstackOpts", &path, None, false).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ClientError>(),
            Some(ClientError::Json(_))
        ));
    }
}
