//! Normalize command implementation.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rancher_client::NormalizeOptions;
use rancher_client::format::render_value;
use rancher_config::Config;
use serde_json::Value;

use crate::commands::{display_source, document_format, read_document, resolve_schema};
use crate::formatters::output_result;

/// Decode `file` into the record type and return the re-encoded document.
///
/// Secret fields are masked unless `show_secrets` is set.
pub fn normalized(
    type_name: &str,
    file: &Path,
    input_format: Option<&str>,
    show_secrets: bool,
) -> Result<Value> {
    let schema = resolve_schema(type_name)?;
    let document = read_document(file, input_format)?;

    schema
        .normalize(
            document,
            NormalizeOptions {
                redact: !show_secrets,
            },
        )
        .with_context(|| format!("{} is not a valid {}", display_source(file), schema.type_name()))
}

pub fn run(
    type_name: &str,
    file: &Path,
    input_format: Option<&str>,
    to: Option<&str>,
    config: &Config,
    output_file: Option<PathBuf>,
) -> Result<()> {
    let format = document_format(to, config.output_format)?;
    let value = normalized(type_name, file, input_format, config.show_secrets)?;

    let output = render_value(format, &value)?;
    output_result(&output, output_file.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;

    #[test]
    fn test_normalize_drops_empty_and_unknown_and_masks_secrets() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("s3.json");
        fs::write(
            &path,
            r#"{"bucketName": "snaps", "region": "", "secretKey": "shh", "bogus": 1}"#,
        )
        .unwrap();

        let value = normalized("s3BackupConfig", &path, None, false).unwrap();
        assert_eq!(value, json!({"bucketName": "snaps", "secretKey": "*****"}));

        let value = normalized("s3BackupConfig", &path, None, true).unwrap();
        assert_eq!(value, json!({"bucketName": "snaps", "secretKey": "shh"}));
    }
}
