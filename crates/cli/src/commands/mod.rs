//! CLI command implementations.

pub mod fields;
pub mod normalize;
pub mod sample;
pub mod schemas;
pub mod validate;

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use rancher_client::Schema;
use rancher_client::format::{self, Format};
use rancher_client::registry;
use rancher_config::OutputFormat as ConfigFormat;
use serde_json::Value;
use tracing::debug;

/// Path that means "read the document from stdin".
const STDIN_PATH: &str = "-";

/// Resolve a user-supplied type name, ignoring ASCII case.
pub fn resolve_schema(type_name: &str) -> Result<&'static Schema> {
    let schema = registry::require(type_name)
        .with_context(|| format!("Cannot resolve record type '{type_name}' (see `rancher-cli schemas`)"))?;
    debug!(requested = type_name, type_name = schema.type_name(), "resolved record type");
    Ok(schema)
}

/// Read and parse a document.
///
/// The format comes from `input_format` when given, otherwise from the file
/// extension. Stdin defaults to JSON.
pub fn read_document(path: &Path, input_format: Option<&str>) -> Result<Value> {
    let is_stdin = path.as_os_str() == STDIN_PATH;
    let format = match input_format {
        Some(name) => name.parse::<Format>()?,
        None if is_stdin => Format::Json,
        None => Format::from_path(path)?,
    };

    let content = if is_stdin {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read document from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?
    };

    debug!(path = %path.display(), %format, bytes = content.len(), "parsing document");
    format::parse_value(format, &content)
        .with_context(|| format!("Failed to parse {} as {}", display_source(path), format))
}

/// Pick the document format to print: `--to` first, then the configured default.
pub fn document_format(to: Option<&str>, configured: ConfigFormat) -> Result<Format> {
    match to {
        Some(name) => Ok(name.parse::<Format>()?),
        None => Ok(match configured {
            ConfigFormat::Json => Format::Json,
            ConfigFormat::Yaml => Format::Yaml,
        }),
    }
}

/// Name of a document source for messages.
pub fn display_source(path: &Path) -> String {
    if path.as_os_str() == STDIN_PATH {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rancher_client::ClientError;
    use std::path::PathBuf;

    #[test]
    fn test_resolve_schema_ignores_case() {
        let schema = resolve_schema("GlobalOpenstackOpts").unwrap();
        assert_eq!(schema.type_name(), "globalOpenstackOpts");
    }

    #[test]
    fn test_resolve_schema_unknown_keeps_client_error() {
        let err = resolve_schema("notAType").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ClientError>(),
            Some(ClientError::UnknownType(_))
        ));
    }

    #[test]
    fn test_read_document_infers_yaml() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("opts.yml");
        std::fs::write(&path, "router-id: r1\n").unwrap();

        let value = read_document(&path, None).unwrap();
        assert_eq!(value["router-id"], "r1");
    }

    #[test]
    fn test_read_document_input_format_overrides_extension() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("opts.txt");
        std::fs::write(&path, r#"{"router-id": "r1"}"#).unwrap();

        assert!(read_document(&path, None).is_err());
        let value = read_document(&path, Some("json")).unwrap();
        assert_eq!(value["router-id"], "r1");
    }

    #[test]
    fn test_document_format_precedence() {
        assert_eq!(
            document_format(Some("yaml"), ConfigFormat::Json).unwrap(),
            Format::Yaml
        );
        assert_eq!(
            document_format(None, ConfigFormat::Yaml).unwrap(),
            Format::Yaml
        );
        assert!(document_format(Some("xml"), ConfigFormat::Json).is_err());
    }

    #[test]
    fn test_display_source() {
        assert_eq!(display_source(Path::new("-")), "<stdin>");
        assert_eq!(display_source(&PathBuf::from("a.json")), "a.json");
    }
}
