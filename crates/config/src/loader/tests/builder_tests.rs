//! Builder defaults, overrides and validation.

use serial_test::serial;
use tempfile::TempDir;

use super::{env_lock, loader_env, write_config_file};
use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;
use crate::types::{Config, OutputFormat};

#[test]
fn test_build_without_layers_is_default() {
    let config = ConfigLoader::new().build().unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.log_level, "warn");
}

#[test]
fn test_builder_methods_set_values() {
    let config = ConfigLoader::new()
        .with_output_format(OutputFormat::Yaml)
        .with_strict(true)
        .with_show_secrets(true)
        .with_log_level("debug".to_string())
        .build()
        .unwrap();

    assert_eq!(config.output_format, OutputFormat::Yaml);
    assert!(config.strict);
    assert!(config.show_secrets);
    assert_eq!(config.log_level, "debug");
}

#[test]
fn test_log_level_accepts_filter_directives() {
    let config = ConfigLoader::new()
        .with_log_level("rancher_cli=debug,warn".to_string())
        .build()
        .unwrap();
    assert_eq!(config.log_level, "rancher_cli=debug,warn");
}

#[test]
fn test_invalid_log_level_is_rejected() {
    let err = ConfigLoader::new()
        .with_log_level("loud".to_string())
        .build()
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { ref var, .. } if var == "log_level"));
}

#[test]
#[serial]
fn test_overrides_beat_env_and_file() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = write_config_file(temp_dir.path(), r#"{"strict": false, "output_format": "yaml"}"#);

    temp_env::with_vars(loader_env(&[("RANCHER_STRICT", "true")]), || {
        let config = ConfigLoader::new()
            .with_config_path(path.clone())
            .from_file()
            .unwrap()
            .from_env()
            .unwrap()
            .with_strict(false)
            .build()
            .unwrap();

        assert!(!config.strict);
        assert_eq!(config.output_format, OutputFormat::Yaml);
    });
}
