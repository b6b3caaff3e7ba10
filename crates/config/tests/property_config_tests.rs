//! Property-based tests for configuration parsing.
//!
//! Test coverage:
//! - OutputFormat: parsing is case- and whitespace-insensitive, display round-trips
//! - Config: JSON serialization preserves every field
//! - ConfigLoader: every plain level name is accepted in any case

use proptest::prelude::*;

use rancher_config::{Config, ConfigLoader, OutputFormat};

fn output_format_strategy() -> impl Strategy<Value = OutputFormat> {
    prop_oneof![Just(OutputFormat::Json), Just(OutputFormat::Yaml)]
}

fn level_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["trace", "debug", "info", "warn", "error", "off"])
}

/// Randomly upper-case characters of `s`.
fn mixed_case(s: &str) -> impl Strategy<Value = String> {
    let owned = s.to_string();
    prop::collection::vec(any::<bool>(), owned.len()).prop_map(move |flags| {
        owned
            .chars()
            .zip(flags)
            .map(|(c, upper)| if upper { c.to_ascii_uppercase() } else { c })
            .collect()
    })
}

proptest! {
    #[test]
    fn output_format_display_parses_back(format in output_format_strategy()) {
        let parsed: OutputFormat = format.to_string().parse().unwrap();
        prop_assert_eq!(parsed, format);
    }

    #[test]
    fn output_format_parse_ignores_case_and_padding(
        name in prop_oneof![Just("json"), Just("yaml")].prop_flat_map(mixed_case),
        pad in "[ \t]{0,3}",
    ) {
        let input = format!("{pad}{name}{pad}");
        prop_assert!(input.parse::<OutputFormat>().is_ok());
    }

    #[test]
    fn config_json_roundtrip(
        format in output_format_strategy(),
        strict in any::<bool>(),
        show_secrets in any::<bool>(),
        level in level_strategy(),
    ) {
        let config = Config {
            output_format: format,
            strict,
            show_secrets,
            log_level: level.to_string(),
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, config);
    }

    #[test]
    fn plain_levels_accepted_in_any_case(level in level_strategy().prop_flat_map(mixed_case)) {
        let config = ConfigLoader::new().with_log_level(level.clone()).build();
        prop_assert!(config.is_ok(), "{} rejected", level);
    }
}
