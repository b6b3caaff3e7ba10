use super::*;

fn summaries() -> Vec<SchemaSummary> {
    vec![
        SchemaSummary {
            type_name: "githubConfig",
            fields: 30,
            secret_fields: 1,
        },
        SchemaSummary {
            type_name: "routeOpenstackOpts",
            fields: 1,
            secret_fields: 0,
        },
    ]
}

fn report(unknown: &[&str]) -> ValidationReport {
    ValidationReport {
        type_name: "cluster",
        source: "cluster.json".to_string(),
        strict: false,
        unknown_fields: unknown.iter().map(|s| s.to_string()).collect(),
    }
}

#[test]
fn test_output_format_parsing() {
    assert_eq!("TABLE".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
    assert_eq!("yml".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
    let err = "csv".parse::<OutputFormat>().unwrap_err();
    assert!(err.to_string().contains("Valid options"));
}

#[test]
fn test_table_schemas_has_header_and_rows() {
    let output = TableFormatter.format_schemas(&summaries()).unwrap();
    let lines: Vec<_> = output.lines().collect();
    assert_eq!(lines[0], "TYPE\tFIELDS\tSECRETS");
    assert_eq!(lines[1], "githubConfig\t30\t1");
    assert_eq!(lines[2], "routeOpenstackOpts\t1\t0");
}

#[test]
fn test_empty_listings() {
    assert_eq!(TableFormatter.format_schemas(&[]).unwrap(), "No schemas found.");
    assert_eq!(JsonFormatter.format_schemas(&[]).unwrap(), "[]");
    assert_eq!(YamlFormatter.format_schemas(&[]).unwrap().trim(), "[]");
}

#[test]
fn test_table_fields_marks_secrets() {
    let fields = [
        FieldRow {
            name: "clientId",
            secret: false,
        },
        FieldRow {
            name: "clientSecret",
            secret: true,
        },
    ];
    let output = TableFormatter.format_fields("githubConfig", &fields).unwrap();
    assert!(output.contains("clientId\t\n"));
    assert!(output.contains("clientSecret\tyes\n"));
}

#[test]
fn test_json_fields_wraps_type_name() {
    let fields = [FieldRow {
        name: "router-id",
        secret: false,
    }];
    let output = JsonFormatter
        .format_fields("routeOpenstackOpts", &fields)
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["type_name"], "routeOpenstackOpts");
    assert_eq!(value["fields"][0]["name"], "router-id");
    assert_eq!(value["fields"][0]["secret"], false);
}

#[test]
fn test_table_validation_lists_unknown_fields() {
    let clean = TableFormatter.format_validation(&report(&[])).unwrap();
    assert_eq!(clean, "cluster.json: valid cluster\n");

    let noisy = TableFormatter
        .format_validation(&report(&["bogus", "extra"]))
        .unwrap();
    assert!(noisy.starts_with("cluster.json: valid cluster (2 unknown field(s) ignored)"));
    assert!(noisy.contains("  unknown field: bogus\n"));
    assert!(noisy.contains("  unknown field: extra\n"));
}

#[test]
fn test_yaml_validation_report() {
    let output = YamlFormatter.format_validation(&report(&["bogus"])).unwrap();
    assert!(output.contains("type_name: cluster"));
    assert!(output.contains("- bogus"));
}

#[test]
fn test_get_formatter_dispatch() {
    let output = get_formatter(OutputFormat::Json)
        .format_schemas(&summaries())
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value[0]["type_name"], "githubConfig");
}

#[test]
fn test_write_to_file_creates_parent_dirs() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("nested").join("out.txt");
    write_to_file("hello\n", &path).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello\n");
}
