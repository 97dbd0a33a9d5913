// Sol-1 - Byte Summation Sketch
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

use sol_config::SketchConfig;
use std::io::Write;

#[test]
fn test_full_config_parses() {
    let yaml = r#"
schema_version: "1.0"
baud_rate: 115200
interval_ms: 50
iterations: 12
max_console_bytes: "512B"
"#;
    let config = SketchConfig::from_yaml(yaml).unwrap();
    assert_eq!(config.baud_rate, 115200);
    assert_eq!(config.interval_ms, 50);
    assert_eq!(config.iterations, Some(12));
    assert_eq!(config.console_limit().unwrap(), Some(512));
}

#[test]
fn test_partial_config_keeps_defaults() {
    let yaml = r#"
iterations: 3
"#;
    let config = SketchConfig::from_yaml(yaml).unwrap();
    assert_eq!(config.schema_version, "1.0");
    assert_eq!(config.baud_rate, sol_sketch::BAUD_RATE);
    assert_eq!(config.interval_ms, sol_sketch::LOOP_INTERVAL_MS);
    assert_eq!(config.iterations, Some(3));
}

#[test]
fn test_unknown_field_rejected() {
    let yaml = r#"
interval_ms: 10
delay_ms: 10
"#;
    let err = SketchConfig::from_yaml(yaml).unwrap_err();
    assert!(format!("{:#}", err).contains("delay_ms"), "{:#}", err);
}

#[test]
fn test_unsupported_schema_rejected() {
    let yaml = r#"
schema_version: "2.0"
"#;
    let err = SketchConfig::from_yaml(yaml).unwrap_err();
    assert!(err.to_string().contains("Unsupported schema_version '2.0'"));
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "interval_ms: 0").unwrap();
    writeln!(file, "iterations: 1").unwrap();

    let config = SketchConfig::from_file(file.path()).unwrap();
    assert_eq!(config.interval_ms, 0);
    assert_eq!(config.iterations, Some(1));
}

#[test]
fn test_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.yaml");

    let err = SketchConfig::from_file(&path).unwrap_err();
    assert!(err.to_string().contains("absent.yaml"));
}
