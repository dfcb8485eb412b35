//! Loading navigation configuration from disk.

#![cfg(feature = "serde")]

mod common;

use common::{child_id, dashboard_config, section_id};
use sams_navigator::{Badge, ConfigError, NavigationConfig};
use std::io::Write;

const JSON_CONFIG: &str = r#"{
  "sections": [
    { "id": "dashboard", "title": "Dashboard", "path": "/dashboard", "icon": "home" },
    { "id": "grants", "title": "Grants", "path": "/dashboard/grants",
      "badge": { "text": "New", "variant": "success" },
      "children": [
        { "id": "cash-transfers", "title": "Cash Transfers",
          "path": "/dashboard/grants/cash-transfers/home/2024", "badge": "2024" }
      ] }
  ],
  "resources": [
    { "id": "docs", "title": "Documentation", "path": "https://docs.example.org",
      "external": true }
  ]
}"#;

const TOML_CONFIG: &str = r#"
[[sections]]
id = "schools"
title = "Schools"
path = "/dashboard/schools"

[[sections.children]]
id = "attendance"
title = "Attendance"
path = "/dashboard/schools/attendance"

[[resources]]
id = "help"
title = "Help"
path = "/help"
"#;

fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

#[test]
fn test_load_json_file() {
    common::init_logging();
    let file = write_temp(".json", JSON_CONFIG);
    let config = NavigationConfig::from_path(file.path()).unwrap();

    assert_eq!(config.entry_count(), 4);
    let grants = config.find_entry("grants").unwrap();
    assert_eq!(grants.badge, Some(Badge::styled("New", "success")));
    let (_, cash) = config.find_child("cash-transfers").unwrap();
    assert_eq!(cash.badge, Some(Badge::plain("2024")));
    assert!(config.find_entry("docs").unwrap().external);

    let resolved = config.resolve("/dashboard/grants/cash-transfers/home/2026");
    assert_eq!(section_id(&resolved), Some("grants"));
    assert_eq!(child_id(&resolved), Some("cash-transfers"));
}

#[test]
fn test_load_toml_file() {
    common::init_logging();
    let file = write_temp(".toml", TOML_CONFIG);
    let config = NavigationConfig::from_path(file.path()).unwrap();

    let resolved = config.resolve("/dashboard/schools/attendance/week/3");
    assert_eq!(child_id(&resolved), Some("attendance"));
    assert_eq!(section_id(&config.resolve("/help")), Some("help"));
}

#[test]
fn test_unsupported_extension() {
    common::init_logging();
    let file = write_temp(".yaml", "sections: []");
    assert!(matches!(
        NavigationConfig::from_path(file.path()),
        Err(ConfigError::UnsupportedFormat { .. })
    ));
}

#[test]
fn test_missing_file() {
    common::init_logging();
    let dir = tempfile::tempdir().unwrap();
    let err = NavigationConfig::from_path(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn test_invalid_toml() {
    common::init_logging();
    assert!(matches!(
        NavigationConfig::from_toml_str("[[sections]\nid ="),
        Err(ConfigError::Toml(_))
    ));
}

#[test]
fn test_relative_child_path_rejected() {
    common::init_logging();
    let json = r#"{ "sections": [ { "id": "s", "title": "S", "path": "/s",
        "children": [ { "id": "c", "title": "C", "path": "s/c" } ] } ] }"#;
    assert!(matches!(
        NavigationConfig::from_json_str(json),
        Err(ConfigError::RelativePath { id, .. }) if id == "c"
    ));
}

#[test]
fn test_json_roundtrip_through_file() {
    common::init_logging();
    let config = dashboard_config();
    let file = write_temp(".json", &config.to_json_string().unwrap());
    assert_eq!(NavigationConfig::from_path(file.path()).unwrap(), config);
}
