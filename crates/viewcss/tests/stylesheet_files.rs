//! Integration tests for loading stylesheets from disk.

use std::fs;

use tempfile::TempDir;
use viewcss::{StyleSheet, StyleTable, StylesheetError};

const CSS: &str = r#"
/* views */
ns_object.view {
    background-color: red;
    color: #00FF00FF;
}

.color { color: #0000FFFF; }
"#;

const YAML: &str = r##"
ns_object.view:
  background-color: red
  color: "#00FF00FF"
.color:
  color: "#0000FFFF"
"##;

const JSON: &str = r##"{
    "ns_object.view": { "background-color": "red", "color": "#00FF00FF" },
    ".color": { "color": "#0000FFFF" }
}"##;

fn assert_sample(sheet: &StyleSheet) {
    let resolved = sheet.resolve("ns_object", &["view", "color"]);
    assert_eq!(resolved.get("background-color"), Some("red"));
    assert_eq!(resolved.get("color"), Some("#0000FFFF"));
}

#[test]
fn loads_every_format_the_same() {
    let dir = TempDir::new().unwrap();
    for (name, content) in [("a.css", CSS), ("b.yaml", YAML), ("c.yml", YAML), ("d.json", JSON)] {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();

        let sheet = StyleSheet::from_file(&path).unwrap();
        assert_sample(&sheet);
        assert_eq!(sheet.source_path(), Some(path.as_path()));
    }
}

#[test]
fn parse_errors_carry_the_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.yaml");
    fs::write(&path, "not: [valid: yaml").unwrap();

    match StyleSheet::from_file(&path) {
        Err(StylesheetError::Parse { path: Some(p), .. }) => assert_eq!(p, path),
        other => panic!("expected parse error with path, got {:?}", other),
    }
}

#[test]
fn unsupported_extension_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("styles.toml");
    fs::write(&path, "[x]").unwrap();

    assert!(matches!(
        StyleSheet::from_file(&path),
        Err(StylesheetError::UnsupportedFormat { .. })
    ));
}

#[test]
fn reload_picks_up_changes() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("app.css");
    fs::write(&path, ".title { color: red; }").unwrap();

    let table = StyleTable::new();
    table.load_file(&path).unwrap();
    assert_eq!(table.resolve("label", &["title"]).get("color"), Some("red"));

    fs::write(&path, ".title { color: blue; }").unwrap();
    table.reload().unwrap();
    assert_eq!(table.resolve("label", &["title"]).get("color"), Some("blue"));
}

#[test]
fn failed_reload_keeps_current_rules() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("app.json");
    fs::write(&path, r#"{".title": {"color": "red"}}"#).unwrap();

    let table = StyleTable::new();
    table.load_file(&path).unwrap();

    fs::write(&path, "{ broken").unwrap();
    assert!(table.reload().is_err());
    assert_eq!(table.resolve("label", &["title"]).get("color"), Some("red"));
}
