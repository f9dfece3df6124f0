// clipboard-privacy-core/tests/config_integration_tests.rs
use anyhow::Result;
use std::io::Write;
use tempfile::{Builder, NamedTempFile};
use test_log::test;

use clipboard_privacy_core::config::{RedactionRule, Settings};
use clipboard_privacy_core::ClipboardPrivacyError;

fn settings_file(suffix: &str, content: &str) -> Result<NamedTempFile> {
    let mut file = Builder::new().suffix(suffix).tempfile()?;
    file.write_all(content.as_bytes())?;
    Ok(file)
}

#[test]
fn test_load_json_settings() -> Result<()> {
    let file = settings_file(
        ".json",
        r#"{
  "rules": [
    {"pattern": "ACME-\\d{4}", "replacement": "[PROJECT]"},
    {"pattern": "10\\.0\\.\\d+\\.\\d+", "replacement": "[IP]"}
  ]
}"#,
    )?;
    let settings = Settings::load_from_file(file.path())?;
    assert_eq!(settings.rules.len(), 2);
    assert_eq!(settings.rules[0], RedactionRule::new(r"ACME-\d{4}", "[PROJECT]"));
    assert_eq!(settings.rules[1].replacement, "[IP]");
    Ok(())
}

#[test]
fn test_load_yaml_settings() -> Result<()> {
    let file = settings_file(
        ".yml",
        r#"
rules:
  - name: ticket
    pattern: "TICKET-\\d+"
    replace_with: "[TICKET]"
"#,
    )?;
    let settings = Settings::load_from_file(file.path())?;
    assert_eq!(settings.rules.len(), 1);
    assert_eq!(settings.rules[0].label(), "ticket");
    assert_eq!(settings.rules[0].replacement, "[TICKET]");
    Ok(())
}

#[test]
fn test_missing_file_is_config_load_error() {
    let err = Settings::load_from_file("/nonexistent/clipboard-privacy.json").unwrap_err();
    assert!(matches!(err, ClipboardPrivacyError::ConfigLoadError(_)));
}

#[test]
fn test_load_or_default_degrades_to_empty() -> Result<()> {
    let broken = settings_file(".json", "{ \"rules\": [ ")?;
    assert_eq!(Settings::load_or_default(Some(broken.path())), Settings::default());
    assert_eq!(
        Settings::load_or_default(Some(std::path::Path::new("/nonexistent/x.json"))),
        Settings::default()
    );
    assert_eq!(Settings::load_or_default(None), Settings::default());
    Ok(())
}

#[test]
fn test_invalid_regex_still_loads() -> Result<()> {
    // Loading does not validate patterns; the compiler skips them later.
    let file = settings_file(".json", r#"{"rules": [{"pattern": "(", "replacement": "x"}]}"#)?;
    let settings = Settings::load_from_file(file.path())?;
    assert_eq!(settings.rules.len(), 1);
    Ok(())
}
