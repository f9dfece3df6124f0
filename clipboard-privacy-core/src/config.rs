//! Configuration management for `clipboard-privacy-core`.
//!
//! This module defines the redaction rule and settings structures, and handles
//! loading them from a JSON (or YAML) settings file. Loading is forgiving: a
//! missing or malformed document degrades to an empty rule set, and a single
//! malformed rule entry is skipped while its siblings still load.
//!
//! License: MIT OR Apache-2.0

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::env;
use std::path::{Path, PathBuf};

use crate::errors::ClipboardPrivacyError;

/// Maximum allowed length for a regex pattern string.
pub const MAX_PATTERN_LENGTH: usize = 500;

/// File name of the settings document.
pub const SETTINGS_FILE_NAME: &str = "clipboard-privacy.json";

/// Environment variable that points at an explicit settings file.
pub const SETTINGS_ENV_VAR: &str = "CLIPBOARD_PRIVACY_CONFIG";

const APP_DIR_NAME: &str = "clipboard-privacy";

fn default_replacement() -> String {
    "[REDACTED]".to_string()
}

/// A single pattern/replacement pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct RedactionRule {
    /// Optional label used in diagnostics. Falls back to the pattern.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Unanchored regular expression.
    pub pattern: String,
    /// Text inserted verbatim in place of every match.
    #[serde(default = "default_replacement", alias = "replace_with")]
    pub replacement: String,
}

impl RedactionRule {
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            name: None,
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }

    /// The label used when reporting on this rule.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.pattern)
    }
}

/// Persisted user settings. Only `rules` is recognized.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub rules: Vec<RedactionRule>,
}

/// Document formats accepted for the settings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsFormat {
    Json,
    Yaml,
}

impl SettingsFormat {
    /// Picks the format from a file extension; anything but `.yaml`/`.yml` is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase) {
            Some(ext) if ext == "yaml" || ext == "yml" => SettingsFormat::Yaml,
            _ => SettingsFormat::Json,
        }
    }
}

impl Settings {
    /// Parses a settings document.
    ///
    /// A document that cannot be parsed at all is a `ConfigLoadError`. A document
    /// whose `rules` field is absent or not a list yields an empty rule set, and
    /// entries that are not valid rule objects are skipped.
    pub fn parse(text: &str, format: SettingsFormat) -> Result<Self, ClipboardPrivacyError> {
        let document: Value = match format {
            SettingsFormat::Json => serde_json::from_str(text)
                .map_err(|e| ClipboardPrivacyError::ConfigLoadError(e.to_string()))?,
            SettingsFormat::Yaml => serde_yml::from_str(text)
                .map_err(|e| ClipboardPrivacyError::ConfigLoadError(e.to_string()))?,
        };

        let entries = match document.get("rules") {
            Some(Value::Array(entries)) => entries,
            Some(_) => {
                warn!("Settings field `rules` is not a list; ignoring it.");
                return Ok(Settings::default());
            }
            None => {
                debug!("Settings document has no `rules` field.");
                return Ok(Settings::default());
            }
        };

        let mut rules = Vec::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            match serde_json::from_value::<RedactionRule>(entry.clone()) {
                Ok(rule) => rules.push(rule),
                Err(e) => warn!("Skipping malformed rule at index {}: {}", index, e),
            }
        }

        Ok(Settings { rules })
    }

    /// Loads settings from a file, failing if it cannot be read or parsed.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ClipboardPrivacyError> {
        let path = path.as_ref();
        info!("Loading settings from: {}", path.display());
        let text = std::fs::read_to_string(path).map_err(|e| {
            ClipboardPrivacyError::ConfigLoadError(format!("{}: {}", path.display(), e))
        })?;
        let settings = Self::parse(&text, SettingsFormat::from_path(path)).map_err(|e| match e {
            ClipboardPrivacyError::ConfigLoadError(msg) => {
                ClipboardPrivacyError::ConfigLoadError(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })?;
        info!("Loaded {} rules from file {}.", settings.rules.len(), path.display());
        Ok(settings)
    }

    /// Loads settings, degrading to an empty rule set on any failure.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            debug!("No settings file found; continuing with identifier rules only.");
            return Settings::default();
        };
        match Self::load_from_file(path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("{}. Continuing with an empty rule set.", e);
                Settings::default()
            }
        }
    }
}

/// Locations searched for the settings file, in priority order.
pub fn settings_candidate_paths() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(explicit) = env::var_os(SETTINGS_ENV_VAR).filter(|v| !v.is_empty()) {
        candidates.push(PathBuf::from(explicit));
    }
    if let Some(dir) = dirs::config_dir() {
        candidates.push(dir.join(APP_DIR_NAME).join(SETTINGS_FILE_NAME));
    }
    if let Some(dir) = env::current_exe().ok().and_then(|exe| exe.parent().map(Path::to_path_buf)) {
        candidates.push(dir.join(SETTINGS_FILE_NAME));
    }

    candidates
}

/// Resolves the settings file to use.
///
/// An explicit path is always returned as-is, even if it does not exist, so the
/// caller reports it. Otherwise the first existing candidate wins.
pub fn resolve_settings_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    settings_candidate_paths().into_iter().find(|p| p.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_reads_rules_in_file_order() {
        let json = r#"{"rules": [
            {"pattern": "alice", "replacement": "NAME"},
            {"pattern": "NAME", "replacement": "X"}
        ]}"#;
        let settings = Settings::parse(json, SettingsFormat::Json).unwrap();
        assert_eq!(
            settings.rules,
            vec![RedactionRule::new("alice", "NAME"), RedactionRule::new("NAME", "X")]
        );
    }

    #[test]
    fn parse_accepts_replace_with_alias_and_default_replacement() {
        let json = r#"{"rules": [
            {"pattern": "a", "replace_with": "[A]"},
            {"pattern": "b"}
        ]}"#;
        let settings = Settings::parse(json, SettingsFormat::Json).unwrap();
        assert_eq!(settings.rules[0].replacement, "[A]");
        assert_eq!(settings.rules[1].replacement, "[REDACTED]");
    }

    #[test]
    fn parse_skips_malformed_entries() {
        let json = r#"{"rules": [
            {"replacement": "no pattern"},
            42,
            {"pattern": "ok", "replacement": "OK"}
        ]}"#;
        let settings = Settings::parse(json, SettingsFormat::Json).unwrap();
        assert_eq!(settings.rules, vec![RedactionRule::new("ok", "OK")]);
    }

    #[test]
    fn parse_treats_non_list_rules_as_empty() {
        let settings = Settings::parse(r#"{"rules": "nope"}"#, SettingsFormat::Json).unwrap();
        assert!(settings.rules.is_empty());
        let settings = Settings::parse(r#"{"other": 1}"#, SettingsFormat::Json).unwrap();
        assert!(settings.rules.is_empty());
    }

    #[test]
    fn parse_rejects_broken_document() {
        let err = Settings::parse("{not json", SettingsFormat::Json).unwrap_err();
        assert!(matches!(err, ClipboardPrivacyError::ConfigLoadError(_)));
    }

    #[test]
    fn parse_yaml_document() {
        let yaml = "rules:\n  - pattern: secret\n    replacement: '[S]'\n";
        let settings = Settings::parse(yaml, SettingsFormat::Yaml).unwrap();
        assert_eq!(settings.rules, vec![RedactionRule::new("secret", "[S]")]);
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(SettingsFormat::from_path(Path::new("a.yml")), SettingsFormat::Yaml);
        assert_eq!(SettingsFormat::from_path(Path::new("a.YAML")), SettingsFormat::Yaml);
        assert_eq!(SettingsFormat::from_path(Path::new("a.json")), SettingsFormat::Json);
        assert_eq!(SettingsFormat::from_path(Path::new("noext")), SettingsFormat::Json);
    }

    #[test]
    fn label_falls_back_to_pattern() {
        let mut rule = RedactionRule::new("abc", "X");
        assert_eq!(rule.label(), "abc");
        rule.name = Some("letters".into());
        assert_eq!(rule.label(), "letters");
    }

    #[test]
    fn explicit_settings_path_wins() {
        let p = Path::new("/definitely/not/here.json");
        assert_eq!(resolve_settings_path(Some(p)), Some(p.to_path_buf()));
    }
}
