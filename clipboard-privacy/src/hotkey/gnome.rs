// clipboard-privacy/src/hotkey/gnome.rs
//! GNOME custom keybindings through `gsettings`.

use clipboard_privacy_core::ClipboardPrivacyError;
use log::{debug, warn};

use super::gvariant::{format_string, format_string_array, parse_string, parse_string_array};
use super::{HotkeyManager, HotkeyResult};
use crate::utils::app_config::AppConfig;
use crate::utils::process::{describe_failure, run_capture};

pub const KEY_SCHEMA: &str = "org.gnome.settings-daemon.plugins.media-keys";
pub const BINDING_SCHEMA: &str = "org.gnome.settings-daemon.plugins.media-keys.custom-keybinding";
const LIST_KEY: &str = "custom-keybindings";
const BINDING_PATH_PREFIX: &str =
    "/org/gnome/settings-daemon/plugins/media-keys/custom-keybindings/";

/// The subset of `gsettings` the GNOME manager needs.
pub trait GSettings {
    fn list_schemas(&self) -> Result<Vec<String>, ClipboardPrivacyError>;
    fn get(&self, schema: &str, key: &str) -> Result<String, ClipboardPrivacyError>;
    fn set(&self, schema: &str, key: &str, value: &str) -> Result<(), ClipboardPrivacyError>;
    fn reset(&self, schema: &str, key: &str) -> Result<(), ClipboardPrivacyError>;
}

/// The real `gsettings` binary.
#[derive(Debug, Default)]
pub struct GSettingsCommand;

impl GSettingsCommand {
    fn run(&self, args: &[&str]) -> Result<String, ClipboardPrivacyError> {
        let output = run_capture("gsettings", args).map_err(|e| {
            ClipboardPrivacyError::HotkeyError(format!("could not run gsettings: {}", e))
        })?;
        if !output.status.success() {
            return Err(ClipboardPrivacyError::HotkeyError(describe_failure("gsettings", &output)));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl GSettings for GSettingsCommand {
    fn list_schemas(&self) -> Result<Vec<String>, ClipboardPrivacyError> {
        Ok(self.run(&["list-schemas"])?.lines().map(|l| l.trim().to_string()).collect())
    }

    fn get(&self, schema: &str, key: &str) -> Result<String, ClipboardPrivacyError> {
        self.run(&["get", schema, key]).map(|s| s.trim().to_string())
    }

    fn set(&self, schema: &str, key: &str, value: &str) -> Result<(), ClipboardPrivacyError> {
        self.run(&["set", schema, key, value]).map(|_| ())
    }

    fn reset(&self, schema: &str, key: &str) -> Result<(), ClipboardPrivacyError> {
        self.run(&["reset", schema, key]).map(|_| ())
    }
}

pub struct GnomeHotkeys<G: GSettings = GSettingsCommand> {
    config: AppConfig,
    gsettings: G,
}

impl GnomeHotkeys<GSettingsCommand> {
    pub fn new(config: AppConfig) -> Self {
        Self::with_gsettings(config, GSettingsCommand)
    }
}

impl<G: GSettings> GnomeHotkeys<G> {
    pub fn with_gsettings(config: AppConfig, gsettings: G) -> Self {
        Self { config, gsettings }
    }

    /// Relocatable schema path of our binding.
    pub fn binding_path(&self) -> String {
        format!("{}{}/", BINDING_PATH_PREFIX, self.config.binding_name)
    }

    fn binding_schema(path: &str) -> String {
        format!("{}:{}", BINDING_SCHEMA, path)
    }

    fn ensure_schema(&self) -> Result<(), ClipboardPrivacyError> {
        if self.gsettings.list_schemas()?.iter().any(|s| s == KEY_SCHEMA) {
            Ok(())
        } else {
            Err(ClipboardPrivacyError::HotkeyError(
                "Required schema not found. Please ensure you are using GNOME.".to_string(),
            ))
        }
    }

    fn registered_paths(&self) -> Result<Vec<String>, ClipboardPrivacyError> {
        let raw = self.gsettings.get(KEY_SCHEMA, LIST_KEY)?;
        parse_string_array(&raw).map_err(|e| {
            ClipboardPrivacyError::HotkeyError(format!(
                "unexpected {} value '{}': {}",
                LIST_KEY, raw, e
            ))
        })
    }

    fn binding_name_at(&self, path: &str) -> Option<String> {
        let raw = self.gsettings.get(&Self::binding_schema(path), "name").ok()?;
        parse_string(&raw).ok()
    }
}

impl<G: GSettings> HotkeyManager for GnomeHotkeys<G> {
    fn configure(&self) -> HotkeyResult {
        self.ensure_schema()?;
        let path = self.binding_path();
        let schema = Self::binding_schema(&path);

        self.gsettings.set(&schema, "name", &format_string(&self.config.binding_name))?;
        self.gsettings.set(&schema, "command", &format_string(&self.config.command))?;
        self.gsettings.set(&schema, "binding", &format_string(&self.config.hotkey))?;

        let mut paths = self.registered_paths()?;
        if !paths.contains(&path) {
            paths.push(path);
            self.gsettings.set(KEY_SCHEMA, LIST_KEY, &format_string_array(&paths))?;
        }

        Ok(format!("Hotkey '{}' set successfully for GNOME.", self.config.hotkey))
    }

    fn remove(&self) -> HotkeyResult {
        self.ensure_schema()?;
        let path = self.binding_path();
        let paths = self.registered_paths()?;
        if !paths.contains(&path) {
            return Ok("No clipboard-privacy hotkey is registered with GNOME.".to_string());
        }

        let schema = Self::binding_schema(&path);
        for key in ["name", "command", "binding"] {
            self.gsettings.reset(&schema, key)?;
        }
        let remaining: Vec<String> = paths.into_iter().filter(|p| *p != path).collect();
        self.gsettings.set(KEY_SCHEMA, LIST_KEY, &format_string_array(&remaining))?;

        Ok(format!("Hotkey '{}' removed successfully for GNOME.", self.config.hotkey))
    }

    fn is_configured(&self) -> bool {
        if let Err(e) = self.ensure_schema() {
            debug!("GNOME hotkey check skipped: {}", e);
            return false;
        }
        match self.registered_paths() {
            Ok(paths) => {
                let ours = Some(self.config.binding_name.as_str());
                paths.iter().any(|p| self.binding_name_at(p).as_deref() == ours)
            }
            Err(e) => {
                warn!("Could not query GNOME hotkey configuration: {}", e);
                false
            }
        }
    }
}
