// clipboard-privacy/src/hotkey/mod.rs
//! Desktop hotkey registration.
//!
//! These are thin wrappers around each desktop's own settings tools. Results
//! are reported to the user as console text by the command layer; the rest of
//! the program only asks whether a hotkey is configured.

use clipboard_privacy_core::ClipboardPrivacyError;
use log::debug;
use std::env;

use crate::utils::app_config::AppConfig;
use crate::utils::platform::Platform;
use crate::utils::process::capture_stdout;

pub mod gnome;
pub mod gvariant;
pub mod manual;
pub mod xfce;

pub use gnome::GnomeHotkeys;
pub use manual::ManualHotkeys;
pub use xfce::XfceHotkeys;

/// Outcome message of a successful configure/remove.
pub type HotkeyResult = Result<String, ClipboardPrivacyError>;

pub trait HotkeyManager {
    /// Registers the shortcut. Returns a message for the user.
    fn configure(&self) -> HotkeyResult;

    /// Unregisters the shortcut. Returns a message for the user.
    fn remove(&self) -> HotkeyResult;

    fn is_configured(&self) -> bool;
}

/// Linux desktop environments with hotkey support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Desktop {
    Gnome,
    Xfce,
}

/// Classifies `XDG_CURRENT_DESKTOP`.
///
/// Ubuntu sessions report `ubuntu:GNOME`; a bare `ubuntu` value is only
/// treated as GNOME when `gnome_shell_running` confirms it.
pub fn detect_desktop(
    current_desktop: &str,
    gnome_shell_running: impl FnOnce() -> bool,
) -> Option<Desktop> {
    let lower = current_desktop.to_ascii_lowercase();
    if lower.contains("gnome") {
        Some(Desktop::Gnome)
    } else if lower.contains("xfce") {
        Some(Desktop::Xfce)
    } else if lower.contains("ubuntu") && gnome_shell_running() {
        Some(Desktop::Gnome)
    } else {
        None
    }
}

fn gnome_shell_running() -> bool {
    capture_stdout("pgrep", &["gnome-shell"]).is_some_and(|out| !out.is_empty())
}

/// Picks the hotkey manager for the platform and current desktop.
pub fn manager_for(platform: Platform, config: &AppConfig) -> Box<dyn HotkeyManager> {
    if !platform.is_linux() {
        return Box::new(ManualHotkeys::new(platform, config.clone()));
    }
    let current = env::var("XDG_CURRENT_DESKTOP").unwrap_or_default();
    let desktop = detect_desktop(&current, gnome_shell_running);
    debug!("Desktop '{}' detected as {:?}", current, desktop);
    match desktop {
        Some(Desktop::Gnome) => Box::new(GnomeHotkeys::new(config.clone())),
        Some(Desktop::Xfce) => Box::new(XfceHotkeys::new(config.clone())),
        None => Box::new(ManualHotkeys::new(platform, config.clone())),
    }
}
