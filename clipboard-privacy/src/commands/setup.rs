// clipboard-privacy/src/commands/setup.rs
//! `--setup` and `--remove`.

use log::info;

use crate::hotkey::HotkeyManager;
use crate::ui::output_format::{error_msg, info_msg, success_msg};

/// Registers the hotkey and reports the result.
pub fn setup_hotkey(manager: &dyn HotkeyManager) {
    info!("Configuring hotkey.");
    match manager.configure() {
        Ok(message) if manager.is_configured() => success_msg(message),
        Ok(message) => info_msg(message),
        Err(e) => error_msg(format!("Failed to set hotkey: {}", e)),
    }
}

/// Removes the hotkey and reports the result.
pub fn remove_hotkey(manager: &dyn HotkeyManager) {
    info!("Removing hotkey.");
    match manager.remove() {
        Ok(message) => info_msg(message),
        Err(e) => error_msg(format!("Failed to remove hotkey: {}", e)),
    }
}
