// clipboard-privacy/src/hotkey/manual.rs
//! Platforms where the shortcut has to be created by hand.

use super::{HotkeyManager, HotkeyResult};
use crate::utils::app_config::AppConfig;
use crate::utils::platform::Platform;

pub struct ManualHotkeys {
    platform: Platform,
    config: AppConfig,
}

impl ManualHotkeys {
    pub fn new(platform: Platform, config: AppConfig) -> Self {
        Self { platform, config }
    }

    /// Step-by-step instructions for binding the hotkey on this platform.
    pub fn guidance(&self) -> String {
        let command = &self.config.command;
        match self.platform {
            Platform::Windows => format!(
                "Automatic hotkey setup is not available on Windows.\n\
                 Create a shortcut to the executable, open its Properties and set a \
                 'Shortcut key' such as Ctrl + Alt + C.\nTarget: {}",
                command
            ),
            Platform::MacOs => format!(
                "Automatic hotkey setup is not available on macOS.\n\
                 Create a Quick Action in Automator that runs the shell script below, then \
                 assign it a shortcut in System Settings > Keyboard > Keyboard Shortcuts > Services.\n\
                 Script: {}",
                command
            ),
            _ => format!(
                "Your desktop environment is not supported for automatic hotkey setup.\n\
                 Add a custom keyboard shortcut in your desktop settings that runs:\n{}\n\
                 Suggested key combination: {}",
                command, self.config.hotkey
            ),
        }
    }
}

impl HotkeyManager for ManualHotkeys {
    fn configure(&self) -> HotkeyResult {
        Ok(self.guidance())
    }

    fn remove(&self) -> HotkeyResult {
        Ok(format!(
            "Remove the shortcut you created for this command manually:\n{}",
            self.config.command
        ))
    }

    /// Manual shortcuts cannot be detected.
    fn is_configured(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use std::time::Duration;

    fn config() -> AppConfig {
        AppConfig::new(Path::new("/opt/clipboard-privacy"), None, Duration::ZERO)
    }

    #[test]
    fn guidance_names_the_command() {
        for platform in [Platform::Windows, Platform::MacOs, Platform::LinuxX11] {
            let manager = ManualHotkeys::new(platform, config());
            assert!(manager.configure().unwrap().contains("/opt/clipboard-privacy"));
            assert!(!manager.is_configured());
        }
    }

    #[test]
    fn unknown_desktop_suggests_the_default_hotkey() {
        let manager = ManualHotkeys::new(Platform::LinuxWayland, config());
        assert!(manager.guidance().contains("<Control><Alt>c"));
    }
}
