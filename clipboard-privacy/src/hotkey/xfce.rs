// clipboard-privacy/src/hotkey/xfce.rs
//! XFCE custom commands through `xfconf-query`.

use clipboard_privacy_core::ClipboardPrivacyError;
use log::debug;

use super::{HotkeyManager, HotkeyResult};
use crate::utils::app_config::AppConfig;
use crate::utils::process::{capture_stdout, describe_failure, run_capture};

pub const CHANNEL: &str = "xfce4-keyboard-shortcuts";
const CUSTOM_PREFIX: &str = "/commands/custom/";

/// Converts a GTK accelerator to the form XFCE stores, which names the
/// control key `<Primary>`.
pub fn xfce_accelerator(hotkey: &str) -> String {
    hotkey.replace("<Control>", "<Primary>").replace("<Ctrl>", "<Primary>")
}

/// The subset of `xfconf-query` the XFCE manager needs.
pub trait Xfconf {
    /// Current value, or `None` if the property does not exist.
    fn get(&self, channel: &str, property: &str) -> Option<String>;
    fn set_string(&self, channel: &str, property: &str, value: &str) -> XfconfResult;
    fn reset(&self, channel: &str, property: &str) -> XfconfResult;
}

type XfconfResult = Result<(), ClipboardPrivacyError>;

impl<T: Xfconf + ?Sized> Xfconf for &T {
    fn get(&self, channel: &str, property: &str) -> Option<String> {
        (**self).get(channel, property)
    }

    fn set_string(&self, channel: &str, property: &str, value: &str) -> XfconfResult {
        (**self).set_string(channel, property, value)
    }

    fn reset(&self, channel: &str, property: &str) -> XfconfResult {
        (**self).reset(channel, property)
    }
}

/// The real `xfconf-query` binary.
#[derive(Debug, Default)]
pub struct XfconfQuery;

impl XfconfQuery {
    fn run(&self, args: &[&str]) -> XfconfResult {
        let output = run_capture("xfconf-query", args).map_err(|e| {
            ClipboardPrivacyError::HotkeyError(format!("could not run xfconf-query: {}", e))
        })?;
        if output.status.success() {
            Ok(())
        } else {
            Err(ClipboardPrivacyError::HotkeyError(describe_failure("xfconf-query", &output)))
        }
    }
}

impl Xfconf for XfconfQuery {
    fn get(&self, channel: &str, property: &str) -> Option<String> {
        capture_stdout("xfconf-query", &["-c", channel, "-p", property])
    }

    fn set_string(&self, channel: &str, property: &str, value: &str) -> XfconfResult {
        self.run(&["-c", channel, "-p", property, "-n", "-t", "string", "-s", value])
    }

    fn reset(&self, channel: &str, property: &str) -> XfconfResult {
        self.run(&["-c", channel, "-p", property, "-r"])
    }
}

pub struct XfceHotkeys<X: Xfconf = XfconfQuery> {
    config: AppConfig,
    xfconf: X,
}

impl XfceHotkeys<XfconfQuery> {
    pub fn new(config: AppConfig) -> Self {
        Self::with_xfconf(config, XfconfQuery)
    }
}

impl<X: Xfconf> XfceHotkeys<X> {
    pub fn with_xfconf(config: AppConfig, xfconf: X) -> Self {
        Self { config, xfconf }
    }

    /// Property under which the shortcut command is stored.
    pub fn property(&self) -> String {
        format!("{}{}", CUSTOM_PREFIX, xfce_accelerator(&self.config.hotkey))
    }

    /// The stored command, if the property exists and launches us.
    fn our_binding(&self) -> Option<String> {
        let property = self.property();
        let current = self.xfconf.get(CHANNEL, &property);
        debug!("XFCE property {} = {:?}", property, current);
        current.filter(|cmd| self.config.launches_this_executable(cmd))
    }
}

impl<X: Xfconf> HotkeyManager for XfceHotkeys<X> {
    fn configure(&self) -> HotkeyResult {
        self.xfconf.set_string(CHANNEL, &self.property(), &self.config.command)?;
        Ok(format!("Hotkey '{}' set successfully for XFCE.", self.config.hotkey))
    }

    fn remove(&self) -> HotkeyResult {
        if self.our_binding().is_none() {
            return Ok("No clipboard-privacy hotkey is registered with XFCE.".to_string());
        }
        self.xfconf.reset(CHANNEL, &self.property())?;
        Ok(format!("Hotkey '{}' removed successfully for XFCE.", self.config.hotkey))
    }

    fn is_configured(&self) -> bool {
        self.our_binding().is_some()
    }
}
