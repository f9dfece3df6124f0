// clipboard-privacy/src/transport/native.rs
//! Clipboard backend using the `arboard` crate.
//!
//! Used on Windows and macOS, where clipboard content outlives the process
//! that set it. On X11 and Wayland `arboard` content disappears when the
//! process exits, so the Linux families use the external tools instead.

use clipboard_privacy_core::ClipboardPrivacyError;

use super::ClipboardTransport;

const NAME: &str = "native";

#[derive(Debug, Default)]
pub struct NativeTransport;

impl NativeTransport {
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardTransport for NativeTransport {
    fn name(&self) -> &str {
        NAME
    }

    fn is_available(&self) -> bool {
        arboard::Clipboard::new().is_ok()
    }

    fn read(&self) -> Result<String, ClipboardPrivacyError> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| ClipboardPrivacyError::read_failure(NAME, e))?;
        clipboard
            .get_text()
            .map_err(|e| ClipboardPrivacyError::read_failure(NAME, e))
    }

    fn write(&self, text: &str) -> Result<(), ClipboardPrivacyError> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| ClipboardPrivacyError::write_failure(NAME, e))?;
        clipboard
            .set_text(text.to_owned())
            .map_err(|e| ClipboardPrivacyError::write_failure(NAME, e))
    }
}
