// clipboard-privacy/src/transport/mod.rs
//! Plain-text clipboard access behind one interface.
//!
//! Backends are probed once per run in a fixed, per-platform preference order;
//! the first one that responds is used for every read and write of that run.

use clipboard_privacy_core::ClipboardPrivacyError;
use log::{debug, info};

use crate::utils::platform::Platform;

pub mod command;
pub mod memory;
#[cfg(feature = "clipboard")]
pub mod native;

pub use command::CommandTransport;
pub use memory::MemoryTransport;
#[cfg(feature = "clipboard")]
pub use native::NativeTransport;

/// Read/write access to the plain-text clipboard.
pub trait ClipboardTransport {
    /// Short name used in diagnostics.
    fn name(&self) -> &str;

    /// Whether the backend can be used on this host.
    fn is_available(&self) -> bool;

    fn read(&self) -> Result<String, ClipboardPrivacyError>;

    fn write(&self, text: &str) -> Result<(), ClipboardPrivacyError>;
}

/// Backends to try on `platform`, most preferred first.
pub fn candidates(platform: Platform) -> Vec<Box<dyn ClipboardTransport>> {
    let mut out: Vec<Box<dyn ClipboardTransport>> = Vec::new();
    match platform {
        Platform::Windows => {
            #[cfg(feature = "clipboard")]
            out.push(Box::new(NativeTransport::new()));
            out.push(Box::new(CommandTransport::powershell()));
        }
        Platform::MacOs => {
            out.push(Box::new(CommandTransport::pasteboard()));
            #[cfg(feature = "clipboard")]
            out.push(Box::new(NativeTransport::new()));
        }
        Platform::LinuxWayland => out.push(Box::new(CommandTransport::wl_clipboard())),
        Platform::LinuxX11 => {
            out.push(Box::new(CommandTransport::xclip()));
            out.push(Box::new(CommandTransport::xsel()));
        }
        Platform::Unsupported => {}
    }
    out
}

/// Install hint shown when nothing responds on `platform`.
pub fn install_hint(platform: Platform) -> &'static str {
    match platform {
        Platform::Windows => "Make sure PowerShell is installed and on PATH.",
        Platform::MacOs => "Ensure pbcopy/pbpaste are available (they ship with macOS).",
        Platform::LinuxWayland => {
            "Detected a Wayland session. Consider installing wl-clipboard: `sudo apt install wl-clipboard`."
        }
        Platform::LinuxX11 => "Please install xclip or xsel using your package manager.",
        Platform::Unsupported => "This platform has no supported clipboard backend.",
    }
}

/// Returns the first candidate that responds.
pub fn select_transport(
    candidates: Vec<Box<dyn ClipboardTransport>>,
) -> Result<Box<dyn ClipboardTransport>, ClipboardPrivacyError> {
    let mut tried = Vec::new();
    for candidate in candidates {
        if candidate.is_available() {
            info!("Using clipboard backend: {}", candidate.name());
            return Ok(candidate);
        }
        debug!("Clipboard backend '{}' is not available.", candidate.name());
        tried.push(candidate.name().to_string());
    }

    let detail = if tried.is_empty() {
        "no backends exist for this platform".to_string()
    } else {
        format!("tried {}", tried.join(", "))
    };
    Err(ClipboardPrivacyError::ToolUnavailable(detail))
}
