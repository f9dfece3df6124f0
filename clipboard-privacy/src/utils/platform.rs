// clipboard-privacy/src/utils/platform.rs
//! Host platform detection.
//!
//! The platform is detected once at startup and then drives every per-OS
//! choice: clipboard transport candidates, the paste simulator, identifier
//! discovery and the hotkey manager.

use clipboard_privacy_core::ClipboardPrivacyError;
use std::env;
use std::fmt;

/// Environment variable that names the display-server family.
pub const SESSION_TYPE_VAR: &str = "XDG_SESSION_TYPE";

/// The platform families the tool distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    /// Linux and other free Unixes running X11 (or no reported session type).
    LinuxX11,
    LinuxWayland,
    Unsupported,
}

impl Platform {
    /// Detects the running platform from the compile target and session type.
    pub fn detect() -> Self {
        let session_type = env::var(SESSION_TYPE_VAR).ok();
        Self::from_parts(env::consts::OS, session_type.as_deref())
    }

    /// Maps an OS name (as in `std::env::consts::OS`) and session type to a platform.
    pub fn from_parts(os: &str, session_type: Option<&str>) -> Self {
        match os {
            "windows" => Platform::Windows,
            "macos" => Platform::MacOs,
            "linux" | "freebsd" | "openbsd" | "netbsd" | "dragonfly" => {
                if session_type.is_some_and(|s| s.eq_ignore_ascii_case("wayland")) {
                    Platform::LinuxWayland
                } else {
                    Platform::LinuxX11
                }
            }
            _ => Platform::Unsupported,
        }
    }

    pub fn is_linux(self) -> bool {
        matches!(self, Platform::LinuxX11 | Platform::LinuxWayland)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Windows => "Windows",
            Platform::MacOs => "macOS",
            Platform::LinuxX11 => "Linux (X11)",
            Platform::LinuxWayland => "Linux (Wayland)",
            Platform::Unsupported => env::consts::OS,
        };
        f.write_str(name)
    }
}

/// First-run environment check, performed before any other logic.
pub fn check_environment(platform: Platform) -> Result<(), ClipboardPrivacyError> {
    match platform {
        Platform::Unsupported => Err(ClipboardPrivacyError::EnvironmentUnsupported(format!(
            "{} is not supported; Windows, macOS or a Linux/BSD desktop is required.",
            env::consts::OS
        ))),
        _ => Ok(()),
    }
}
