// clipboard-privacy/src/injector/mod.rs
//! Paste-keystroke simulation.
//!
//! A simulator sends the platform's paste shortcut to the foreground
//! application and reports whether it believes that worked. `false` means
//! nothing was pasted, and the caller leaves the sanitized text on the
//! clipboard for the user to paste manually.

use log::debug;

use crate::utils::platform::Platform;

pub mod command;
#[cfg(windows)]
pub mod keyboard;

pub use command::{AppleScriptSimulator, XdotoolSimulator};
#[cfg(windows)]
pub use keyboard::KeyboardEventSimulator;

pub trait PasteSimulator {
    fn name(&self) -> &str;

    /// Sends one paste keystroke. Returns `true` if it was sent successfully.
    fn simulate_paste(&self) -> bool;
}

/// Always reports "not simulated".
///
/// Used on Wayland, where no compositor-neutral way to inject keystrokes
/// exists, and on platforms without a simulator.
#[derive(Debug, Default)]
pub struct NoopSimulator;

impl PasteSimulator for NoopSimulator {
    fn name(&self) -> &str {
        "none"
    }

    fn simulate_paste(&self) -> bool {
        debug!("Paste simulation is not available on this platform.");
        false
    }
}

/// Picks the simulator for a platform.
pub fn simulator_for(platform: Platform) -> Box<dyn PasteSimulator> {
    match platform {
        Platform::Windows => windows_simulator(),
        Platform::MacOs => Box::new(AppleScriptSimulator),
        Platform::LinuxX11 => Box::new(XdotoolSimulator),
        Platform::LinuxWayland | Platform::Unsupported => Box::new(NoopSimulator),
    }
}

#[cfg(windows)]
fn windows_simulator() -> Box<dyn PasteSimulator> {
    Box::new(KeyboardEventSimulator)
}

#[cfg(not(windows))]
fn windows_simulator() -> Box<dyn PasteSimulator> {
    Box::new(NoopSimulator)
}
