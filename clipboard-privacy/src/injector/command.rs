// clipboard-privacy/src/injector/command.rs
//! Simulators that shell out to an input-automation utility.

use log::{debug, warn};

use super::PasteSimulator;
use crate::utils::process::{describe_failure, program_exists, run_capture};

const PASTE_APPLESCRIPT: &str = r#"tell application "System Events" to keystroke "v" using command down"#;

fn run_succeeds(program: &str, args: &[&str]) -> bool {
    match run_capture(program, args) {
        Ok(output) if output.status.success() => true,
        Ok(output) => {
            warn!("Paste simulation failed: {}", describe_failure(program, &output));
            false
        }
        Err(e) => {
            warn!("Paste simulation failed to start {}: {}", program, e);
            false
        }
    }
}

/// X11: `xdotool key --clearmodifiers ctrl+v`.
#[derive(Debug, Default)]
pub struct XdotoolSimulator;

impl PasteSimulator for XdotoolSimulator {
    fn name(&self) -> &str {
        "xdotool"
    }

    fn simulate_paste(&self) -> bool {
        if !program_exists("xdotool") {
            debug!("xdotool not found; cannot simulate paste.");
            return false;
        }
        run_succeeds("xdotool", &["key", "--clearmodifiers", "ctrl+v"])
    }
}

/// macOS: asks System Events to press Cmd+V.
///
/// Requires the terminal (or whatever launches us) to hold the Accessibility
/// permission; without it `osascript` exits non-zero.
#[derive(Debug, Default)]
pub struct AppleScriptSimulator;

impl PasteSimulator for AppleScriptSimulator {
    fn name(&self) -> &str {
        "osascript"
    }

    fn simulate_paste(&self) -> bool {
        run_succeeds("osascript", &["-e", PASTE_APPLESCRIPT])
    }
}
