// clipboard-privacy/src/cli.rs
//! Command-line interface definition.

use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

use clipboard_privacy_core::SETTINGS_ENV_VAR;

use crate::utils::app_config::DEFAULT_RESTORE_DELAY_MS;

#[derive(Parser, Debug)]
#[command(
    name = "clipboard-privacy",
    version = env!("CARGO_PKG_VERSION"),
    about = "Paste the clipboard with identifying text redacted",
    long_about = "Reads the clipboard, redacts your user name, host name and any configured \
                  patterns, pastes the result into the focused window and puts the original \
                  content back. Bind it to a hotkey with --setup."
)]
pub struct Cli {
    /// Register the desktop hotkey that runs this program.
    #[arg(long, conflicts_with = "remove")]
    pub setup: bool,

    /// Remove the desktop hotkey.
    #[arg(long)]
    pub remove: bool,

    /// Settings file with redaction rules (JSON, or YAML by extension).
    #[arg(long, value_name = "FILE", env = SETTINGS_ENV_VAR)]
    pub config: Option<PathBuf>,

    /// Milliseconds to wait after pasting before restoring the original content.
    #[arg(long, value_name = "MS", default_value_t = DEFAULT_RESTORE_DELAY_MS)]
    pub restore_delay_ms: u64,

    /// Suppress informational messages.
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long, short = 'd', conflicts_with = "quiet")]
    pub debug: bool,
}

impl Cli {
    /// Log level override implied by the flags, if any.
    pub fn log_level(&self) -> Option<LevelFilter> {
        if self.debug {
            Some(LevelFilter::Debug)
        } else if self.quiet {
            Some(LevelFilter::Error)
        } else {
            None
        }
    }
}
