// clipboard-privacy/src/commands/run.rs
//! The default action: sanitize, paste and restore once.

use anyhow::Result;
use log::{debug, info};
use std::time::Duration;

use clipboard_privacy_core::{
    build_rule_set, resolve_settings_path, RegexEngine, SanitizationEngine, Settings,
};

use crate::controller::{PasteController, RunOutcome};
use crate::discovery::probe_for;
use crate::hotkey::manager_for;
use crate::injector::{simulator_for, PasteSimulator};
use crate::transport::{candidates, install_hint, select_transport, ClipboardTransport};
use crate::ui::output_format::{error_msg, info_msg, warn_msg};
use crate::utils::app_config::AppConfig;
use crate::utils::platform::Platform;

pub const NO_HOTKEY_MESSAGE: &str =
    "No hotkey is currently set. You can add one using the --setup option.";
pub const LEFT_SANITIZED_MESSAGE: &str =
    "Could not paste automatically. The sanitized text is on the clipboard; paste it manually.";

/// Runs the whole pipeline on the live clipboard.
///
/// Transport and paste failures are reported on stderr and end the run
/// normally; only setup problems return an error.
pub fn run_once(platform: Platform, config: &AppConfig, quiet: bool) -> Result<()> {
    info!("Starting clipboard-privacy run on {}.", platform);

    if !manager_for(platform, config).is_configured() && !quiet {
        info_msg(NO_HOTKEY_MESSAGE);
    }

    let settings_path = resolve_settings_path(config.settings_path.as_deref());
    let settings = Settings::load_or_default(settings_path.as_deref());
    let platform_info = probe_for(platform).discover();
    let rules = build_rule_set(&settings, &platform_info);
    let engine = RegexEngine::new(&rules);
    if engine.skipped_rules() > 0 && !quiet {
        warn_msg(format!(
            "{} redaction rule(s) could not be compiled and were skipped.",
            engine.skipped_rules()
        ));
    }

    let transport = match select_transport(candidates(platform)) {
        Ok(transport) => transport,
        Err(e) => {
            error_msg(e.to_string());
            info_msg(install_hint(platform));
            return Ok(());
        }
    };
    let simulator = simulator_for(platform);

    run_pipeline(
        transport.as_ref(),
        simulator.as_ref(),
        &engine,
        config.restore_delay,
        quiet,
    );
    Ok(())
}

/// Drives one controller run and reports the outcome to the user.
///
/// Returns the outcome, or `None` when the run was aborted.
pub fn run_pipeline(
    transport: &dyn ClipboardTransport,
    simulator: &dyn PasteSimulator,
    engine: &dyn SanitizationEngine,
    restore_delay: Duration,
    quiet: bool,
) -> Option<RunOutcome> {
    let mut controller =
        PasteController::new(transport, simulator, engine).with_restore_delay(restore_delay);
    match controller.run() {
        Ok(RunOutcome::Restored) => {
            debug!("Original clipboard content restored via {}.", transport.name());
            Some(RunOutcome::Restored)
        }
        Ok(RunOutcome::LeftSanitized) => {
            if !quiet {
                info_msg(LEFT_SANITIZED_MESSAGE);
            }
            Some(RunOutcome::LeftSanitized)
        }
        Err(e) => {
            error_msg(e.to_string());
            None
        }
    }
}
