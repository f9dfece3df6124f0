// clipboard-privacy/src/main.rs
//! clipboard-privacy entry point.

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use clipboard_privacy::cli::Cli;
use clipboard_privacy::commands::{run, setup};
use clipboard_privacy::hotkey::manager_for;
use clipboard_privacy::logger;
use clipboard_privacy::ui::output_format::error_msg;
use clipboard_privacy::utils::app_config::AppConfig;
use clipboard_privacy::utils::platform::{check_environment, Platform};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init_logger(cli.log_level());

    let platform = Platform::detect();
    if let Err(e) = check_environment(platform) {
        error_msg(e.to_string());
        return ExitCode::FAILURE;
    }

    match dispatch(&cli, platform) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error_msg(format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn dispatch(cli: &Cli, platform: Platform) -> Result<()> {
    let config = AppConfig::from_cli(cli)?;
    log::debug!("Platform: {}, config: {:?}", platform, config);

    if cli.setup {
        setup::setup_hotkey(manager_for(platform, &config).as_ref());
    } else if cli.remove {
        setup::remove_hotkey(manager_for(platform, &config).as_ref());
    } else {
        run::run_once(platform, &config, cli.quiet)?;
    }
    Ok(())
}
