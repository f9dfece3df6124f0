// clipboard-privacy/tests/cli_integration_tests.rs
//! Integration tests for the `clipboard-privacy` binary.
//!
//! The binary touches the real clipboard and desktop settings, so these tests
//! only exercise paths that are safe without a display: argument handling and
//! a run where no clipboard tool can be found.

use anyhow::Result;
use assert_cmd::Command;
#[allow(unused_imports)]
use predicates::prelude::*;

use strip_ansi_escapes::strip as strip_ansi_escapes_fn;

fn strip_ansi(bytes: &[u8]) -> String {
    String::from_utf8_lossy(&strip_ansi_escapes_fn(bytes)).to_string()
}

#[test]
fn help_lists_the_hotkey_flags() -> Result<()> {
    Command::cargo_bin("clipboard-privacy")?
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--setup"))
        .stdout(predicate::str::contains("--remove"))
        .stdout(predicate::str::contains("--restore-delay-ms"));
    Ok(())
}

#[test]
fn setup_and_remove_cannot_be_combined() -> Result<()> {
    Command::cargo_bin("clipboard-privacy")?
        .args(["--setup", "--remove"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
    Ok(())
}

#[test]
fn quiet_and_debug_cannot_be_combined() -> Result<()> {
    Command::cargo_bin("clipboard-privacy")?
        .args(["-q", "-d"])
        .assert()
        .failure();
    Ok(())
}

#[cfg(target_os = "linux")]
mod without_clipboard_tools {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn isolated_command(empty_path: &Path, config_home: &Path) -> Result<Command> {
        let mut cmd = Command::cargo_bin("clipboard-privacy")?;
        cmd.env("PATH", empty_path)
            .env("XDG_CONFIG_HOME", config_home)
            .env("XDG_SESSION_TYPE", "x11")
            .env_remove("XDG_CURRENT_DESKTOP")
            .env_remove("CLIPBOARD_PRIVACY_CONFIG")
            .env_remove("RUST_LOG");
        Ok(cmd)
    }

    #[test]
    fn run_reports_missing_tool_and_exits_cleanly() -> Result<()> {
        let bin = tempdir()?;
        let config_home = tempdir()?;

        let output = isolated_command(bin.path(), config_home.path())?.output()?;
        assert!(output.status.success(), "run should end cleanly: {:?}", output);

        let stderr = strip_ansi(&output.stderr);
        assert!(stderr.contains("No hotkey is currently set"), "stderr: {}", stderr);
        assert!(stderr.contains("No supported clipboard tool found"), "stderr: {}", stderr);
        assert!(stderr.contains("install xclip or xsel"), "stderr: {}", stderr);
        assert!(output.stdout.is_empty());
        Ok(())
    }

    #[test]
    fn quiet_run_only_prints_the_error() -> Result<()> {
        let bin = tempdir()?;
        let config_home = tempdir()?;

        let output = isolated_command(bin.path(), config_home.path())?.arg("-q").output()?;
        assert!(output.status.success());

        let stderr = strip_ansi(&output.stderr);
        assert!(!stderr.contains("No hotkey is currently set"), "stderr: {}", stderr);
        assert!(stderr.contains("No supported clipboard tool found"), "stderr: {}", stderr);
        Ok(())
    }

    #[test]
    fn broken_settings_file_does_not_stop_the_run() -> Result<()> {
        let bin = tempdir()?;
        let config_home = tempdir()?;
        let settings = config_home.path().join("rules.json");
        fs::write(&settings, "{ not json")?;

        isolated_command(bin.path(), config_home.path())?
            .arg("--config")
            .arg(&settings)
            .assert()
            .success()
            .stderr(predicate::str::contains("Continuing with an empty rule set"));
        Ok(())
    }

    #[test]
    fn setup_on_unknown_desktop_prints_guidance() -> Result<()> {
        let bin = tempdir()?;
        let config_home = tempdir()?;

        let output = isolated_command(bin.path(), config_home.path())?.arg("--setup").output()?;
        assert!(output.status.success());
        let stderr = strip_ansi(&output.stderr);
        assert!(stderr.contains("not supported for automatic hotkey setup"), "stderr: {}", stderr);
        assert!(stderr.contains("<Control><Alt>c"), "stderr: {}", stderr);
        Ok(())
    }
}
