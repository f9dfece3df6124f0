// clipboard-privacy/src/utils/app_config.rs
//! Process-start configuration.
//!
//! Values that are fixed for the lifetime of the process (the hotkey, the
//! binding name, the command a desktop shortcut should launch) are gathered
//! here once and passed to the components that need them.

use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cli::Cli;

/// Default hotkey, in GTK accelerator syntax.
pub const DEFAULT_HOTKEY: &str = "<Control><Alt>c";

/// Name under which the desktop shortcut is registered.
pub const BINDING_NAME: &str = "clipboard-privacy";

/// Default wait between a simulated paste and restoring the original content.
pub const DEFAULT_RESTORE_DELAY_MS: u64 = 150;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Accelerator string, e.g. `<Control><Alt>c`.
    pub hotkey: String,
    /// Stable identifier of the registered shortcut.
    pub binding_name: String,
    /// Quoted path of this executable; every shortcut command starts with it.
    pub executable: String,
    /// Command line the shortcut runs.
    pub command: String,
    /// Settings file given on the command line, if any.
    pub settings_path: Option<PathBuf>,
    /// Settle time before the original clipboard content is restored.
    pub restore_delay: Duration,
}

impl AppConfig {
    /// Builds the configuration for this process from parsed arguments.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let exe = env::current_exe()
            .context("Failed to determine the path of the running executable")?;
        let delay = Duration::from_millis(cli.restore_delay_ms);
        Ok(Self::new(&exe, cli.config.clone(), delay))
    }

    pub fn new(exe: &Path, settings_path: Option<PathBuf>, restore_delay: Duration) -> Self {
        Self {
            hotkey: DEFAULT_HOTKEY.to_string(),
            binding_name: BINDING_NAME.to_string(),
            executable: quote_arg(&exe.to_string_lossy()),
            command: shortcut_command(exe, settings_path.as_deref()),
            settings_path,
            restore_delay,
        }
    }

    /// Whether a stored shortcut command launches this executable, whatever
    /// arguments it was registered with.
    pub fn launches_this_executable(&self, command: &str) -> bool {
        command
            .strip_prefix(self.executable.as_str())
            .is_some_and(|rest| rest.is_empty() || rest.starts_with(' '))
    }
}

/// Command line for the desktop shortcut, quoted for the desktop's own argv parser.
pub fn shortcut_command(exe: &Path, settings_path: Option<&Path>) -> String {
    let mut command = quote_arg(&exe.to_string_lossy());
    if let Some(path) = settings_path {
        command.push_str(" --config ");
        command.push_str(&quote_arg(&path.to_string_lossy()));
    }
    command
}

/// Single-quotes an argument when it contains anything but plain path characters.
fn quote_arg(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | '\\' | '.' | '_' | '-' | ':'));
    if plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_paths_are_not_quoted() {
        assert_eq!(
            shortcut_command(Path::new("/usr/local/bin/clipboard-privacy"), None),
            "/usr/local/bin/clipboard-privacy"
        );
    }

    #[test]
    fn paths_with_spaces_and_quotes_are_quoted() {
        assert_eq!(
            shortcut_command(
                Path::new("/home/me/My Tools/clipboard-privacy"),
                Some(Path::new("/home/me/it's.json"))
            ),
            r"'/home/me/My Tools/clipboard-privacy' --config '/home/me/it'\''s.json'"
        );
    }

    #[test]
    fn new_uses_fixed_hotkey_and_name() {
        let config = AppConfig::new(Path::new("/bin/cp"), None, Duration::ZERO);
        assert_eq!(config.hotkey, DEFAULT_HOTKEY);
        assert_eq!(config.binding_name, BINDING_NAME);
        assert_eq!(config.command, "/bin/cp");
    }

    #[test]
    fn stored_command_matches_with_any_arguments() {
        let config = AppConfig::new(Path::new("/opt/cp"), None, Duration::ZERO);
        assert!(config.launches_this_executable("/opt/cp"));
        assert!(config.launches_this_executable("/opt/cp --config /home/me/rules.json"));
        assert!(!config.launches_this_executable("/opt/cpx"));
        assert!(!config.launches_this_executable("xterm"));
    }
}
