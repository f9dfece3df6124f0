// clipboard-privacy/src/transport/command.rs
//! Clipboard backends that drive an external read tool and write tool.

use clipboard_privacy_core::ClipboardPrivacyError;

use super::ClipboardTransport;
use crate::utils::process::{describe_failure, program_exists, run_capture, run_with_stdin};

/// One external program invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolCommand {
    pub program: &'static str,
    pub args: &'static [&'static str],
}

impl ToolCommand {
    pub const fn new(program: &'static str, args: &'static [&'static str]) -> Self {
        Self { program, args }
    }
}

/// A backend made of a read command and a write command.
///
/// Written content always goes over stdin; it is never part of argv.
#[derive(Debug, Clone)]
pub struct CommandTransport {
    name: &'static str,
    read_cmd: ToolCommand,
    write_cmd: ToolCommand,
    /// Strip one trailing line break the read tool appends to its output.
    strip_trailing_newline: bool,
}

impl CommandTransport {
    pub fn new(name: &'static str, read_cmd: ToolCommand, write_cmd: ToolCommand) -> Self {
        Self {
            name,
            read_cmd,
            write_cmd,
            strip_trailing_newline: false,
        }
    }

    pub fn wl_clipboard() -> Self {
        Self::new(
            "wl-clipboard",
            ToolCommand::new("wl-paste", &["--no-newline"]),
            ToolCommand::new("wl-copy", &[]),
        )
    }

    pub fn xclip() -> Self {
        Self::new(
            "xclip",
            ToolCommand::new("xclip", &["-selection", "clipboard", "-o"]),
            ToolCommand::new("xclip", &["-selection", "clipboard", "-i"]),
        )
    }

    pub fn xsel() -> Self {
        Self::new(
            "xsel",
            ToolCommand::new("xsel", &["--clipboard", "--output"]),
            ToolCommand::new("xsel", &["--clipboard", "--input"]),
        )
    }

    pub fn pasteboard() -> Self {
        Self::new(
            "pbcopy",
            ToolCommand::new("pbpaste", &[]),
            ToolCommand::new("pbcopy", &[]),
        )
    }

    pub fn powershell() -> Self {
        let mut transport = Self::new(
            "powershell",
            ToolCommand::new(
                "powershell",
                &[
                    "-NoProfile",
                    "-NonInteractive",
                    "-Command",
                    "[Console]::OutputEncoding = [Text.Encoding]::UTF8; Get-Clipboard -Raw",
                ],
            ),
            ToolCommand::new(
                "powershell",
                &[
                    "-NoProfile",
                    "-NonInteractive",
                    "-Command",
                    "[Console]::InputEncoding = [Text.Encoding]::UTF8; Set-Clipboard -Value ([Console]::In.ReadToEnd())",
                ],
            ),
        );
        transport.strip_trailing_newline = true;
        transport
    }

    pub fn read_command(&self) -> ToolCommand {
        self.read_cmd
    }

    pub fn write_command(&self) -> ToolCommand {
        self.write_cmd
    }
}

impl ClipboardTransport for CommandTransport {
    fn name(&self) -> &str {
        self.name
    }

    fn is_available(&self) -> bool {
        program_exists(self.read_cmd.program) && program_exists(self.write_cmd.program)
    }

    fn read(&self) -> Result<String, ClipboardPrivacyError> {
        let output = run_capture(self.read_cmd.program, self.read_cmd.args)
            .map_err(|e| ClipboardPrivacyError::read_failure(self.name, e))?;
        if !output.status.success() {
            return Err(ClipboardPrivacyError::read_failure(
                self.name,
                describe_failure(self.read_cmd.program, &output),
            ));
        }
        let text = String::from_utf8(output.stdout).map_err(|_| {
            ClipboardPrivacyError::read_failure(self.name, "clipboard content is not valid UTF-8")
        })?;
        Ok(if self.strip_trailing_newline {
            strip_one_newline(text)
        } else {
            text
        })
    }

    fn write(&self, text: &str) -> Result<(), ClipboardPrivacyError> {
        let status = run_with_stdin(self.write_cmd.program, self.write_cmd.args, text.as_bytes())
            .map_err(|e| ClipboardPrivacyError::write_failure(self.name, e))?;
        if status.success() {
            Ok(())
        } else {
            Err(ClipboardPrivacyError::write_failure(
                self.name,
                format!("{} exited with {}", self.write_cmd.program, status),
            ))
        }
    }
}

fn strip_one_newline(mut text: String) -> String {
    if text.ends_with("\r\n") {
        text.truncate(text.len() - 2);
    } else if text.ends_with('\n') {
        text.truncate(text.len() - 1);
    }
    text
}
