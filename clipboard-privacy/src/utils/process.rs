// clipboard-privacy/src/utils/process.rs
//! Helpers for invoking external tools.
//!
//! Every invocation passes arguments as a vector, never through a shell, and
//! any clipboard content travels over the child's standard input.

use log::debug;
use std::io::{self, Write};
use std::process::{Command, ExitStatus, Output, Stdio};

/// True when `program` resolves on `PATH`.
pub fn program_exists(program: &str) -> bool {
    which::which(program).is_ok()
}

/// Runs `program` to completion with a closed stdin and captured output.
pub fn run_capture(program: &str, args: &[&str]) -> io::Result<Output> {
    debug!("Running {} {:?}", program, args);
    Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .output()
}

/// Runs `program`, returning its trimmed stdout only if it exited successfully.
pub fn capture_stdout(program: &str, args: &[&str]) -> Option<String> {
    match run_capture(program, args) {
        Ok(output) if output.status.success() => {
            String::from_utf8(output.stdout).ok().map(|s| s.trim().to_string())
        }
        Ok(output) => {
            debug!("{} exited with {}", program, output.status);
            None
        }
        Err(e) => {
            debug!("Failed to run {}: {}", program, e);
            None
        }
    }
}

/// Runs `program` and feeds `input` on its stdin.
///
/// The child's stdout and stderr go to the null device: clipboard tools such
/// as `xclip` and `wl-copy` fork a daemon that keeps those handles open, and
/// capturing them would block until the daemon exits.
pub fn run_with_stdin(program: &str, args: &[&str], input: &[u8]) -> io::Result<ExitStatus> {
    debug!("Running {} {:?} with {} bytes on stdin", program, args, input.len());
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(input),
        None => Err(io::Error::new(io::ErrorKind::BrokenPipe, "child stdin unavailable")),
    };
    // Stdin is closed here; always reap the child, even when the write failed.
    let status = child.wait();
    written?;
    status
}

/// Short description of a failed exit, including stderr when available.
pub fn describe_failure(program: &str, output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stderr = stderr.trim();
    if stderr.is_empty() {
        format!("{} exited with {}", program, output.status)
    } else {
        format!("{} exited with {}: {}", program, output.status, stderr)
    }
}
