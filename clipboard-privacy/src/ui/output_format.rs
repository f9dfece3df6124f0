// clipboard-privacy/src/ui/output_format.rs
//! Prefixed, optionally coloured status messages.
//!
//! Everything the tool says to the user goes to stderr; stdout is never used,
//! so nothing can end up mixed into a pipeline by accident.

use is_terminal::IsTerminal;
use owo_colors::{AnsiColors, OwoColorize};
use std::io::{self, Write};

fn print_styled<W: Write>(
    writer: &mut W,
    prefix: &str,
    message: &str,
    color: AnsiColors,
    supports_color: bool,
) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{}", format!("{}{}", prefix, message).color(color))
    } else {
        writeln!(writer, "{}{}", prefix, message)
    }
}

pub fn print_info_message<W: Write>(w: &mut W, message: &str, color: bool) -> io::Result<()> {
    print_styled(w, "", message, AnsiColors::Cyan, color)
}

pub fn print_success_message<W: Write>(w: &mut W, message: &str, color: bool) -> io::Result<()> {
    print_styled(w, "", message, AnsiColors::Green, color)
}

pub fn print_warn_message<W: Write>(w: &mut W, message: &str, color: bool) -> io::Result<()> {
    print_styled(w, "Warning: ", message, AnsiColors::Yellow, color)
}

pub fn print_error_message<W: Write>(w: &mut W, message: &str, color: bool) -> io::Result<()> {
    print_styled(w, "Error: ", message, AnsiColors::Red, color)
}

/// Prints an info message to stderr.
pub fn info_msg(msg: impl AsRef<str>) {
    let supports_color = io::stderr().is_terminal();
    let _ = print_info_message(&mut io::stderr(), msg.as_ref(), supports_color);
}

/// Prints a success message to stderr.
pub fn success_msg(msg: impl AsRef<str>) {
    let supports_color = io::stderr().is_terminal();
    let _ = print_success_message(&mut io::stderr(), msg.as_ref(), supports_color);
}

/// Prints a warning to stderr.
pub fn warn_msg(msg: impl AsRef<str>) {
    let supports_color = io::stderr().is_terminal();
    let _ = print_warn_message(&mut io::stderr(), msg.as_ref(), supports_color);
}

/// Prints an error to stderr.
pub fn error_msg(msg: impl AsRef<str>) {
    let supports_color = io::stderr().is_terminal();
    let _ = print_error_message(&mut io::stderr(), msg.as_ref(), supports_color);
}
