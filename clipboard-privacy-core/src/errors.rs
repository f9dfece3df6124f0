//! errors.rs - Custom error types for the clipboard-privacy-core library.
//!
//! This module defines the structured error enum shared by the core library
//! and the CLI crate. Per-rule and per-identifier failures are reported with
//! these variants but never abort a run; transport failures abort the
//! remaining steps of a paste-injection run.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in `clipboard-privacy`.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ClipboardPrivacyError {
    #[error("No supported clipboard tool found: {0}")]
    ToolUnavailable(String),

    #[error("Failed to read clipboard via {tool}: {reason}")]
    ReadFailure { tool: String, reason: String },

    #[error("Failed to write clipboard via {tool}: {reason}")]
    WriteFailure { tool: String, reason: String },

    #[error("Failed to compile redaction rule '{0}': {1}")]
    RuleCompileError(String, regex::Error),

    #[error("Rule '{0}': pattern length ({1}) exceeds maximum allowed ({2})")]
    PatternLengthExceeded(String, usize, usize),

    #[error("Failed to load settings: {0}")]
    ConfigLoadError(String),

    #[error("Unsupported environment: {0}")]
    EnvironmentUnsupported(String),

    #[error("Hotkey operation failed: {0}")]
    HotkeyError(String),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),
}

impl ClipboardPrivacyError {
    /// Shorthand for a [`ClipboardPrivacyError::ReadFailure`].
    pub fn read_failure(tool: impl Into<String>, reason: impl ToString) -> Self {
        Self::ReadFailure {
            tool: tool.into(),
            reason: reason.to_string(),
        }
    }

    /// Shorthand for a [`ClipboardPrivacyError::WriteFailure`].
    pub fn write_failure(tool: impl Into<String>, reason: impl ToString) -> Self {
        Self::WriteFailure {
            tool: tool.into(),
            reason: reason.to_string(),
        }
    }
}
