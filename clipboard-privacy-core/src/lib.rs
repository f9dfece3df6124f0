// clipboard-privacy-core/src/lib.rs
//! # clipboard-privacy Core Library
//!
//! `clipboard-privacy-core` provides the platform-independent half of
//! clipboard-privacy: the settings model, the conversion of discovered system
//! identifiers into redaction rules, rule compilation, and the chained
//! sanitization pipeline. It performs no clipboard or process I/O.
//!
//! ## Modules
//!
//! * `config`: Defines `RedactionRule` and `Settings`, and loads the settings file.
//! * `identity`: `SystemIdentifier`, `PlatformInfo` and identifier → rule conversion.
//! * `sanitizers`: Builds the effective rule set and compiles it.
//! * `engine`: Defines the `SanitizationEngine` trait.
//! * `engines`: Concrete implementations of `SanitizationEngine`.
//! * `headless`: One-shot convenience wrappers.
//! * `errors`: The shared error taxonomy.
//!
//! ## Usage Example
//!
//! ```rust
//! use clipboard_privacy_core::{
//!     build_rule_set, PlatformInfo, RedactionRule, RegexEngine, SanitizationEngine, Settings,
//! };
//!
//! let settings = Settings {
//!     rules: vec![RedactionRule::new(r"token-\d+", "[TOKEN]")],
//! };
//! let info = PlatformInfo {
//!     user_name: Some("alice".into()),
//!     host_name: Some("workstation".into()),
//!     extras: Vec::new(),
//! };
//!
//! let engine = RegexEngine::new(&build_rule_set(&settings, &info));
//! let out = engine.sanitize("alice@workstation uses token-42");
//! assert_eq!(out, "username@hostname uses [TOKEN]");
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`ClipboardPrivacyError`]. Rule compilation and
//! settings loading degrade instead of failing: bad rules are skipped, and a
//! bad settings file becomes an empty rule set.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod headless;
pub mod identity;
pub mod sanitizers;

/// Re-exports the settings types and loaders.
pub use config::{
    resolve_settings_path,
    settings_candidate_paths,
    RedactionRule,
    Settings,
    SettingsFormat,
    MAX_PATTERN_LENGTH,
    SETTINGS_ENV_VAR,
    SETTINGS_FILE_NAME,
};

/// Re-exports the custom error type for clear error reporting.
pub use errors::ClipboardPrivacyError;

/// Re-exports types related to the core sanitization engine trait.
pub use engine::{RedactionSummaryItem, SanitizationEngine};

/// Re-exports the concrete `RegexEngine`.
pub use engines::regex_engine::RegexEngine;

/// Re-exports identifier discovery types and the identifier → rule conversion.
pub use identity::{
    identifier_pattern,
    identifier_rules,
    PlatformInfo,
    SystemIdentifier,
    HOSTNAME_TOKEN,
    USERDOMAIN_TOKEN,
    USERNAME_TOKEN,
};

/// Re-exports types and functions for one-shot, non-interactive use.
pub use headless::{headless_sanitize_string, headless_sanitize_with_identifiers};

pub use sanitizers::compiler::{
    build_rule_set,
    compile_rule,
    compile_rules,
    normalize_pattern,
    CompiledRule,
    CompiledRules,
};
