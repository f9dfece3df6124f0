// clipboard-privacy-core/src/engine.rs
//! Defines the core SanitizationEngine trait and related data structures.
//!
//! The paste-injection controller only depends on this trait, which keeps the
//! controller testable with a stand-in engine and leaves room for other
//! matching strategies.
//!
//! License: MIT OR APACHE 2.0

use crate::sanitizers::compiler::CompiledRules;

/// Per-rule outcome of one sanitization pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedactionSummaryItem {
    pub rule_name: String,
    pub occurrences: usize,
}

/// A trait that defines the core functionality of a sanitization engine.
pub trait SanitizationEngine: Send + Sync {
    /// Returns the sanitized form of `content`.
    ///
    /// Must be pure and deterministic: same input and rules, same output.
    fn sanitize(&self, content: &str) -> String;

    /// Sanitizes `content` and reports how many matches each rule replaced.
    ///
    /// Rules with zero matches are omitted from the summary.
    fn sanitize_with_summary(&self, content: &str) -> (String, Vec<RedactionSummaryItem>);

    /// Returns the compiled rules used by the engine.
    fn compiled_rules(&self) -> &CompiledRules;
}
