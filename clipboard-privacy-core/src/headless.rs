// File: clipboard-privacy-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for using the engine without a clipboard.
//! Provides helper functions for a full, one-shot sanitization of strings.

use crate::config::{RedactionRule, Settings};
use crate::engine::SanitizationEngine;
use crate::engines::regex_engine::RegexEngine;
use crate::identity::PlatformInfo;
use crate::sanitizers::compiler::build_rule_set;

/// Compiles `rules` and applies them to `content` in one call.
pub fn headless_sanitize_string(rules: &[RedactionRule], content: &str) -> String {
    RegexEngine::new(rules).sanitize(content)
}

/// Builds the effective rule set from settings and identifiers, then sanitizes.
pub fn headless_sanitize_with_identifiers(
    settings: &Settings,
    info: &PlatformInfo,
    content: &str,
) -> String {
    headless_sanitize_string(&build_rule_set(settings, info), content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headless_sanitize_string() {
        let rules = vec![RedactionRule::new(
            r"[\w.+-]+@[\w-]+\.[A-Za-z]{2,}",
            "[EMAIL]",
        )];
        let out = headless_sanitize_string(
            &rules,
            "My email is test@example.com, and another is another@example.net.",
        );
        assert_eq!(out, "My email is [EMAIL], and another is [EMAIL].");
    }

    #[test]
    fn test_headless_with_identifiers() {
        let info = PlatformInfo {
            user_name: Some("carol".into()),
            host_name: Some("devbox".into()),
            extras: Vec::new(),
        };
        let out = headless_sanitize_with_identifiers(
            &Settings::default(),
            &info,
            "carol@devbox:/home/carol$",
        );
        assert_eq!(out, "username@hostname:/home/username$");
    }
}
