//! System identifiers and their conversion into redaction rules.
//!
//! Identifiers (user name, host name and platform extras) are discovered by the
//! CLI crate on every run and handed to this module as a [`PlatformInfo`]
//! snapshot. Nothing here touches the OS.
//!
//! License: MIT OR Apache-2.0

use log::debug;
use std::collections::HashSet;

use crate::config::RedactionRule;

/// Replacement token for the current user name.
pub const USERNAME_TOKEN: &str = "username";
/// Replacement token for host name variants.
pub const HOSTNAME_TOKEN: &str = "hostname";
/// Replacement token for the Windows user domain.
pub const USERDOMAIN_TOKEN: &str = "userdomain";

/// A runtime-discovered value that should never leave the machine verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemIdentifier {
    pub value: String,
    pub replacement: String,
}

impl SystemIdentifier {
    pub fn new(value: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            replacement: replacement.into(),
        }
    }
}

/// Snapshot of platform-identifying values taken at the start of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlatformInfo {
    pub user_name: Option<String>,
    pub host_name: Option<String>,
    /// OS-specific extras, in discovery order.
    pub extras: Vec<SystemIdentifier>,
}

impl PlatformInfo {
    /// All identifiers in rule order: user name, host name, then extras.
    pub fn identifiers(&self) -> Vec<SystemIdentifier> {
        let mut out = Vec::with_capacity(self.extras.len() + 2);
        if let Some(user) = &self.user_name {
            out.push(SystemIdentifier::new(user.clone(), USERNAME_TOKEN));
        }
        if let Some(host) = &self.host_name {
            out.push(SystemIdentifier::new(host.clone(), HOSTNAME_TOKEN));
        }
        out.extend(self.extras.iter().cloned());
        out
    }
}

/// Builds a whole-word, literal pattern for an identifier value.
pub fn identifier_pattern(value: &str) -> String {
    format!(r"\b{}\b", regex::escape(value))
}

/// Converts discovered identifiers into rules.
///
/// Empty values are ignored and a value that was already added is skipped, so
/// the first replacement token seen for a value wins.
pub fn identifier_rules(info: &PlatformInfo) -> Vec<RedactionRule> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut rules = Vec::new();

    for identifier in info.identifiers() {
        let value = identifier.value.trim();
        if value.is_empty() {
            continue;
        }
        if !seen.insert(value.to_string()) {
            debug!("Skipping duplicate '{}' identifier.", identifier.replacement);
            continue;
        }
        rules.push(RedactionRule {
            name: Some(format!("system:{}", identifier.replacement)),
            pattern: identifier_pattern(value),
            replacement: identifier.replacement,
        });
    }

    debug!("Derived {} identifier rules.", rules.len());
    rules
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_are_ordered_user_host_extras() {
        let info = PlatformInfo {
            user_name: Some("bob".into()),
            host_name: Some("box".into()),
            extras: vec![SystemIdentifier::new("CORP", USERDOMAIN_TOKEN)],
        };
        let tokens: Vec<_> = info.identifiers().into_iter().map(|i| i.replacement).collect();
        assert_eq!(tokens, vec!["username", "hostname", "userdomain"]);
    }

    #[test]
    fn duplicate_and_empty_values_are_skipped() {
        let info = PlatformInfo {
            user_name: Some("  ".into()),
            host_name: Some("box".into()),
            extras: vec![
                SystemIdentifier::new("box", HOSTNAME_TOKEN),
                SystemIdentifier::new("BOX-LOCAL", HOSTNAME_TOKEN),
            ],
        };
        let rules = identifier_rules(&info);
        let patterns: Vec<_> = rules.iter().map(|r| r.pattern.as_str()).collect();
        assert_eq!(patterns, vec![r"\bbox\b", r"\bBOX\-LOCAL\b"]);
    }

    #[test]
    fn pattern_escapes_metacharacters() {
        assert_eq!(identifier_pattern("a.b+c"), r"\ba\.b\+c\b");
    }
}
