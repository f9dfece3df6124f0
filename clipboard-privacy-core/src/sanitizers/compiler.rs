//! compiler.rs - Builds the effective rule set and compiles it.
//!
//! Two steps live here. [`build_rule_set`] merges user rules with the rules
//! derived from discovered system identifiers. [`compile_rules`] normalizes and
//! compiles each pattern, skipping (and reporting) the ones that do not compile
//! so one bad rule never blocks the rest.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, warn};
use regex::{Regex, RegexBuilder};
use std::iter::Peekable;
use std::str::Chars;

use crate::config::{RedactionRule, Settings, MAX_PATTERN_LENGTH};
use crate::errors::ClipboardPrivacyError;
use crate::identity::{identifier_rules, PlatformInfo};

/// Represents a single compiled redaction rule.
#[derive(Debug)]
pub struct CompiledRule {
    /// The compiled regular expression used for matching.
    pub regex: Regex,
    /// The literal text that replaces every match.
    pub replace_with: String,
    /// Diagnostic label of the source rule.
    pub name: String,
}

/// The ordered, compiled pipeline plus the rules that had to be dropped.
#[derive(Debug, Default)]
pub struct CompiledRules {
    pub rules: Vec<CompiledRule>,
    pub skipped: Vec<ClipboardPrivacyError>,
}

/// Effective rule set: user rules in file order, then identifier rules.
pub fn build_rule_set(settings: &Settings, info: &PlatformInfo) -> Vec<RedactionRule> {
    let mut rules = settings.rules.clone();
    rules.extend(identifier_rules(info));
    debug!(
        "Effective rule set: {} user rules + {} identifier rules.",
        settings.rules.len(),
        rules.len() - settings.rules.len()
    );
    rules
}

/// Escapes every literal `-` that is not already escaped.
///
/// Outside a character class a hyphen is always literal. Inside one it is
/// literal only as the first or last member (`[-a]`, `[a-]`); a hyphen that
/// forms a range such as `[a-z]` is left alone, so matching does not change.
/// Hyphens that are regex syntax rather than text are never touched: flag
/// negation in `(?i-u)` or `(?-i:...)`, and Unicode class names like
/// `\p{Old-Italic}`.
pub fn normalize_pattern(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 4);
    let mut chars = pattern.chars().peekable();
    let mut depth = 0usize;
    // True right after `[` or `[^`, where `]` and `-` are literal.
    let mut class_start = false;

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                out.push(c);
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                    if matches!(escaped, 'p' | 'P') && chars.peek() == Some(&'{') {
                        copy_through(&mut chars, &mut out, '}');
                    }
                }
                class_start = false;
            }
            '(' if depth == 0 && chars.peek() == Some(&'?') => {
                out.push(c);
                out.push('?');
                chars.next();
                // Flag group: `(?flags)` or `(?flags:`.
                while let Some(&f) = chars.peek() {
                    if !(f.is_ascii_alphabetic() || f == '-') {
                        break;
                    }
                    out.push(f);
                    chars.next();
                }
            }
            '[' => {
                out.push(c);
                depth += 1;
                if chars.peek() == Some(&'^') {
                    out.push('^');
                    chars.next();
                }
                class_start = true;
                continue;
            }
            ']' if depth > 0 && !class_start => {
                out.push(c);
                depth -= 1;
            }
            '-' => {
                let literal = depth == 0 || class_start || chars.peek() == Some(&']');
                if literal {
                    out.push('\\');
                }
                out.push(c);
            }
            _ => out.push(c),
        }
        class_start = false;
    }
    out
}

/// Copies characters up to and including `end`.
fn copy_through(chars: &mut Peekable<Chars<'_>>, out: &mut String, end: char) {
    for c in chars.by_ref() {
        out.push(c);
        if c == end {
            break;
        }
    }
}

/// Compiles a single rule after normalization.
pub fn compile_rule(rule: &RedactionRule) -> Result<CompiledRule, ClipboardPrivacyError> {
    if rule.pattern.len() > MAX_PATTERN_LENGTH {
        return Err(ClipboardPrivacyError::PatternLengthExceeded(
            rule.label().to_string(),
            rule.pattern.len(),
            MAX_PATTERN_LENGTH,
        ));
    }

    let normalized = normalize_pattern(&rule.pattern);
    let regex = RegexBuilder::new(&normalized)
        .size_limit(10 * (1 << 20)) // 10 MB limit for compiled regex
        .build()
        .map_err(|e| ClipboardPrivacyError::RuleCompileError(rule.label().to_string(), e))?;

    Ok(CompiledRule {
        regex,
        replace_with: rule.replacement.clone(),
        name: rule.label().to_string(),
    })
}

/// Compiles rules in order, dropping the ones that fail.
pub fn compile_rules(rules: &[RedactionRule]) -> CompiledRules {
    debug!("Starting compilation of {} rules.", rules.len());
    let mut compiled = CompiledRules::default();

    for rule in rules {
        match compile_rule(rule) {
            Ok(c) => compiled.rules.push(c),
            Err(e) => {
                warn!("Skipping rule: {}", e);
                compiled.skipped.push(e);
            }
        }
    }

    debug!(
        "Finished compiling rules. Compiled: {}, skipped: {}.",
        compiled.rules.len(),
        compiled.skipped.len()
    );
    compiled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::SystemIdentifier;

    #[test]
    fn normalize_escapes_literal_hyphens() {
        assert_eq!(normalize_pattern("secret-token-123"), r"secret\-token\-123");
        assert_eq!(normalize_pattern(r"a\-b"), r"a\-b");
        assert_eq!(normalize_pattern("-"), r"\-");
        assert_eq!(normalize_pattern("[-a]"), r"[\-a]");
        assert_eq!(normalize_pattern("[^-a]"), r"[^\-a]");
        assert_eq!(normalize_pattern("[a-]"), r"[a\-]");
        assert_eq!(normalize_pattern(""), "");
    }

    #[test]
    fn normalize_keeps_ranges() {
        assert_eq!(normalize_pattern("[a-z]+-x"), r"[a-z]+\-x");
        assert_eq!(normalize_pattern("[]a-c]"), "[]a-c]");
        assert_eq!(normalize_pattern("[[:alpha:]0-9]-"), r"[[:alpha:]0-9]\-");
        assert_eq!(normalize_pattern(r"[\]-a]"), r"[\]-a]");
        assert_eq!(normalize_pattern("(?i)Secret(?-i)X"), "(?i)Secret(?-i)X");
        assert_eq!(normalize_pattern("(?i-u)a-b"), r"(?i-u)a\-b");
        assert_eq!(normalize_pattern("(?-i:Token-1)"), r"(?-i:Token\-1)");
        assert_eq!(normalize_pattern("(?:x-y)"), r"(?:x\-y)");
        assert_eq!(normalize_pattern(r"\p{Old-Italic}-"), r"\p{Old-Italic}\-");
    }

    #[test]
    fn normalized_patterns_still_compile() {
        for p in [
            "[a-z]+-x",
            "[-a]",
            "[a-]",
            "[]a-c]",
            r"\bmy-host\b",
            "[[:alpha:]0-9]-",
            "(?i)Secret(?-i)X",
            "(?i-u)abc",
            "(?-i:Token)",
            r"\p{Old-Italic}",
        ] {
            let rule = RedactionRule::new(p, "X");
            assert!(compile_rule(&rule).is_ok(), "pattern {p} should compile");
        }
    }

    #[test]
    fn inline_flag_negation_keeps_the_rule() {
        let compiled = compile_rules(&[RedactionRule::new("(?i)secret(?-i)X", "[R]")]);
        assert!(compiled.skipped.is_empty());
        let regex = &compiled.rules[0].regex;
        assert!(regex.is_match("SECRETX"));
        assert!(!regex.is_match("SECRETx"));
    }

    #[test]
    fn invalid_rule_is_skipped_not_fatal() {
        let rules = vec![
            RedactionRule::new("(unclosed", "X"),
            RedactionRule::new("ok", "OK"),
        ];
        let compiled = compile_rules(&rules);
        assert_eq!(compiled.rules.len(), 1);
        assert_eq!(compiled.rules[0].name, "ok");
        assert!(matches!(
            compiled.skipped[0],
            ClipboardPrivacyError::RuleCompileError(ref name, _) if name == "(unclosed"
        ));
    }

    #[test]
    fn overlong_pattern_is_skipped() {
        let rules = vec![RedactionRule::new("a".repeat(MAX_PATTERN_LENGTH + 1), "X")];
        let compiled = compile_rules(&rules);
        assert!(compiled.rules.is_empty());
        assert!(matches!(
            compiled.skipped[0],
            ClipboardPrivacyError::PatternLengthExceeded(_, _, MAX_PATTERN_LENGTH)
        ));
    }

    #[test]
    fn user_rules_come_before_identifier_rules() {
        let settings = Settings {
            rules: vec![RedactionRule::new("token", "[T]")],
        };
        let info = PlatformInfo {
            user_name: Some("bob".into()),
            host_name: Some("bob".into()),
            extras: vec![SystemIdentifier::new("WORKGROUP", "userdomain")],
        };
        let rules = build_rule_set(&settings, &info);
        let summary: Vec<_> = rules
            .iter()
            .map(|r| (r.pattern.as_str(), r.replacement.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("token", "[T]"),
                (r"\bbob\b", "username"),
                (r"\bWORKGROUP\b", "userdomain"),
            ]
        );
    }
}
