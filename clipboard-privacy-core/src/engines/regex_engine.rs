//! A `SanitizationEngine` implementation that applies regex rules in sequence.
//!
//! Each rule runs over the output of the previous one, so a later rule may
//! match text an earlier replacement introduced. Replacements are literal:
//! `$1` in a replacement is inserted as-is.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use regex::NoExpand;

use crate::config::RedactionRule;
use crate::engine::{RedactionSummaryItem, SanitizationEngine};
use crate::sanitizers::compiler::{compile_rules, CompiledRules};

#[derive(Debug)]
pub struct RegexEngine {
    compiled_rules: CompiledRules,
}

impl RegexEngine {
    /// Compiles `rules` once. Rules that fail to compile are dropped.
    pub fn new(rules: &[RedactionRule]) -> Self {
        Self {
            compiled_rules: compile_rules(rules),
        }
    }

    /// Number of rules dropped during compilation.
    pub fn skipped_rules(&self) -> usize {
        self.compiled_rules.skipped.len()
    }
}

impl SanitizationEngine for RegexEngine {
    fn sanitize(&self, content: &str) -> String {
        self.sanitize_with_summary(content).0
    }

    fn sanitize_with_summary(&self, content: &str) -> (String, Vec<RedactionSummaryItem>) {
        // An empty pattern would otherwise turn "" into its replacement.
        if content.is_empty() {
            return (String::new(), Vec::new());
        }

        let mut current = content.to_string();
        let mut summary = Vec::new();

        for rule in &self.compiled_rules.rules {
            let occurrences = rule.regex.find_iter(&current).count();
            if occurrences == 0 {
                continue;
            }
            current = rule
                .regex
                .replace_all(&current, NoExpand(&rule.replace_with))
                .into_owned();
            debug!("Rule '{}' replaced {} match(es).", rule.name, occurrences);
            summary.push(RedactionSummaryItem {
                rule_name: rule.name.clone(),
                occurrences,
            });
        }

        (current, summary)
    }

    fn compiled_rules(&self) -> &CompiledRules {
        &self.compiled_rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::identifier_pattern;

    fn engine(rules: &[(&str, &str)]) -> RegexEngine {
        let rules: Vec<_> = rules.iter().map(|(p, r)| RedactionRule::new(*p, *r)).collect();
        RegexEngine::new(&rules)
    }

    #[test]
    fn rules_are_chained_in_order() {
        let e = engine(&[("alice", "NAME"), ("NAME", "X")]);
        assert_eq!(e.sanitize("alice said hi"), "X said hi");
    }

    #[test]
    fn word_boundary_identifier() {
        let pattern = identifier_pattern("bob");
        let e = engine(&[(pattern.as_str(), "username")]);
        assert_eq!(e.sanitize("bob"), "username");
        assert_eq!(e.sanitize("bob's laptop"), "username's laptop");
        assert_eq!(e.sanitize("bobby"), "bobby");
    }

    #[test]
    fn empty_input_and_empty_rules() {
        assert_eq!(engine(&[("x", "y")]).sanitize(""), "");
        assert_eq!(engine(&[]).sanitize("untouched $1 text"), "untouched $1 text");
    }

    #[test]
    fn replacement_is_literal() {
        let e = engine(&[("(a)", "$1-$0")]);
        assert_eq!(e.sanitize("abc"), "$1-$0bc");
    }

    #[test]
    fn replacement_is_not_rescanned_by_same_rule() {
        let e = engine(&[("a", "aa")]);
        assert_eq!(e.sanitize("a a"), "aa aa");
    }

    #[test]
    fn bad_rule_does_not_block_others() {
        let e = engine(&[("x", "1"), ("[", "2"), ("y", "3")]);
        assert_eq!(e.skipped_rules(), 1);
        assert_eq!(e.sanitize("xy"), "13");
    }

    #[test]
    fn hyphenated_pattern_matches_literally() {
        let e = engine(&[("secret-token-123", "[REDACTED]")]);
        assert_eq!(e.sanitize("secret-token-123"), "[REDACTED]");
    }

    #[test]
    fn summary_counts_matches_per_rule() {
        let e = engine(&[("a", "b"), ("zzz", "q"), ("b", "c")]);
        let (out, summary) = e.sanitize_with_summary("a b a");
        assert_eq!(out, "c c c");
        assert_eq!(
            summary,
            vec![
                RedactionSummaryItem { rule_name: "a".into(), occurrences: 2 },
                RedactionSummaryItem { rule_name: "b".into(), occurrences: 3 },
            ]
        );
    }
}
