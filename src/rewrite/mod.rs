//! Ordered text-substitution engine.
//!
//! Each tool is a fixed table of named pattern/replacement rules applied top
//! to bottom over the whole file text. Later rules see the output of earlier
//! rules, so table order is part of the contract.

pub mod depfile;
pub mod makefile;

use std::collections::BTreeMap;

use regex::Regex;

/// One named substitution: every match of `pattern` is replaced with
/// `replacement`.
pub struct RewriteRule {
    pub name: &'static str,
    pub pattern: Regex,
    pub replacement: &'static str,
}

/// Transformed text plus how many times each rule fired. Rules that never
/// matched are absent from `counts`.
#[derive(Debug)]
pub struct RewriteOutcome {
    pub content: String,
    pub counts: BTreeMap<String, usize>,
}

/// Apply `rules` in table order, each as a global left-to-right replacement.
pub fn apply_rules(text: &str, rules: &[RewriteRule]) -> RewriteOutcome {
    let mut counts = BTreeMap::new();
    let mut content = text.to_string();
    for rule in rules {
        let mut replaced = 0usize;
        content = rule
            .pattern
            .replace_all(&content, |caps: &regex::Captures<'_>| {
                replaced += 1;
                let mut expanded = String::new();
                caps.expand(rule.replacement, &mut expanded);
                expanded
            })
            .into_owned();
        if replaced > 0 {
            counts.insert(rule.name.to_string(), replaced);
        }
    }
    RewriteOutcome { content, counts }
}
