use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Denied terms found in the text.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NegationReport {
    pub has_negations: bool,
    pub negated_terms: Vec<String>,
    pub should_exclude: Vec<String>,
}

impl NegationReport {
    /// Loose containment in both directions: a negated "chest" denies
    /// "chest pain", and a negated "headaches" denies "headache".
    pub fn negates(&self, keyword: &str) -> bool {
        self.should_exclude
            .iter()
            .any(|term| term.contains(keyword) || keyword.contains(term.as_str()))
    }
}

/// Negation cues, each capturing the word right after the cue.
static NEGATION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\bno\s+([a-z0-9']+)",
        r"\bnot\s+([a-z0-9']+)",
        r"\bwithout\s+([a-z0-9']+)",
        r"\bnever\s+([a-z0-9']+)",
        r"\bdoesn'?t\s+([a-z0-9']+)",
        r"\bdon'?t\s+([a-z0-9']+)",
        r"\bdidn'?t\s+([a-z0-9']+)",
        r"\bhaven'?t\s+([a-z0-9']+)",
        r"\bhasn'?t\s+([a-z0-9']+)",
        r"\bisn'?t\s+([a-z0-9']+)",
        r"\baren'?t\s+([a-z0-9']+)",
        r"\bwasn'?t\s+([a-z0-9']+)",
        r"\bdenies\s+([a-z0-9']+)",
        r"\bnegative\s+for\s+([a-z0-9']+)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("Invalid negation regex pattern"))
    .collect()
});

/// Scan normalized text for negation cues.
pub fn detect_negations(text: &str) -> NegationReport {
    let mut negated_terms: Vec<String> = Vec::new();

    for pattern in NEGATION_PATTERNS.iter() {
        for caps in pattern.captures_iter(text) {
            if let Some(term) = caps.get(1) {
                let term = term.as_str().to_string();
                if !negated_terms.contains(&term) {
                    negated_terms.push(term);
                }
            }
        }
    }

    NegationReport {
        has_negations: !negated_terms.is_empty(),
        should_exclude: negated_terms.clone(),
        negated_terms,
    }
}
