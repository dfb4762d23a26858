use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Canonical term followed by the lay synonyms that imply it.
static SYNONYM_TABLE: &[(&str, &[&str])] = &[
    ("pain", &["ache", "aching", "hurt", "hurts", "hurting", "sore", "painful"]),
    ("breathing", &["breathe", "respiration", "respiratory", "breath", "inhale", "exhale"]),
    ("vomiting", &["vomit", "vomited", "throwing up", "threw up", "puking"]),
    ("nausea", &["nauseous", "nauseated", "queasy", "sick to my stomach"]),
    ("dizziness", &["dizzy", "lightheaded", "light-headed", "vertigo"]),
    ("fever", &["feverish", "high temperature", "burning up"]),
    ("bleeding", &["bleed", "bled", "blood loss", "hemorrhage", "haemorrhage"]),
    ("unconscious", &["passed out", "blacked out", "knocked out", "unresponsive"]),
    ("seizure", &["convulsion", "convulsions", "convulsing", "fitting"]),
    ("fatigue", &["tired", "exhausted", "weary", "worn out"]),
    ("headache", &["migraine", "head pain", "head hurts"]),
    ("swelling", &["swollen", "puffy", "inflamed"]),
];

struct SynonymRule {
    canonical: &'static str,
    pattern: Regex,
}

static SYNONYM_RULES: LazyLock<Vec<SynonymRule>> = LazyLock::new(|| {
    SYNONYM_TABLE
        .iter()
        .map(|(canonical, synonyms)| {
            let alternatives: Vec<String> = synonyms.iter().map(|s| regex::escape(s)).collect();
            SynonymRule {
                canonical: *canonical,
                pattern: Regex::new(&format!(r"\b(?:{})\b", alternatives.join("|")))
                    .expect("Invalid synonym regex pattern"),
            }
        })
        .collect()
});

/// Synonym-expanded working text.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExpandedSymptoms {
    pub original_text: String,
    pub expanded_text: String,
    pub added_terms: Vec<String>,
}

/// Append each canonical term whose synonyms occur in the text. Text only grows.
pub fn expand_synonyms(text: &str) -> ExpandedSymptoms {
    let mut expanded_text = text.to_string();
    let mut added_terms = Vec::new();

    for rule in SYNONYM_RULES.iter() {
        if rule.pattern.is_match(text) && !expanded_text.contains(rule.canonical) {
            if !expanded_text.is_empty() {
                expanded_text.push(' ');
            }
            expanded_text.push_str(rule.canonical);
            added_terms.push(rule.canonical.to_string());
        }
    }

    ExpandedSymptoms {
        original_text: text.to_string(),
        expanded_text,
        added_terms,
    }
}
