//! Natural-language layer of the triage pipeline.
//!
//! Each analyzer is a pure function over the normalized text (or its
//! tokens). `analyze_text` runs all of them and returns one immutable
//! snapshot that the keyword matcher, scorer and recommendation
//! generator read from.

pub mod entities;
pub mod modifiers;
pub mod negation;
pub mod normalize;
pub mod sentiment;
pub mod synonyms;
pub mod temporal;

use serde::{Deserialize, Serialize};

pub use entities::{extract_entities, EntitySet};
pub use modifiers::{
    analyze_modifiers, IntensityLevel, ModifierHit, ModifierKind, SeverityModifiers,
};
pub use negation::{detect_negations, NegationReport};
pub use normalize::{normalize, NormalizedText};
pub use sentiment::{analyze_sentiment, DistressLevel, SentimentReport};
pub use synonyms::{expand_synonyms, ExpandedSymptoms};
pub use temporal::{extract_temporal, Frequency, Onset, TemporalInfo};

/// Output of every NLP analyzer for one description.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NlpAnalysis {
    pub tokens: Vec<String>,
    pub stems: Vec<String>,
    pub entities: EntitySet,
    pub negations: NegationReport,
    pub severity: SeverityModifiers,
    pub temporal: TemporalInfo,
    pub expanded_symptoms: ExpandedSymptoms,
    pub sentiment: SentimentReport,
}

/// Run every NLP analyzer over an already-normalized description.
pub fn analyze_normalized(normalized: &NormalizedText) -> NlpAnalysis {
    let text = normalized.text.as_str();
    NlpAnalysis {
        tokens: normalized.tokens.clone(),
        stems: normalized.stems.clone(),
        entities: extract_entities(text),
        negations: detect_negations(text),
        severity: analyze_modifiers(&normalized.tokens),
        temporal: extract_temporal(text),
        expanded_symptoms: expand_synonyms(text),
        sentiment: analyze_sentiment(&normalized.stems),
    }
}

/// Normalize raw text, then run every NLP analyzer.
pub fn analyze_text(raw: &str) -> NlpAnalysis {
    analyze_normalized(&normalize(raw))
}
