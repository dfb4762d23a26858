use std::collections::HashMap;
use std::sync::LazyLock;

use rust_stemmers::{Algorithm, Stemmer};
use serde::{Deserialize, Serialize};

/// AFINN-style polarity words (-5..=5). Keyed by stem at load time.
static POLARITY_WORDS: &[(&str, i8)] = &[
    ("agony", -3),
    ("afraid", -2),
    ("anxious", -2),
    ("awful", -3),
    ("bad", -3),
    ("crying", -2),
    ("dead", -3),
    ("desperate", -3),
    ("die", -3),
    ("dying", -3),
    ("emergency", -2),
    ("excruciating", -4),
    ("fear", -2),
    ("frightened", -2),
    ("helpless", -2),
    ("horrible", -3),
    ("hurt", -2),
    ("miserable", -3),
    ("pain", -2),
    ("panic", -3),
    ("scared", -2),
    ("scream", -2),
    ("severe", -2),
    ("suffer", -2),
    ("terrible", -3),
    ("terrified", -3),
    ("unbearable", -4),
    ("weak", -2),
    ("worried", -2),
    ("worse", -3),
    ("worst", -3),
    ("better", 2),
    ("calm", 2),
    ("comfortable", 2),
    ("fine", 2),
    ("good", 3),
    ("great", 3),
    ("improving", 2),
    ("okay", 1),
    ("ok", 1),
    ("relief", 2),
    ("relieved", 2),
    ("stable", 2),
    ("well", 2),
];

static LEXICON: LazyLock<HashMap<String, i8>> = LazyLock::new(|| {
    let stemmer = Stemmer::create(Algorithm::English);
    POLARITY_WORDS
        .iter()
        .map(|(word, score)| (stemmer.stem(word).to_string(), *score))
        .collect()
});

/// Distress estimate derived from polarity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum DistressLevel {
    Low,
    Medium,
    High,
}

/// Polarity of the description and what it implies about distress.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SentimentReport {
    pub score: f64,
    pub distress_level: DistressLevel,
    pub interpretation: String,
}

impl Default for SentimentReport {
    fn default() -> Self {
        Self {
            score: 0.0,
            distress_level: DistressLevel::Low,
            interpretation: interpret(0.0).to_string(),
        }
    }
}

/// Mean polarity per token over the stemmed token list.
pub fn polarity_score(stems: &[String]) -> f64 {
    if stems.is_empty() {
        return 0.0;
    }
    let total: i32 = stems
        .iter()
        .filter_map(|stem| LEXICON.get(stem))
        .map(|score| i32::from(*score))
        .sum();
    (f64::from(total) / stems.len() as f64).clamp(-5.0, 5.0)
}

fn distress_for(score: f64) -> DistressLevel {
    if score < -2.0 {
        DistressLevel::High
    } else if score < 0.0 {
        DistressLevel::Medium
    } else {
        DistressLevel::Low
    }
}

fn interpret(score: f64) -> &'static str {
    if score < -3.0 {
        "severe distress"
    } else if score < -1.0 {
        "moderate distress"
    } else if score < 1.0 {
        "neutral"
    } else {
        "positive outlook"
    }
}

/// Estimate distress from the stemmed tokens.
pub fn analyze_sentiment(stems: &[String]) -> SentimentReport {
    let score = polarity_score(stems);
    SentimentReport {
        score,
        distress_level: distress_for(score),
        interpretation: interpret(score).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triage::nlp::normalize::normalize;

    fn run(text: &str) -> SentimentReport {
        analyze_sentiment(&normalize(text).stems)
    }

    #[test]
    fn empty_is_neutral_low() {
        let s = run("");
        assert_eq!(s.score, 0.0);
        assert_eq!(s.distress_level, DistressLevel::Low);
        assert_eq!(s.interpretation, "neutral");
        assert_eq!(s, SentimentReport::default());
    }

    #[test]
    fn score_is_mean_per_token() {
        // "pain" = -2 over two tokens.
        let s = run("chest pain");
        assert!((s.score - -1.0).abs() < 1e-9);
        assert_eq!(s.distress_level, DistressLevel::Medium);
        assert_eq!(s.interpretation, "neutral");
    }

    #[test]
    fn stems_match_inflections() {
        // "hurts" stems to "hurt"; "scared" to "scare".
        let s = run("hurts scared");
        assert!((s.score - -2.0).abs() < 1e-9);
        assert_eq!(s.interpretation, "moderate distress");
    }

    #[test]
    fn dense_negative_text_is_high_distress() {
        let s = run("terrible unbearable agony");
        assert!(s.score < -3.0);
        assert_eq!(s.distress_level, DistressLevel::High);
        assert_eq!(s.interpretation, "severe distress");
    }

    #[test]
    fn positive_text() {
        let s = run("feeling better");
        assert!((s.score - 1.0).abs() < 1e-9);
        assert_eq!(s.distress_level, DistressLevel::Low);
        assert_eq!(s.interpretation, "positive outlook");
    }

    #[test]
    fn score_stays_in_range() {
        let s = run(&"excruciating ".repeat(20));
        assert!(s.score >= -5.0 && s.score <= 5.0);
    }
}
