//! Severity collapsing and confidence scoring.

use super::nlp::{DistressLevel, NlpAnalysis, Onset};
use super::types::{FinalSeverity, KeywordAnalysis};

/// Lowest confidence ever reported.
pub const MIN_CONFIDENCE: i32 = 10;
/// Highest confidence ever reported.
pub const MAX_CONFIDENCE: i32 = 99;

/// Moderate matches needed to reach `High` without any urgent match.
const MODERATE_ESCALATION_COUNT: usize = 5;

/// Collapse tier buckets into one verdict. First matching rule wins.
///
/// Used for both basic and NLP-adjusted buckets.
pub fn determine_severity(analysis: &KeywordAnalysis) -> FinalSeverity {
    if !analysis.critical.is_empty() {
        return FinalSeverity::Critical;
    }
    if !analysis.urgent.is_empty() {
        return if analysis.urgent.len() >= 2 {
            FinalSeverity::Critical
        } else {
            FinalSeverity::High
        };
    }
    if analysis.moderate.len() >= MODERATE_ESCALATION_COUNT {
        return FinalSeverity::High;
    }
    if !analysis.moderate.is_empty() {
        return FinalSeverity::Medium;
    }
    FinalSeverity::Low
}

/// Base confidence from the highest non-empty tier.
fn base_confidence(analysis: &KeywordAnalysis) -> i32 {
    let count = |len: usize| len.min(100) as i32;

    if !analysis.critical.is_empty() {
        (80 + 5 * count(analysis.critical.len())).min(95)
    } else if !analysis.urgent.is_empty() {
        (70 + 5 * count(analysis.urgent.len())).min(90)
    } else if !analysis.moderate.is_empty() {
        (60 + 5 * count(analysis.moderate.len())).min(85)
    } else if analysis.total_matches > 0 {
        50
    } else {
        25
    }
}

/// Additive adjustments from NLP signal strength.
fn nlp_adjustment(nlp: &NlpAnalysis) -> i32 {
    let mut delta = 0;
    if nlp.entities.symptoms.len() > 2 {
        delta += 5;
    }
    if nlp.negations.has_negations {
        delta -= 10;
    }
    if nlp.severity.multiplier > 1.5 {
        delta += 10;
    } else if nlp.severity.multiplier < 0.7 {
        delta -= 5;
    }
    if nlp.temporal.onset == Some(Onset::Acute) {
        delta += 5;
    }
    if nlp.sentiment.distress_level == DistressLevel::High {
        delta += 5;
    }
    delta
}

/// Confidence in `[MIN_CONFIDENCE, MAX_CONFIDENCE]`.
pub fn calculate_confidence(analysis: &KeywordAnalysis, nlp: Option<&NlpAnalysis>) -> u8 {
    let mut confidence = base_confidence(analysis);
    if let Some(nlp) = nlp {
        confidence += nlp_adjustment(nlp);
    }
    // Clamped to 10..=99, always fits.
    confidence.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE) as u8
}
