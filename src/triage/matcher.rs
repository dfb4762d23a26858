//! Keyword matcher: vocabulary phrases found in the description, bucketed by tier.
//!
//! Matching is plain substring search, not token-boundary search.
//! Tiers are scanned critical → urgent → moderate → mild and every phrase
//! is recorded at most once. A phrase whose every occurrence lies inside a
//! longer accepted phrase is not recorded, so "slight fever" does not also
//! count as "fever". Negated phrases are never accepted and never hide the
//! phrases they contain.

use std::collections::HashSet;

use super::nlp::{NegationReport, NlpAnalysis};
use super::types::{KeywordAnalysis, MatchRecord, SeverityTier};
use super::vocabulary::KeywordVocabulary;

/// Basic mode: match the normalized text as-is.
pub fn match_keywords(text: &str, vocab: &KeywordVocabulary) -> KeywordAnalysis {
    scan(
        text,
        vocab,
        |_| false,
        |phrase, tier| MatchRecord {
            phrase: phrase.to_string(),
            tier,
            original_tier: None,
            nlp_adjusted: false,
        },
    )
}

/// NLP mode: match the synonym-expanded text, drop negated phrases and
/// re-tier survivors by the severity multiplier.
pub fn match_keywords_with_nlp(nlp: &NlpAnalysis, vocab: &KeywordVocabulary) -> KeywordAnalysis {
    let text = nlp.expanded_symptoms.expanded_text.as_str();
    let negations: &NegationReport = &nlp.negations;
    let multiplier = nlp.severity.multiplier;

    scan(
        text,
        vocab,
        |phrase| negations.negates(phrase),
        |phrase, tier| {
            let adjusted = retier(tier, multiplier);
            MatchRecord {
                phrase: phrase.to_string(),
                tier: adjusted,
                original_tier: Some(tier),
                nlp_adjusted: adjusted != tier,
            }
        },
    )
}

/// Move one tier up or down depending on the multiplier. At most one step.
pub fn retier(tier: SeverityTier, multiplier: f64) -> SeverityTier {
    match tier {
        SeverityTier::Moderate if multiplier >= 1.8 => SeverityTier::Urgent,
        SeverityTier::Urgent if multiplier >= 2.0 => SeverityTier::Critical,
        SeverityTier::Urgent if multiplier <= 0.6 => SeverityTier::Moderate,
        SeverityTier::Critical if multiplier <= 0.5 => SeverityTier::Urgent,
        other => other,
    }
}

fn scan<X, R>(text: &str, vocab: &KeywordVocabulary, excluded: X, record: R) -> KeywordAnalysis
where
    X: Fn(&str) -> bool,
    R: Fn(&str, SeverityTier) -> MatchRecord,
{
    let mut analysis = KeywordAnalysis::default();
    if text.is_empty() {
        return analysis;
    }

    // Candidates that survive exclusion; only these can subsume shorter phrases.
    let mut accepted: Vec<&str> = Vec::new();
    for (tier, phrase) in vocab.iter() {
        if !text.contains(phrase) || accepted.contains(&phrase) {
            continue;
        }
        if excluded(phrase) {
            tracing::trace!(tier = tier.as_str(), "Skipping negated keyword");
            continue;
        }
        accepted.push(phrase);
    }

    let mut seen: HashSet<&str> = HashSet::new();
    for tier in SeverityTier::PRIORITY {
        for phrase in vocab.phrases(tier) {
            let phrase = phrase.as_str();
            if seen.contains(phrase) || !accepted.contains(&phrase) {
                continue;
            }
            if is_subsumed(text, phrase, &accepted) {
                continue;
            }
            seen.insert(phrase);
            analysis.push(record(phrase, tier));
        }
    }

    analysis
}

/// True when every occurrence of `phrase` sits inside an occurrence of a
/// longer phrase from `accepted`.
fn is_subsumed(text: &str, phrase: &str, accepted: &[&str]) -> bool {
    let longer: Vec<&str> = accepted
        .iter()
        .copied()
        .filter(|p| p.len() > phrase.len() && p.contains(phrase))
        .collect();
    if longer.is_empty() {
        return false;
    }

    text.match_indices(phrase).all(|(start, _)| {
        let end = start + phrase.len();
        longer.iter().any(|outer| {
            text.match_indices(*outer)
                .any(|(o_start, _)| o_start <= start && end <= o_start + outer.len())
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triage::nlp::analyze_text;
    use crate::triage::nlp::normalize::normalize_text;
    use crate::triage::vocabulary::VocabularyTiers;

    fn basic(text: &str) -> KeywordAnalysis {
        match_keywords(&normalize_text(text), KeywordVocabulary::builtin())
    }

    fn nlp(text: &str) -> KeywordAnalysis {
        match_keywords_with_nlp(&analyze_text(text), KeywordVocabulary::builtin())
    }

    fn phrases(analysis: &KeywordAnalysis) -> Vec<&str> {
        analysis.matched_keywords.iter().map(|m| m.phrase.as_str()).collect()
    }

    // =================================================================
    // BASIC MODE
    // =================================================================

    #[test]
    fn abdominal_pain_with_fever_and_vomiting() {
        let a = basic("severe abdominal pain with fever and vomiting");
        assert_eq!(a.urgent, vec!["severe abdominal pain"]);
        assert!(a.moderate.contains(&"fever".to_string()));
        assert!(a.moderate.contains(&"vomiting".to_string()));
        assert!(a.critical.is_empty());
    }

    #[test]
    fn three_critical_phrases() {
        let a = basic("Chest pain, difficulty breathing, and unconscious");
        assert_eq!(a.critical.len(), 3);
        assert_eq!(a.total_matches, 3);
    }

    #[test]
    fn longer_phrase_wins_over_contained_phrase() {
        let a = basic("mild headache and slight fever");
        assert_eq!(a.mild.len(), 2);
        assert!(a.moderate.is_empty(), "got {:?}", a.moderate);
    }

    #[test]
    fn standalone_occurrence_still_counts() {
        // "fever" appears once inside "slight fever" and once on its own.
        let a = basic("slight fever yesterday, fever again today");
        assert!(a.mild.contains(&"slight fever".to_string()));
        assert!(a.moderate.contains(&"fever".to_string()));
    }

    #[test]
    fn substring_matching_is_not_token_bounded() {
        // "rash" is found inside "crash"; kept as substring semantics.
        let a = basic("bike crash");
        assert_eq!(a.moderate, vec!["rash"]);
    }

    #[test]
    fn each_phrase_recorded_once() {
        let a = basic("fever fever fever");
        assert_eq!(phrases(&a), vec!["fever"]);
    }

    #[test]
    fn phrase_in_two_tiers_counts_in_the_higher() {
        let vocab = KeywordVocabulary::new(VocabularyTiers {
            urgent: vec!["rash".into()],
            mild: vec!["rash".into()],
            ..Default::default()
        })
        .unwrap();
        let a = match_keywords("itchy rash", &vocab);
        assert_eq!(a.urgent, vec!["rash"]);
        assert!(a.mild.is_empty());
        assert_eq!(a.total_matches, 1);
    }

    #[test]
    fn empty_text_matches_nothing() {
        let a = basic("");
        assert_eq!(a.total_matches, 0);
        assert!(a.matched_keywords.is_empty());
    }

    #[test]
    fn basic_records_have_no_original_tier() {
        let a = basic("high fever");
        assert!(a.matched_keywords.iter().all(|m| m.original_tier.is_none() && !m.nlp_adjusted));
    }

    // =================================================================
    // NLP MODE
    // =================================================================

    #[test]
    fn negated_phrases_are_skipped() {
        let a = nlp("no chest pain and no difficulty breathing");
        let found = phrases(&a);
        assert!(!found.contains(&"chest pain"));
        assert!(!found.contains(&"difficulty breathing"));
    }

    #[test]
    fn negated_longer_phrase_does_not_hide_contained_phrase() {
        // "severe" is negated, which excludes "severe headache" but not "headache".
        let a = nlp("not severe headache");
        let found = phrases(&a);
        assert!(!found.contains(&"severe headache"));
        let rec = a.matched_keywords.iter().find(|m| m.phrase == "headache").unwrap();
        assert_eq!(rec.original_tier, Some(SeverityTier::Moderate));
        // Without negation handling the longer phrase still wins.
        assert_eq!(basic("not severe headache").urgent, vec!["severe headache"]);
    }

    #[test]
    fn synonyms_reach_the_vocabulary() {
        let a = nlp("my father passed out on the floor");
        assert!(a.critical.contains(&"unconscious".to_string()));
    }

    #[test]
    fn intensifiers_promote_moderate() {
        // "extremely" (2.0) * "bad" (1.3) = 2.6.
        let a = nlp("extremely bad headache");
        let rec = a.matched_keywords.iter().find(|m| m.phrase == "headache").unwrap();
        assert_eq!(rec.original_tier, Some(SeverityTier::Moderate));
        assert_eq!(rec.tier, SeverityTier::Urgent);
        assert!(rec.nlp_adjusted);
        assert!(a.urgent.contains(&"headache".to_string()));
        assert!(a.moderate.is_empty());
    }

    #[test]
    fn extreme_language_promotes_urgent_to_critical() {
        let a = nlp("extreme shortness of breath");
        let rec = &a.matched_keywords[0];
        assert_eq!(rec.phrase, "shortness of breath");
        assert_eq!(rec.tier, SeverityTier::Critical);
        assert_eq!(rec.original_tier, Some(SeverityTier::Urgent));
    }

    #[test]
    fn reducers_demote() {
        let a = nlp("mild minor seizure");
        let rec = a.matched_keywords.iter().find(|m| m.phrase == "seizure").unwrap();
        assert_eq!(rec.tier, SeverityTier::Urgent);
        assert!(rec.nlp_adjusted);
    }

    #[test]
    fn neutral_text_keeps_tiers() {
        let a = nlp("fever and cough");
        assert!(a.matched_keywords.iter().all(|m| !m.nlp_adjusted));
        assert!(a
            .matched_keywords
            .iter()
            .all(|m| m.original_tier == Some(m.tier)));
    }

    #[test]
    fn retier_table() {
        use SeverityTier::*;
        assert_eq!(retier(Moderate, 1.8), Urgent);
        assert_eq!(retier(Moderate, 1.79), Moderate);
        assert_eq!(retier(Urgent, 2.0), Critical);
        assert_eq!(retier(Urgent, 1.9), Urgent);
        assert_eq!(retier(Urgent, 0.6), Moderate);
        assert_eq!(retier(Critical, 0.5), Urgent);
        assert_eq!(retier(Critical, 0.6), Critical);
        assert_eq!(retier(Mild, 3.0), Mild);
        assert_eq!(retier(Mild, 0.1), Mild);
        // One step only: moderate never jumps to critical.
        assert_eq!(retier(Moderate, 3.0), Urgent);
    }
}
