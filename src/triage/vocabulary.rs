//! Prioritized medical keyword vocabulary.
//!
//! Four tiers of lowercase phrases. A vocabulary is validated once when it
//! is built and never changes afterwards; within each tier phrases are kept
//! longest-first so specific phrases are tried before their substrings.

use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use super::types::{SeverityTier, TriageError};

// ── Built-in tiers ──────────────────────────────────────────

static CRITICAL_KEYWORDS: &[&str] = &[
    "chest pain",
    "crushing chest pain",
    "difficulty breathing",
    "stopped breathing",
    "unconscious",
    "cardiac arrest",
    "heart attack",
    "stroke",
    "seizure",
    "severe bleeding",
    "uncontrolled bleeding",
    "choking",
    "anaphylaxis",
    "anaphylactic",
    "severe allergic reaction",
    "overdose",
    "suicidal",
    "gunshot",
    "stab wound",
    "severe burn",
    "blue lips",
];

static URGENT_KEYWORDS: &[&str] = &[
    "severe abdominal pain",
    "severe pain",
    "severe headache",
    "severe vomiting",
    "severe dizziness",
    "high fever",
    "shortness of breath",
    "bleeding",
    "vomiting blood",
    "coughing blood",
    "blood in stool",
    "broken bone",
    "fracture",
    "deep cut",
    "head injury",
    "fainted",
    "fainting",
    "confusion",
    "slurred speech",
    "vision loss",
    "numbness",
    "allergic reaction",
    "poisoning",
    "dehydration",
    "persistent vomiting",
];

static MODERATE_KEYWORDS: &[&str] = &[
    "fever",
    "vomiting",
    "abdominal pain",
    "stomach pain",
    "back pain",
    "ear pain",
    "headache",
    "migraine",
    "dizziness",
    "nausea",
    "diarrhea",
    "persistent cough",
    "cough",
    "sore throat",
    "rash",
    "swelling",
    "sprain",
    "infection",
    "moderate pain",
    "painful urination",
];

static MILD_KEYWORDS: &[&str] = &[
    "mild headache",
    "mild pain",
    "minor pain",
    "slight fever",
    "low-grade fever",
    "mild cough",
    "mild nausea",
    "mild rash",
    "runny nose",
    "stuffy nose",
    "sneezing",
    "congestion",
    "minor cut",
    "small cut",
    "bruise",
    "itching",
    "sore muscles",
    "fatigue",
    "tiredness",
];

static BUILTIN: LazyLock<KeywordVocabulary> = LazyLock::new(|| {
    KeywordVocabulary::new(VocabularyTiers::builtin()).expect("built-in vocabulary is valid")
});

// ── Raw tiers ───────────────────────────────────────────────

/// Unvalidated tier lists, as written in a vocabulary file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VocabularyTiers {
    #[serde(default)]
    pub critical: Vec<String>,
    #[serde(default)]
    pub urgent: Vec<String>,
    #[serde(default)]
    pub moderate: Vec<String>,
    #[serde(default)]
    pub mild: Vec<String>,
}

impl VocabularyTiers {
    pub fn builtin() -> Self {
        let owned = |list: &[&str]| -> Vec<String> { list.iter().map(|s| s.to_string()).collect() };
        Self {
            critical: owned(CRITICAL_KEYWORDS),
            urgent: owned(URGENT_KEYWORDS),
            moderate: owned(MODERATE_KEYWORDS),
            mild: owned(MILD_KEYWORDS),
        }
    }

    fn tier(&self, tier: SeverityTier) -> &[String] {
        match tier {
            SeverityTier::Critical => &self.critical,
            SeverityTier::Urgent => &self.urgent,
            SeverityTier::Moderate => &self.moderate,
            SeverityTier::Mild => &self.mild,
        }
    }
}

// ── Validated vocabulary ────────────────────────────────────

/// Immutable, validated vocabulary. Phrases are sorted longest-first per tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordVocabulary {
    critical: Vec<String>,
    urgent: Vec<String>,
    moderate: Vec<String>,
    mild: Vec<String>,
}

impl KeywordVocabulary {
    /// Validate raw tiers and order each one longest-first.
    pub fn new(tiers: VocabularyTiers) -> Result<Self, TriageError> {
        for tier in SeverityTier::PRIORITY {
            validate_tier(tier, tiers.tier(tier))?;
        }
        Ok(Self {
            critical: longest_first(tiers.critical),
            urgent: longest_first(tiers.urgent),
            moderate: longest_first(tiers.moderate),
            mild: longest_first(tiers.mild),
        })
    }

    /// The process-wide built-in vocabulary.
    pub fn builtin() -> &'static KeywordVocabulary {
        &BUILTIN
    }

    /// Load and validate a JSON vocabulary file
    /// (`{"critical": [..], "urgent": [..], "moderate": [..], "mild": [..]}`).
    pub fn from_json_file(path: &Path) -> Result<Self, TriageError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, TriageError> {
        let tiers: VocabularyTiers = serde_json::from_str(raw)?;
        Self::new(tiers)
    }

    /// Phrases of one tier, longest first.
    pub fn phrases(&self, tier: SeverityTier) -> &[String] {
        match tier {
            SeverityTier::Critical => &self.critical,
            SeverityTier::Urgent => &self.urgent,
            SeverityTier::Moderate => &self.moderate,
            SeverityTier::Mild => &self.mild,
        }
    }

    /// Every phrase with its tier, in matcher iteration order.
    pub fn iter(&self) -> impl Iterator<Item = (SeverityTier, &str)> + '_ {
        SeverityTier::PRIORITY
            .into_iter()
            .flat_map(move |tier| self.phrases(tier).iter().map(move |p| (tier, p.as_str())))
    }

    pub fn len(&self) -> usize {
        self.critical.len() + self.urgent.len() + self.moderate.len() + self.mild.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn validate_tier(tier: SeverityTier, phrases: &[String]) -> Result<(), TriageError> {
    let mut seen = HashSet::new();
    for phrase in phrases {
        if phrase.trim().is_empty() {
            return Err(TriageError::InvalidVocabulary(format!(
                "empty phrase in {} tier",
                tier.as_str()
            )));
        }
        if phrase.trim() != phrase.as_str() {
            return Err(TriageError::InvalidVocabulary(format!(
                "phrase '{phrase}' in {} tier has surrounding whitespace",
                tier.as_str()
            )));
        }
        if phrase.to_lowercase() != *phrase {
            return Err(TriageError::InvalidVocabulary(format!(
                "phrase '{phrase}' in {} tier is not lowercase",
                tier.as_str()
            )));
        }
        if !seen.insert(phrase.as_str()) {
            return Err(TriageError::InvalidVocabulary(format!(
                "duplicate phrase '{phrase}' in {} tier",
                tier.as_str()
            )));
        }
    }
    Ok(())
}

/// Stable sort by descending character count.
fn longest_first(mut phrases: Vec<String>) -> Vec<String> {
    phrases.sort_by_key(|p| std::cmp::Reverse(p.chars().count()));
    phrases
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn builtin_is_valid_and_nonempty() {
        let vocab = KeywordVocabulary::new(VocabularyTiers::builtin()).unwrap();
        for tier in SeverityTier::PRIORITY {
            assert!(!vocab.phrases(tier).is_empty(), "{} tier empty", tier.as_str());
        }
        assert_eq!(&vocab, KeywordVocabulary::builtin());
    }

    #[test]
    fn tiers_are_longest_first() {
        let vocab = KeywordVocabulary::builtin();
        for tier in SeverityTier::PRIORITY {
            let lengths: Vec<usize> =
                vocab.phrases(tier).iter().map(|p| p.chars().count()).collect();
            assert!(lengths.windows(2).all(|w| w[0] >= w[1]), "{}", tier.as_str());
        }
        assert_eq!(vocab.phrases(SeverityTier::Critical)[0], "severe allergic reaction");
    }

    #[test]
    fn equal_lengths_keep_declared_order() {
        let vocab = KeywordVocabulary::new(VocabularyTiers {
            critical: vec!["bbb".into(), "aaa".into(), "cccc".into()],
            ..Default::default()
        })
        .unwrap();
        assert_eq!(vocab.phrases(SeverityTier::Critical), ["cccc", "bbb", "aaa"]);
    }

    #[test]
    fn iter_follows_tier_priority() {
        let vocab = KeywordVocabulary::builtin();
        let tiers: Vec<SeverityTier> = vocab.iter().map(|(t, _)| t).collect();
        assert_eq!(tiers.first(), Some(&SeverityTier::Critical));
        assert_eq!(tiers.last(), Some(&SeverityTier::Mild));
        assert!(tiers.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(tiers.len(), vocab.len());
    }

    #[test]
    fn rejects_uppercase_phrase() {
        let err = KeywordVocabulary::new(VocabularyTiers {
            urgent: vec!["High Fever".into()],
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, TriageError::InvalidVocabulary(_)));
        assert!(err.to_string().contains("not lowercase"));
    }

    #[test]
    fn rejects_empty_and_padded_phrases() {
        for bad in ["", "   ", " fever"] {
            let result = KeywordVocabulary::new(VocabularyTiers {
                moderate: vec![bad.to_string()],
                ..Default::default()
            });
            assert!(result.is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn rejects_duplicates_within_tier() {
        let err = KeywordVocabulary::new(VocabularyTiers {
            mild: vec!["rash".into(), "rash".into()],
            ..Default::default()
        })
        .unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn same_phrase_in_two_tiers_is_allowed() {
        let vocab = KeywordVocabulary::new(VocabularyTiers {
            urgent: vec!["rash".into()],
            mild: vec!["rash".into()],
            ..Default::default()
        });
        assert!(vocab.is_ok());
    }

    #[test]
    fn loads_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"critical": ["not breathing"], "moderate": ["earache", "toothache"]}}"#
        )
        .unwrap();
        let vocab = KeywordVocabulary::from_json_file(file.path()).unwrap();
        assert_eq!(vocab.phrases(SeverityTier::Critical), ["not breathing"]);
        assert!(vocab.phrases(SeverityTier::Urgent).is_empty());
        assert_eq!(vocab.len(), 3);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = KeywordVocabulary::from_json_file(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, TriageError::VocabularyIo(_)));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = KeywordVocabulary::from_json_str("{ critical: ").unwrap_err();
        assert!(matches!(err, TriageError::VocabularyParse(_)));
    }
}
