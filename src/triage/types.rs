use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::nlp::{EntitySet, NegationReport, SentimentReport, SeverityModifiers, TemporalInfo};

// ---------------------------------------------------------------------------
// SeverityTier
// ---------------------------------------------------------------------------

/// Vocabulary bucket of a single matched phrase.
///
/// Declaration order is ascending so the derived `Ord` gives
/// `Critical > Urgent > Moderate > Mild`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SeverityTier {
    Mild,
    Moderate,
    Urgent,
    Critical,
}

impl SeverityTier {
    /// Iteration order used by the keyword matcher.
    pub const PRIORITY: [SeverityTier; 4] = [
        SeverityTier::Critical,
        SeverityTier::Urgent,
        SeverityTier::Moderate,
        SeverityTier::Mild,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Urgent => "urgent",
            Self::Moderate => "moderate",
            Self::Mild => "mild",
        }
    }
}

// ---------------------------------------------------------------------------
// FinalSeverity
// ---------------------------------------------------------------------------

/// Case-level verdict returned to callers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FinalSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FinalSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

// ---------------------------------------------------------------------------
// Keyword matches
// ---------------------------------------------------------------------------

/// One distinct vocabulary phrase found in the input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    #[serde(rename = "keyword")]
    pub phrase: String,
    /// Tier after NLP re-tiering (equal to the vocabulary tier in basic mode).
    #[serde(rename = "severity")]
    pub tier: SeverityTier,
    /// Vocabulary tier, only recorded by the NLP-adjusted matcher.
    #[serde(rename = "originalSeverity", skip_serializing_if = "Option::is_none", default)]
    pub original_tier: Option<SeverityTier>,
    #[serde(default)]
    pub nlp_adjusted: bool,
}

/// Tier-bucketed keyword matches for one analysis.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct KeywordAnalysis {
    pub critical: Vec<String>,
    pub urgent: Vec<String>,
    pub moderate: Vec<String>,
    pub mild: Vec<String>,
    pub matched_keywords: Vec<MatchRecord>,
    pub total_matches: usize,
}

impl KeywordAnalysis {
    pub(crate) fn push(&mut self, record: MatchRecord) {
        let bucket = match record.tier {
            SeverityTier::Critical => &mut self.critical,
            SeverityTier::Urgent => &mut self.urgent,
            SeverityTier::Moderate => &mut self.moderate,
            SeverityTier::Mild => &mut self.mild,
        };
        bucket.push(record.phrase.clone());
        self.matched_keywords.push(record);
        self.total_matches = self.matched_keywords.len();
    }
}

// ---------------------------------------------------------------------------
// Request / result
// ---------------------------------------------------------------------------

/// Optional patient metadata. Accepted and carried, not scored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PatientInfo {
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub medical_history: Vec<String>,
}

/// What the intake collaborator hands to the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriageRequest {
    pub symptoms: String,
    #[serde(default)]
    pub patient_info: Option<PatientInfo>,
    /// `None` defers to the engine's configured mode.
    #[serde(
        rename = "useNLP",
        alias = "useNlp",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub use_nlp: Option<bool>,
}

impl TriageRequest {
    pub fn new(symptoms: impl Into<String>) -> Self {
        Self {
            symptoms: symptoms.into(),
            patient_info: None,
            use_nlp: None,
        }
    }
}

/// Per-tier summary for dashboards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisDetails {
    pub critical_keywords: Vec<String>,
    pub urgent_keywords: Vec<String>,
    pub moderate_keywords: Vec<String>,
    pub mild_keywords: Vec<String>,
    pub total_matches: usize,
}

impl From<&KeywordAnalysis> for AnalysisDetails {
    fn from(analysis: &KeywordAnalysis) -> Self {
        Self {
            critical_keywords: analysis.critical.clone(),
            urgent_keywords: analysis.urgent.clone(),
            moderate_keywords: analysis.moderate.clone(),
            mild_keywords: analysis.mild.clone(),
            total_matches: analysis.total_matches,
        }
    }
}

/// NLP signals surfaced to callers alongside the verdict.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NlpInsights {
    pub entities: EntitySet,
    pub severity: SeverityModifiers,
    pub temporal: TemporalInfo,
    pub sentiment: SentimentReport,
    pub negations: NegationReport,
    pub expanded_terms: Vec<String>,
}

/// Public output of one triage analysis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TriageResult {
    pub severity: FinalSeverity,
    pub confidence: u8,
    pub detected_symptoms: Vec<MatchRecord>,
    pub recommendations: Vec<String>,
    pub analysis_details: AnalysisDetails,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub nlp_insights: Option<NlpInsights>,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Triage errors. Analysis itself is infallible; these come from the
/// request boundary and from loading configuration.
#[derive(Error, Debug)]
pub enum TriageError {
    #[error("Symptom description is empty")]
    EmptyInput,

    #[error("Symptom description too long: {length} characters (max {max})")]
    InputTooLong { length: usize, max: usize },

    #[error("Invalid vocabulary: {0}")]
    InvalidVocabulary(String),

    #[error("Cannot read vocabulary file: {0}")]
    VocabularyIo(#[from] std::io::Error),

    #[error("Cannot parse vocabulary file: {0}")]
    VocabularyParse(#[from] serde_json::Error),

    #[error("Invalid configuration value for {key}: {value}")]
    InvalidConfig { key: &'static str, value: String },
}
