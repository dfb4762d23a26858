//! Triage orchestration: normalizer → NLP analyzers → keyword matcher →
//! severity scorer → confidence → recommendations.
//!
//! `TriageEngine` holds only immutable, validated configuration, so one
//! instance can be shared across threads and requests without locking.
//! Every analysis allocates its own working state.

use std::sync::{Arc, LazyLock};

use crate::config::EngineOptions;

use super::matcher::{match_keywords, match_keywords_with_nlp};
use super::nlp::{analyze_normalized, normalize, NlpAnalysis};
use super::recommendations::generate_recommendations;
use super::sanitize::validate_symptoms;
use super::scoring::{calculate_confidence, determine_severity};
use super::types::{
    AnalysisDetails, NlpInsights, PatientInfo, TriageError, TriageRequest, TriageResult,
};
use super::vocabulary::KeywordVocabulary;

static DEFAULT_ENGINE: LazyLock<TriageEngine> = LazyLock::new(TriageEngine::new);

/// Analyze with the built-in vocabulary.
pub fn analyze_symptoms(
    symptoms: &str,
    patient_info: Option<&PatientInfo>,
    use_nlp: bool,
) -> TriageResult {
    DEFAULT_ENGINE.analyze(symptoms, patient_info, use_nlp)
}

/// The symptom triage engine.
#[derive(Debug, Clone)]
pub struct TriageEngine {
    vocabulary: Arc<KeywordVocabulary>,
    max_input_length: usize,
    use_nlp: bool,
}

impl TriageEngine {
    /// Engine over the built-in vocabulary with default limits.
    pub fn new() -> Self {
        Self::with_vocabulary(KeywordVocabulary::builtin().clone())
    }

    pub fn with_vocabulary(vocabulary: KeywordVocabulary) -> Self {
        let defaults = EngineOptions::default();
        Self {
            vocabulary: Arc::new(vocabulary),
            max_input_length: defaults.max_input_length,
            use_nlp: defaults.use_nlp,
        }
    }

    /// Build from startup options. A vocabulary override is loaded and
    /// validated here; failures are configuration errors.
    pub fn from_options(options: &EngineOptions) -> Result<Self, TriageError> {
        let vocabulary = match &options.vocabulary_path {
            Some(path) => {
                let vocab = KeywordVocabulary::from_json_file(path)?;
                tracing::info!(
                    path = %path.display(),
                    phrases = vocab.len(),
                    "Loaded triage vocabulary override"
                );
                vocab
            }
            None => KeywordVocabulary::builtin().clone(),
        };
        Ok(Self {
            vocabulary: Arc::new(vocabulary),
            max_input_length: options.max_input_length,
            use_nlp: options.use_nlp,
        })
    }

    pub fn vocabulary(&self) -> &KeywordVocabulary {
        &self.vocabulary
    }

    /// Mode used for requests that do not choose one.
    pub fn default_use_nlp(&self) -> bool {
        self.use_nlp
    }

    /// Run the full pipeline. Never fails: empty text means no matches.
    ///
    /// `patient_info` is carried for callers; it does not influence scoring.
    pub fn analyze(
        &self,
        symptoms: &str,
        patient_info: Option<&PatientInfo>,
        use_nlp: bool,
    ) -> TriageResult {
        let normalized = normalize(symptoms);

        let nlp: Option<NlpAnalysis> = use_nlp.then(|| analyze_normalized(&normalized));

        let keywords = match &nlp {
            Some(nlp) => match_keywords_with_nlp(nlp, &self.vocabulary),
            None => match_keywords(&normalized.text, &self.vocabulary),
        };

        let severity = determine_severity(&keywords);
        let confidence = calculate_confidence(&keywords, nlp.as_ref());
        let recommendations = generate_recommendations(Some(severity), nlp.as_ref());

        tracing::debug!(
            use_nlp,
            tokens = normalized.tokens.len(),
            has_patient_info = patient_info.is_some(),
            critical = keywords.critical.len(),
            urgent = keywords.urgent.len(),
            moderate = keywords.moderate.len(),
            mild = keywords.mild.len(),
            "Keyword analysis complete"
        );
        tracing::info!(
            severity = severity.as_str(),
            confidence,
            total_matches = keywords.total_matches,
            use_nlp,
            "Symptom triage complete"
        );

        TriageResult {
            severity,
            confidence,
            analysis_details: AnalysisDetails::from(&keywords),
            detected_symptoms: keywords.matched_keywords,
            recommendations,
            nlp_insights: nlp.map(|nlp| NlpInsights {
                entities: nlp.entities,
                severity: nlp.severity,
                temporal: nlp.temporal,
                sentiment: nlp.sentiment,
                negations: nlp.negations,
                expanded_terms: nlp.expanded_symptoms.added_terms,
            }),
        }
    }

    /// Boundary entry point: reject empty or oversized input, clean it,
    /// then analyze in the requested mode (or the configured default).
    pub fn analyze_request(&self, request: &TriageRequest) -> Result<TriageResult, TriageError> {
        let sanitized = validate_symptoms(&request.symptoms, self.max_input_length)
            .inspect_err(|e| tracing::warn!(error = %e, "Rejected symptom description"))?;
        if sanitized.was_modified {
            tracing::debug!(
                modifications = ?sanitized.modifications,
                "Symptom description sanitized"
            );
        }
        Ok(self.analyze(
            &sanitized.text,
            request.patient_info.as_ref(),
            request.use_nlp.unwrap_or(self.use_nlp),
        ))
    }
}

impl Default for TriageEngine {
    fn default() -> Self {
        Self::new()
    }
}
