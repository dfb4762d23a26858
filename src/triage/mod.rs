pub mod types;
pub mod vocabulary;
pub mod nlp;
pub mod matcher;
pub mod scoring;
pub mod recommendations;
pub mod sanitize; // Request boundary cleanup
pub mod engine;

pub use engine::{analyze_symptoms, TriageEngine};
pub use types::{
    AnalysisDetails, FinalSeverity, KeywordAnalysis, MatchRecord, NlpInsights, PatientInfo,
    SeverityTier, TriageError, TriageRequest, TriageResult,
};
pub use vocabulary::{KeywordVocabulary, VocabularyTiers};
