use std::path::PathBuf;

use crate::triage::sanitize::MAX_SYMPTOM_LENGTH;
use crate::triage::types::TriageError;

/// Application-level constants
pub const APP_NAME: &str = "dispatch-triage";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Env var: "false"/"0"/"off" switches the default analysis to basic mode.
pub const ENV_USE_NLP: &str = "TRIAGE_USE_NLP";
/// Env var: maximum description length in characters.
pub const ENV_MAX_INPUT_LENGTH: &str = "TRIAGE_MAX_INPUT_LENGTH";
/// Env var: path to a JSON vocabulary replacing the built-in one.
pub const ENV_VOCABULARY_PATH: &str = "TRIAGE_VOCABULARY_PATH";

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "dispatch_triage=info"
}

/// Engine settings resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineOptions {
    /// Default for requests that do not say which mode to use.
    pub use_nlp: bool,
    pub max_input_length: usize,
    pub vocabulary_path: Option<PathBuf>,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            use_nlp: true,
            max_input_length: MAX_SYMPTOM_LENGTH,
            vocabulary_path: None,
        }
    }
}

impl EngineOptions {
    /// Read overrides from the process environment.
    pub fn from_env() -> Result<Self, TriageError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve options from any key lookup. Unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, TriageError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut options = Self::default();

        if let Some(raw) = lookup(ENV_USE_NLP) {
            options.use_nlp = parse_bool(&raw).ok_or(TriageError::InvalidConfig {
                key: ENV_USE_NLP,
                value: raw,
            })?;
        }

        if let Some(raw) = lookup(ENV_MAX_INPUT_LENGTH) {
            options.max_input_length = match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(TriageError::InvalidConfig {
                        key: ENV_MAX_INPUT_LENGTH,
                        value: raw,
                    })
                }
            };
        }

        if let Some(raw) = lookup(ENV_VOCABULARY_PATH) {
            if !raw.trim().is_empty() {
                options.vocabulary_path = Some(PathBuf::from(raw.trim()));
            }
        }

        Ok(options)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
