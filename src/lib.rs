pub mod config;
pub mod triage; // Symptom triage engine

pub use config::EngineOptions;
pub use triage::{
    analyze_symptoms, FinalSeverity, PatientInfo, TriageEngine, TriageError, TriageRequest,
    TriageResult,
};

use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber. `RUST_LOG` overrides the default filter.
///
/// Returns without error if a subscriber is already installed.
pub fn init_tracing() {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .try_init();

    if installed.is_ok() {
        tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);
    }
}
