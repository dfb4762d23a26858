use super::nlp::{DistressLevel, NlpAnalysis, Onset};
use super::types::FinalSeverity;

// ── Action lists ────────────────────────────────────────────

const CRITICAL_ACTIONS: &[&str] = &[
    "Call emergency services (911) immediately",
    "Do not move the patient unless they are in immediate danger",
    "Monitor vital signs (breathing, pulse, consciousness) until help arrives",
];

const HIGH_ACTIONS: &[&str] = &[
    "Seek immediate medical attention",
    "Go to the nearest emergency room",
];

const MEDIUM_ACTIONS: &[&str] = &[
    "Schedule a medical appointment within 24-48 hours",
    "Monitor symptoms and seek care sooner if they worsen",
];

const LOW_ACTIONS: &[&str] = &[
    "Rest and monitor your symptoms",
    "Stay hydrated",
    "Consult a healthcare provider if symptoms persist or worsen",
];

const FALLBACK_ACTION: &str = "Consult a healthcare provider for proper evaluation";

const ACUTE_ONSET_NOTE: &str =
    "Sudden onset detected: symptoms that start abruptly need prompt evaluation";

const HIGH_DISTRESS_NOTE: &str =
    "Patient appears to be in significant distress: provide reassurance and stay with them";

/// Ordered actions for a verdict, prefixed with NLP context lines.
///
/// `severity` is `None` when the caller has no usable verdict; the
/// generic consult line is returned in that case.
pub fn generate_recommendations(
    severity: Option<FinalSeverity>,
    nlp: Option<&NlpAnalysis>,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if let Some(nlp) = nlp {
        if nlp.temporal.onset == Some(Onset::Acute) {
            recommendations.push(ACUTE_ONSET_NOTE.to_string());
        }
        if nlp.sentiment.distress_level == DistressLevel::High {
            recommendations.push(HIGH_DISTRESS_NOTE.to_string());
        }
    }

    let Some(severity) = severity else {
        recommendations.push(FALLBACK_ACTION.to_string());
        return recommendations;
    };

    let actions = match severity {
        FinalSeverity::Critical => CRITICAL_ACTIONS,
        FinalSeverity::High => HIGH_ACTIONS,
        FinalSeverity::Medium => MEDIUM_ACTIONS,
        FinalSeverity::Low => LOW_ACTIONS,
    };
    recommendations.extend(actions.iter().map(|a| a.to_string()));

    if let Some(nlp) = nlp {
        match severity {
            FinalSeverity::Critical if !nlp.entities.body_parts.is_empty() => {
                recommendations.push(format!(
                    "Affected areas: {}",
                    nlp.entities.body_parts.join(", ")
                ));
            }
            FinalSeverity::High => {
                if let Some(duration) = &nlp.temporal.duration {
                    recommendations.push(format!(
                        "Symptoms reported for {duration}: tell medical staff when they started"
                    ));
                }
            }
            FinalSeverity::Medium if !nlp.entities.symptoms.is_empty() => {
                recommendations.push(format!(
                    "Primary symptoms to mention: {}",
                    nlp.entities.symptoms.join(", ")
                ));
            }
            _ => {}
        }
    }

    recommendations
}
