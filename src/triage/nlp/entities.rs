use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Entity category a pattern feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntityCategory {
    Symptom,
    BodyPart,
    Condition,
}

struct EntityPattern {
    regex: Regex,
    category: EntityCategory,
}

/// Medical vocabulary found in the text, one deduplicated list per category.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EntitySet {
    pub symptoms: Vec<String>,
    pub body_parts: Vec<String>,
    pub conditions: Vec<String>,
}

/// Scanned in declaration order; first-seen order is preserved in the output.
static ENTITY_PATTERNS: LazyLock<Vec<EntityPattern>> = LazyLock::new(|| {
    vec![
        pattern(
            r"\b(?:pain|ache|aches|aching|hurts?|fever|cough|coughing|nausea|vomiting|diarrh(?:o)?ea|headache|migraine|dizziness|dizzy|fatigue|weakness|numbness|tingling|bleeding|swelling|rash|itching|cramps?|chills|sweating|seizures?|convulsions?|fainting|confusion|wheezing|congestion|burns?)\b",
            EntityCategory::Symptom,
        ),
        pattern(
            r"\b(?:shortness of breath|difficulty breathing|trouble breathing|sore throat|runny nose|blurred vision|loss of consciousness|chest tightness)\b",
            EntityCategory::Symptom,
        ),
        pattern(
            r"\b(?:head|face|eyes?|ears?|nose|mouth|throat|neck|chest|heart|lungs?|abdomen|stomach|belly|back|spine|shoulders?|arms?|elbows?|wrists?|hands?|fingers?|hips?|legs?|knees?|ankles?|feet|foot|toes?|skin|jaw)\b",
            EntityCategory::BodyPart,
        ),
        pattern(
            r"\b(?:diabetes|diabetic|asthma|hypertension|high blood pressure|heart disease|heart attack|stroke|copd|epilepsy|pregnan(?:t|cy)|cancer|allerg(?:y|ies|ic)|infection|pneumonia|covid)\b",
            EntityCategory::Condition,
        ),
    ]
});

fn pattern(regex_str: &str, category: EntityCategory) -> EntityPattern {
    EntityPattern {
        regex: Regex::new(regex_str).expect("Invalid entity regex pattern"),
        category,
    }
}

/// Collect symptom, body-part and condition mentions from normalized text.
///
/// No negation awareness: "no chest pain" still yields `pain` and `chest`.
pub fn extract_entities(text: &str) -> EntitySet {
    let mut entities = EntitySet::default();
    let mut seen: HashSet<(usize, String)> = HashSet::new();

    for ep in ENTITY_PATTERNS.iter() {
        let (slot, list) = match ep.category {
            EntityCategory::Symptom => (0, &mut entities.symptoms),
            EntityCategory::BodyPart => (1, &mut entities.body_parts),
            EntityCategory::Condition => (2, &mut entities.conditions),
        };
        for mat in ep.regex.find_iter(text) {
            let term = mat.as_str().to_lowercase();
            if seen.insert((slot, term.clone())) {
                list.push(term);
            }
        }
    }

    entities
}
