use serde::{Deserialize, Serialize};

/// Lower bound of the returned multiplier.
pub const MIN_MULTIPLIER: f64 = 0.1;
/// Upper bound of the returned multiplier.
pub const MAX_MULTIPLIER: f64 = 3.0;

// ── Modifier tables ─────────────────────────────────────────

static INTENSIFIERS: &[(&str, f64)] = &[
    ("extreme", 2.0),
    ("extremely", 2.0),
    ("worst", 2.0),
    ("unbearable", 2.0),
    ("excruciating", 2.0),
    ("severe", 1.8),
    ("severely", 1.8),
    ("terrible", 1.8),
    ("horrible", 1.8),
    ("crushing", 1.8),
    ("intense", 1.7),
    ("agonizing", 1.9),
    ("very", 1.5),
    ("really", 1.3),
    ("sharp", 1.3),
    ("bad", 1.3),
    ("significant", 1.4),
    ("heavy", 1.3),
];

static REDUCERS: &[(&str, f64)] = &[
    ("mild", 0.5),
    ("mildly", 0.5),
    ("minor", 0.5),
    ("slight", 0.6),
    ("slightly", 0.6),
    ("little", 0.7),
    ("manageable", 0.6),
    ("tolerable", 0.7),
    ("moderate", 0.8),
    ("somewhat", 0.8),
];

/// Whether a modifier raises or lowers intensity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ModifierKind {
    Intensifier,
    Reducer,
}

/// Coarse intensity label derived from the unclamped product.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum IntensityLevel {
    Low,
    Medium,
    High,
    Critical,
}

/// One modifier token found in the text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModifierHit {
    pub word: String,
    pub factor: f64,
    pub kind: ModifierKind,
}

/// Aggregate linguistic intensity of the description.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeverityModifiers {
    /// Product of all factors, clamped to `[MIN_MULTIPLIER, MAX_MULTIPLIER]`.
    pub multiplier: f64,
    pub modifiers: Vec<ModifierHit>,
    /// Category of the product before clamping.
    pub level: IntensityLevel,
}

impl Default for SeverityModifiers {
    fn default() -> Self {
        Self {
            multiplier: 1.0,
            modifiers: Vec::new(),
            level: IntensityLevel::Medium,
        }
    }
}

fn lookup(token: &str) -> Option<ModifierHit> {
    let (entry, kind) = if let Some(hit) = INTENSIFIERS.iter().find(|(w, _)| *w == token) {
        (hit, ModifierKind::Intensifier)
    } else {
        (REDUCERS.iter().find(|(w, _)| *w == token)?, ModifierKind::Reducer)
    };
    Some(ModifierHit {
        word: entry.0.to_string(),
        factor: entry.1,
        kind,
    })
}

fn categorize(product: f64) -> IntensityLevel {
    if product >= 1.8 {
        IntensityLevel::Critical
    } else if product >= 1.3 {
        IntensityLevel::High
    } else if product >= 0.8 {
        IntensityLevel::Medium
    } else {
        IntensityLevel::Low
    }
}

/// Multiply every intensifier/reducer token into one bounded multiplier.
pub fn analyze_modifiers(tokens: &[String]) -> SeverityModifiers {
    let mut product = 1.0_f64;
    let mut modifiers = Vec::new();

    for token in tokens {
        if let Some(hit) = lookup(token) {
            product *= hit.factor;
            modifiers.push(hit);
        }
    }

    SeverityModifiers {
        multiplier: product.clamp(MIN_MULTIPLIER, MAX_MULTIPLIER),
        modifiers,
        level: categorize(product),
    }
}
