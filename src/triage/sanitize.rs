//! Request boundary: clean the raw symptom description before analysis.

use super::types::TriageError;

/// Default maximum description length in characters.
pub const MAX_SYMPTOM_LENGTH: usize = 2_000;

/// Result of input sanitization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedSymptoms {
    /// The cleaned description.
    pub text: String,
    /// Whether any modifications were made.
    pub was_modified: bool,
    pub modifications: Vec<InputModification>,
}

/// Types of sanitization applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputModification {
    InvisibleUnicodeRemoved,
    ControlCharacterRemoved,
    ExcessiveLengthTruncated,
}

/// Clean a raw description. Rejects text that is empty after cleaning.
pub fn sanitize_symptoms(raw: &str, max_length: usize) -> Result<SanitizedSymptoms, TriageError> {
    let mut text = raw.to_string();
    let mut modifications = Vec::new();

    // Step 1: Remove non-visible Unicode characters
    let before = text.len();
    text = remove_invisible_unicode(&text);
    if text.len() != before {
        modifications.push(InputModification::InvisibleUnicodeRemoved);
    }

    // Step 2: Remove control characters (except newline, tab)
    let before = text.len();
    text = remove_control_characters(&text);
    if text.len() != before {
        modifications.push(InputModification::ControlCharacterRemoved);
    }

    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(TriageError::EmptyInput);
    }
    let mut text = trimmed.to_string();

    // Step 3: Truncate to maximum length
    let length = text.chars().count();
    if length > max_length {
        text = truncate_at_word_boundary(&text, max_length);
        modifications.push(InputModification::ExcessiveLengthTruncated);
        tracing::debug!(
            original_chars = length,
            kept_chars = text.chars().count(),
            "Symptom description truncated"
        );
    }

    Ok(SanitizedSymptoms {
        was_modified: !modifications.is_empty(),
        text,
        modifications,
    })
}

/// Like [`sanitize_symptoms`] but refuses oversized input instead of truncating.
/// Length is counted after cleaning.
pub fn validate_symptoms(raw: &str, max_length: usize) -> Result<SanitizedSymptoms, TriageError> {
    let sanitized = sanitize_symptoms(raw, usize::MAX)?;
    let length = sanitized.text.chars().count();
    if length > max_length {
        return Err(TriageError::InputTooLong {
            length,
            max: max_length,
        });
    }
    Ok(sanitized)
}

/// Remove zero-width and invisible Unicode characters.
fn remove_invisible_unicode(text: &str) -> String {
    text.chars()
        .filter(|c| {
            !matches!(
                *c,
                '\u{200B}'..='\u{200F}'  // Zero-width chars
                | '\u{202A}'..='\u{202E}' // Directional formatting
                | '\u{2060}'..='\u{2064}' // Invisible operators
                | '\u{FEFF}'              // BOM
                | '\u{00AD}'              // Soft hyphen
            )
        })
        .collect()
}

/// Remove control characters except newline and tab.
fn remove_control_characters(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect()
}

/// Truncate to at most `max` characters, backing up to whitespace.
fn truncate_at_word_boundary(text: &str, max: usize) -> String {
    let cut = text
        .char_indices()
        .nth(max)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len());
    let truncated = &text[..cut];
    match truncated.rfind(char::is_whitespace) {
        Some(pos) if pos > 0 => truncated[..pos].to_string(),
        _ => truncated.to_string(),
    }
}
