use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Onset class of the complaint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Onset {
    Acute,
    Subacute,
    Chronic,
}

/// How often the symptoms occur.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Constant,
    Intermittent,
}

/// Timing cues found in the description.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TemporalInfo {
    pub onset: Option<Onset>,
    /// First literal duration phrase, e.g. "3 days".
    pub duration: Option<String>,
    pub frequency: Option<Frequency>,
}

/// Checked in this order; the first marker present wins.
static ONSET_MARKERS: &[(&str, Onset)] = &[
    ("sudden", Onset::Acute),
    ("suddenly", Onset::Acute),
    ("hours", Onset::Acute),
    ("minutes", Onset::Acute),
    ("days", Onset::Subacute),
    ("weeks", Onset::Chronic),
    ("months", Onset::Chronic),
    ("years", Onset::Chronic),
    ("ongoing", Onset::Chronic),
    ("persistent", Onset::Chronic),
    ("constant", Onset::Chronic),
];

static DURATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d+\s*(?:minute|hour|day|week|month|year)s?").expect("valid duration regex")
});

/// Classify onset, duration and frequency from normalized text.
pub fn extract_temporal(text: &str) -> TemporalInfo {
    let onset = ONSET_MARKERS
        .iter()
        .find(|(marker, _)| text.contains(*marker))
        .map(|(_, onset)| *onset);

    let duration = DURATION.find(text).map(|m| m.as_str().to_string());

    let frequency = if text.contains("constant") || text.contains("continuous") {
        Some(Frequency::Constant)
    } else if text.contains("intermittent") || text.contains("comes and goes") {
        Some(Frequency::Intermittent)
    } else {
        None
    };

    TemporalInfo {
        onset,
        duration,
        frequency,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sudden_is_acute() {
        let t = extract_temporal("sudden chest pain");
        assert_eq!(t.onset, Some(Onset::Acute));
        assert_eq!(t.duration, None);
    }

    #[test]
    fn table_order_beats_text_order() {
        // "weeks" appears first in the text, but "hours" is earlier in the table.
        let t = extract_temporal("cough for weeks, worse in the last few hours");
        assert_eq!(t.onset, Some(Onset::Acute));
    }

    #[test]
    fn days_is_subacute() {
        let t = extract_temporal("fever for 3 days");
        assert_eq!(t.onset, Some(Onset::Subacute));
        assert_eq!(t.duration.as_deref(), Some("3 days"));
    }

    #[test]
    fn chronic_markers() {
        for text in ["back pain for months", "persistent cough", "ongoing fatigue"] {
            assert_eq!(extract_temporal(text).onset, Some(Onset::Chronic), "{text}");
        }
    }

    #[test]
    fn singular_units_have_no_onset_but_keep_duration() {
        let t = extract_temporal("started 1 hour ago");
        assert_eq!(t.onset, None);
        assert_eq!(t.duration.as_deref(), Some("1 hour"));
    }

    #[test]
    fn first_duration_wins() {
        let t = extract_temporal("vomiting for 2hours, fever for 4 days");
        assert_eq!(t.duration.as_deref(), Some("2hours"));
    }

    #[test]
    fn frequency_constant_over_intermittent() {
        let t = extract_temporal("constant pain that is also intermittent");
        assert_eq!(t.frequency, Some(Frequency::Constant));
        let t = extract_temporal("headache comes and goes");
        assert_eq!(t.frequency, Some(Frequency::Intermittent));
        let t = extract_temporal("continuous bleeding");
        assert_eq!(t.frequency, Some(Frequency::Constant));
        assert_eq!(extract_temporal("headache").frequency, None);
    }

    #[test]
    fn empty_text_has_no_timing() {
        assert_eq!(extract_temporal(""), TemporalInfo::default());
    }
}
