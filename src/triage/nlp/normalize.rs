use std::sync::LazyLock;

use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};

/// Word tokens, keeping in-word apostrophes so "doesn't" stays one token.
static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z0-9]+(?:'[a-z]+)?").expect("valid word regex"));

/// Lowercased, trimmed input with its token and stem sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText {
    pub text: String,
    pub tokens: Vec<String>,
    pub stems: Vec<String>,
}

impl NormalizedText {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Lowercase and trim. Curly apostrophes are folded so contractions tokenize.
pub fn normalize_text(raw: &str) -> String {
    raw.trim().to_lowercase().replace('\u{2019}', "'")
}

/// Split already-normalized text into word tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    WORD.find_iter(text).map(|m| m.as_str().to_string()).collect()
}

/// Porter2 stems of the given tokens.
pub fn stem_tokens(tokens: &[String]) -> Vec<String> {
    let stemmer = Stemmer::create(Algorithm::English);
    tokens.iter().map(|t| stemmer.stem(t).to_string()).collect()
}

/// Full normalizer stage.
pub fn normalize(raw: &str) -> NormalizedText {
    let text = normalize_text(raw);
    let tokens = tokenize(&text);
    let stems = stem_tokens(&tokens);
    NormalizedText { text, tokens, stems }
}
