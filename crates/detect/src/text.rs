//! Shared text utilities for the detection signals.

use once_cell::sync::Lazy;
use regex::Regex;

static SENTENCE_SPLIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[.!?]["'\u{201D}\u{2019})\]]*(?:\s|$)"#).unwrap());

static EDGE_PUNCT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\W+|\W+$").unwrap());

/// Split text into trimmed, non-empty sentences.
pub(crate) fn split_sentences(text: &str) -> Vec<String> {
    SENTENCE_SPLIT_RE
        .split(text)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Lowercased words with leading/trailing punctuation stripped.
pub(crate) fn words(text: &str) -> Vec<String> {
    text.split_whitespace()
        .filter_map(|raw| {
            let stripped = EDGE_PUNCT_RE.replace_all(raw, "").to_lowercase();
            if stripped.is_empty() {
                None
            } else {
                Some(stripped)
            }
        })
        .collect()
}

/// First `prefix_chars` characters of a sentence, lowercased. Char-boundary
/// safe for accented text.
pub(crate) fn sentence_opening(sentence: &str, prefix_chars: usize) -> String {
    sentence
        .chars()
        .take(prefix_chars)
        .collect::<String>()
        .to_lowercase()
}
