use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::quiz::vocabulary;

/// Sentences this short (in chars) or shorter are dropped.
pub const MIN_SENTENCE_CHARS: usize = 20;
/// Tokens this short (in chars) or shorter never become keywords.
pub const MIN_KEYWORD_CHARS: usize = 4;
pub const DEFAULT_MAX_PHRASES: usize = 10;

static SENTENCE_TERMINATORS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[.!?]+").expect("SENTENCE_TERMINATORS is a valid regex pattern")
});

/// Splits `text` into sentences and pulls out up to `max_phrases` keywords,
/// using the built-in stop-word list.
///
/// Sentences keep the order they have in the text. Keyword order is not part
/// of the contract, compare them as a set.
pub fn extract_key_phrases(text: &str, max_phrases: usize) -> (Vec<String>, Vec<String>) {
    let stop_words = vocabulary::default_stop_words();
    (
        split_sentences(text),
        extract_keywords(text, max_phrases, &stop_words),
    )
}

pub fn split_sentences(text: &str) -> Vec<String> {
    SENTENCE_TERMINATORS
        .split(text)
        .map(str::trim)
        .filter(|sentence| sentence.chars().count() > MIN_SENTENCE_CHARS)
        .map(String::from)
        .collect()
}

/// Lowercased whitespace tokens that are long enough and not stop words.
/// Tokens keep any punctuation glued to them ("sunlight," stays as is).
pub fn extract_keywords(
    text: &str,
    max_phrases: usize,
    stop_words: &HashSet<String>,
) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut seen = HashSet::new();

    lowered
        .split_whitespace()
        .filter(|word| word.chars().count() > MIN_KEYWORD_CHARS)
        .filter(|word| !stop_words.contains(*word))
        .filter(|word| seen.insert(*word))
        .take(max_phrases)
        .map(String::from)
        .collect()
}
