use regex::Regex;
use std::sync::LazyLock;

// A word starts with a word character and continues through word characters,
// apostrophes (' and U+2019) and hyphens (- and U+2011), ending on a boundary.
static WORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w[\w'\x{2019}\x{2011}-]*\b").unwrap());

/// Split text into words, in order of appearance
pub fn words(text: &str) -> Vec<&str> {
    WORD_REGEX.find_iter(text).map(|m| m.as_str()).collect()
}

pub fn word_count(text: &str) -> usize {
    WORD_REGEX.find_iter(text).count()
}

/// First `max_words` words joined with single spaces.
/// Punctuation between words is dropped.
pub fn truncate_words(text: &str, max_words: usize) -> String {
    WORD_REGEX
        .find_iter(text)
        .take(max_words)
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
