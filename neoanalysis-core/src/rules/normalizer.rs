use super::tokenizer::{truncate_words, word_count};
use crate::types::{QUOTE_CHARS, TERMINAL_MARKS};
use regex::Regex;
use std::sync::LazyLock;

static BACKSLASH_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\\+").unwrap());

// Lookbehind is unsupported, so the "not after a word char" half of the
// possessive match is checked by hand in `strip_possessive_fragments`.
static POSSESSIVE_FRAGMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"['`]s\b").unwrap());

// Same `\w` class the tokenizer uses; `char::is_alphanumeric` misses
// combining marks such as U+0301.
static WORD_CHAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\w$").unwrap());

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s{2,}").unwrap());

static TRAILING_SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[,\-;:]+$").unwrap());

static SPACE_BEFORE_PUNCT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+([,.;!?])").unwrap());

static WRAPPED_IN_QUOTES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^['\x22\x{201C}\x{201D}\x{2018}\x{2019}].*['\x22\x{201C}\x{201D}\x{2018}\x{2019}]$")
        .unwrap()
});

static TERMINAL_ENDING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]['\x22\x{201D}\x{2019})]?\s*$").unwrap());

static REPEATED_TERMINAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([.!?])[.!?]+(['\x22\x{201D}\x{2019})]?\s*)$").unwrap());

/// Rewrites free-form model output into one sentence within the word budget.
///
/// Every step is a pure string transform; running the whole normalizer on
/// its own output returns the output unchanged.
#[derive(Debug, Clone)]
pub struct Normalizer {
    max_words: usize,
}

impl Normalizer {
    pub fn new(max_words: usize) -> Self {
        Self { max_words }
    }

    pub fn max_words(&self) -> usize {
        self.max_words
    }

    pub fn normalize(&self, raw: &str) -> String {
        let s = raw.trim();
        let s = unescape_quotes(s);
        let s = BACKSLASH_RUN.replace_all(&s, "").into_owned();
        let s = strip_possessive_fragments(&s);
        let mut s = collapse_whitespace(&s);

        let words = word_count(&s);
        if words > self.max_words {
            tracing::debug!("✂️  Truncating summary from {} to {} words", words, self.max_words);
            s = truncate_words(&s, self.max_words);
        }

        let s = TRAILING_SEPARATORS.replace(&s, "").trim().to_string();
        let s = SPACE_BEFORE_PUNCT.replace_all(&s, "$1").into_owned();
        let mut s = strip_wrapping_quotes(s);

        if !TERMINAL_ENDING.is_match(&s) {
            s.push('.');
        }
        REPEATED_TERMINAL.replace(&s, "$1$2").into_owned()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(crate::types::DEFAULT_MAX_WORDS)
    }
}

/// Restore `\"` and `\'` escape sequences to the bare quote
fn unescape_quotes(s: &str) -> String {
    s.replace("\\\"", "\"").replace("\\'", "'")
}

/// Remove stray `'s` / `` `s `` tokens that do not follow a word character.
/// Repeats until none remain, since a removal can expose another fragment.
fn strip_possessive_fragments(s: &str) -> String {
    let mut current = s.to_string();
    loop {
        let mut out = String::with_capacity(current.len());
        let mut last = 0;
        for m in POSSESSIVE_FRAGMENT.find_iter(&current) {
            let after_word = current[..m.start()]
                .chars()
                .next_back()
                .is_some_and(is_word_char);
            if after_word {
                continue;
            }
            out.push_str(&current[last..m.start()]);
            last = m.end();
        }
        if last == 0 {
            return current;
        }
        out.push_str(&current[last..]);
        current = out;
    }
}

fn is_word_char(c: char) -> bool {
    let mut buf = [0u8; 4];
    WORD_CHAR.is_match(c.encode_utf8(&mut buf))
}

fn collapse_whitespace(s: &str) -> String {
    WHITESPACE_RUN.replace_all(s, " ").trim().to_string()
}

fn strip_wrapping_quotes(s: String) -> String {
    if !WRAPPED_IN_QUOTES.is_match(&s) {
        return s;
    }
    s.trim_matches(|c: char| QUOTE_CHARS.contains(&c) || c.is_whitespace())
        .to_string()
}

/// True when `s` ends in a single terminal mark, optionally followed by one
/// closing quote or paren.
pub fn has_single_terminal(s: &str) -> bool {
    let mut tail = s.chars().rev();
    let last = tail.next();
    let (mark, before) = match last {
        Some(c) if TERMINAL_MARKS.contains(&c) => (Some(c), tail.next()),
        Some(c) if crate::types::CLOSING_CHARS.contains(&c) => (tail.next(), tail.next()),
        _ => (None, None),
    };
    matches!(mark, Some(c) if TERMINAL_MARKS.contains(&c))
        && !matches!(before, Some(c) if TERMINAL_MARKS.contains(&c))
}
