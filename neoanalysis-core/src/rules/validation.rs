use super::engine::StyleRule;
use super::tokenizer::word_count;
use crate::types::{Violation, TERMINAL_MARKS};
use regex::Regex;
use std::sync::LazyLock;

static AND_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\band\b").unwrap());

static HASHTAG_EMOJI_ELLIPSIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#\w|\x{2026}|[\x{1F300}-\x{1FAFF}]").unwrap());

static TRAILING_TERMINAL_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]{2,}\s*$").unwrap());

// MultipleSentencesRule - two or more terminal marks anywhere in the text
pub struct MultipleSentencesRule;

impl StyleRule for MultipleSentencesRule {
    fn check(&self, text: &str) -> bool {
        text.chars().filter(|c| TERMINAL_MARKS.contains(c)).count() >= 2
    }

    fn violation(&self) -> Violation {
        Violation::MultipleSentences
    }

    fn name(&self) -> &str {
        "MultipleSentences"
    }
}

// TooManyWordsRule - word count above the configured budget
pub struct TooManyWordsRule {
    max_words: usize,
}

impl TooManyWordsRule {
    pub fn new(max_words: usize) -> Self {
        Self { max_words }
    }
}

impl StyleRule for TooManyWordsRule {
    fn check(&self, text: &str) -> bool {
        word_count(text) > self.max_words
    }

    fn violation(&self) -> Violation {
        Violation::TooManyWords
    }

    fn name(&self) -> &str {
        "TooManyWords"
    }
}

/// ListLikeRule - reads like an enumeration instead of one flowing sentence.
///
/// Two independent signals: at least two commas (three or more items), or the
/// word "and" appearing twice. The "and" signal is deliberately coarse and
/// also fires on a single clause that happens to use "and" twice.
pub struct ListLikeRule;

impl ListLikeRule {
    fn has_comma_series(text: &str) -> bool {
        text.matches(',').count() >= 2
    }

    fn has_repeated_and(text: &str) -> bool {
        AND_WORD.find_iter(&text.to_lowercase()).count() >= 2
    }
}

impl StyleRule for ListLikeRule {
    fn check(&self, text: &str) -> bool {
        Self::has_comma_series(text) || Self::has_repeated_and(text)
    }

    fn violation(&self) -> Violation {
        Violation::ListLike
    }

    fn name(&self) -> &str {
        "ListLike"
    }
}

// HashtagsEmojisEllipsisRule - social-media texture: #tags, … and pictographs
pub struct HashtagsEmojisEllipsisRule;

impl StyleRule for HashtagsEmojisEllipsisRule {
    fn check(&self, text: &str) -> bool {
        HASHTAG_EMOJI_ELLIPSIS.is_match(text)
    }

    fn violation(&self) -> Violation {
        Violation::HashtagsEmojisEllipsis
    }

    fn name(&self) -> &str {
        "HashtagsEmojisEllipsis"
    }
}

// TrailingPunctRule - ends in a run of terminal marks like "!!" or "?!"
pub struct TrailingPunctRule;

impl StyleRule for TrailingPunctRule {
    fn check(&self, text: &str) -> bool {
        TRAILING_TERMINAL_RUN.is_match(text)
    }

    fn violation(&self) -> Violation {
        Violation::TrailingPunct
    }

    fn name(&self) -> &str {
        "TrailingPunct"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiple_sentences() {
        let rule = MultipleSentencesRule;
        assert!(rule.check("One. Two."));
        assert!(rule.check("Really?!"));
        assert!(rule.check("v1.2 forever."));
        assert!(!rule.check("Just one sentence."));
        assert!(!rule.check("No marks at all"));
    }

    #[test]
    fn test_too_many_words_uses_budget() {
        let rule = TooManyWordsRule::new(3);
        assert!(!rule.check("one two three"));
        assert!(rule.check("one two three four"));
        assert!(!TooManyWordsRule::new(18).check("one two three four"));
    }

    #[test]
    fn test_list_like_commas() {
        let rule = ListLikeRule;
        assert!(rule.check("Bold, brash, bright"));
        assert!(!rule.check("Bold, bright"));
    }

    #[test]
    fn test_list_like_repeated_and() {
        let rule = ListLikeRule;
        assert!(rule.check("Rock AND roll and soul"));
        assert!(rule.check("and\nand"));
        assert!(!rule.check("Rock and roll"));
        assert!(!rule.check("Sandy android bandstand and"));
    }

    #[test]
    fn test_hashtags_emojis_ellipsis() {
        let rule = HashtagsEmojisEllipsisRule;
        assert!(rule.check("Great vibes #mood"));
        assert!(rule.check("Wait for it…"));
        assert!(rule.check("Headphones on 🎧"));
        assert!(rule.check("Dancing 🫶"));
        assert!(!rule.check("Track #"));
        assert!(!rule.check("Three dots ... are fine here"));
        assert!(!rule.check("Hearts ♥ are outside the range"));
    }

    #[test]
    fn test_trailing_punct() {
        let rule = TrailingPunctRule;
        assert!(rule.check("Wow!!"));
        assert!(rule.check("Wow?! "));
        assert!(!rule.check("Wow!"));
        assert!(!rule.check("Wow!!\""));
        assert!(!rule.check("Wow!! fine"));
    }
}
