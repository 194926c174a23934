use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

// ===== STYLE CONTRACT =====
// Character sets shared by the normalizer and the validator.
// These sets are the contract; the regex patterns are built from them.

/// Sentence-ending marks
pub const TERMINAL_MARKS: [char; 3] = ['.', '!', '?'];

/// Characters allowed after the final terminal mark (one at most)
pub const CLOSING_CHARS: [char; 5] = ['\'', '"', '\u{201D}', '\u{2019}', ')'];

/// Characters treated as wrapping quotes around the whole summary
pub const QUOTE_CHARS: [char; 6] = ['\'', '"', '\u{201C}', '\u{201D}', '\u{2018}', '\u{2019}'];

/// Default word budget for a cleaned summary
pub const DEFAULT_MAX_WORDS: usize = 18;

/// A named style rule that a summary fails to meet.
///
/// Serialized as the snake_case tag clients see in the response payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Violation {
    MultipleSentences,
    TooManyWords,
    ListLike,
    HashtagsEmojisEllipsis,
    TrailingPunct,
}

impl Violation {
    pub const ALL: [Violation; 5] = [
        Violation::MultipleSentences,
        Violation::TooManyWords,
        Violation::ListLike,
        Violation::HashtagsEmojisEllipsis,
        Violation::TrailingPunct,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Violation::MultipleSentences => "multiple_sentences",
            Violation::TooManyWords => "too_many_words",
            Violation::ListLike => "list_like",
            Violation::HashtagsEmojisEllipsis => "hashtags_emojis_ellipsis",
            Violation::TrailingPunct => "trailing_punct",
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of the combined pipeline: the cleaned sentence and whatever
/// style rules it still violates (in check order).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleReport {
    pub cleaned: String,
    pub violations: Vec<Violation>,
}

impl StyleReport {
    pub fn is_compliant(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn has(&self, violation: Violation) -> bool {
        self.violations.contains(&violation)
    }
}

// ===== PERSONA BOUNDARY TYPES =====

/// Listening traits produced by the aggregator, keyed by trait name.
/// Values are opaque to the style guard; they only fill the prompt template.
pub type TraitMap = BTreeMap<String, serde_json::Value>;

/// Response payload handed back to the web layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonaResponse {
    pub id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub traits: TraitMap,
    pub summary: String,
    pub violations: Vec<Violation>,
}

impl PersonaResponse {
    pub fn new(traits: TraitMap, report: StyleReport) -> Self {
        Self {
            id: Uuid::new_v4(),
            generated_at: Utc::now(),
            traits,
            summary: report.cleaned,
            violations: report.violations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violation_tags_match_serde_names() {
        for violation in Violation::ALL {
            let json = serde_json::to_string(&violation).unwrap();
            assert_eq!(json, format!("\"{}\"", violation.as_str()));
        }
    }

    #[test]
    fn test_violation_deserializes_from_tag() {
        let parsed: Violation = serde_json::from_str("\"hashtags_emojis_ellipsis\"").unwrap();
        assert_eq!(parsed, Violation::HashtagsEmojisEllipsis);
    }

    #[test]
    fn test_persona_response_moves_report_fields() {
        let mut traits = TraitMap::new();
        traits.insert("avg_popularity".to_string(), serde_json::json!(61.5));
        let report = StyleReport {
            cleaned: "A restless crate digger.".to_string(),
            violations: vec![Violation::ListLike],
        };

        let response = PersonaResponse::new(traits, report);
        assert_eq!(response.summary, "A restless crate digger.");
        assert_eq!(response.violations, vec![Violation::ListLike]);
        assert_eq!(response.traits.len(), 1);
    }
}
