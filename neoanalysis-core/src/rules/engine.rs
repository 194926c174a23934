use crate::config::StyleConfig;
use crate::types::Violation;

use super::validation::{
    HashtagsEmojisEllipsisRule, ListLikeRule, MultipleSentencesRule, TooManyWordsRule,
    TrailingPunctRule,
};

/// A single read-only style check
pub trait StyleRule: Send + Sync {
    /// True when `text` violates this rule
    fn check(&self, text: &str) -> bool;

    /// Tag reported when the check fires
    fn violation(&self) -> Violation;

    fn name(&self) -> &str;
}

/// Runs the configured style rules in order and collects every violation.
///
/// Checks never short-circuit: all enabled rules see the same input and each
/// tag is reported at most once, in rule order.
pub struct RuleEngine {
    rules: Vec<Box<dyn StyleRule>>,
}

impl RuleEngine {
    pub fn new(config: &StyleConfig) -> Self {
        let mut rules: Vec<Box<dyn StyleRule>> = Vec::new();

        for rule_config in &config.validation.rules {
            if !rule_config.enabled {
                tracing::debug!("⏭️  Skipping disabled rule: {}", rule_config.name);
                continue;
            }
            match Self::rule_by_name(&rule_config.name, config) {
                Some(rule) => rules.push(rule),
                None => tracing::warn!("⚠️  Unknown rule: {}. Skipping...", rule_config.name),
            }
        }

        Self { rules }
    }

    fn rule_by_name(name: &str, config: &StyleConfig) -> Option<Box<dyn StyleRule>> {
        let rule: Box<dyn StyleRule> = match name {
            "MultipleSentences" => Box::new(MultipleSentencesRule),
            "TooManyWords" => Box::new(TooManyWordsRule::new(config.max_words)),
            "ListLike" => Box::new(ListLikeRule),
            "HashtagsEmojisEllipsis" => Box::new(HashtagsEmojisEllipsisRule),
            "TrailingPunct" => Box::new(TrailingPunctRule),
            _ => return None,
        };
        Some(rule)
    }

    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    pub fn validate(&self, text: &str) -> Vec<Violation> {
        let text = text.trim();
        let mut violations = Vec::new();

        for rule in &self.rules {
            let violation = rule.violation();
            if rule.check(text) && !violations.contains(&violation) {
                violations.push(violation);
            }
        }

        violations
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new(&StyleConfig::default())
    }
}
