use crate::config::StyleConfig;
use crate::rules::{has_single_terminal, Normalizer, RuleEngine};
use crate::types::*;
use std::sync::LazyLock;

static DEFAULT_GUARD: LazyLock<StyleGuard> = LazyLock::new(StyleGuard::default);

/// Normalizer + validator pair built from one `StyleConfig`.
///
/// Stateless after construction, so a single guard can be shared across
/// threads and reused for every request.
pub struct StyleGuard {
    normalizer: Normalizer,
    rule_engine: RuleEngine,
}

impl StyleGuard {
    pub fn new(config: &StyleConfig) -> Self {
        Self {
            normalizer: Normalizer::new(config.max_words),
            rule_engine: RuleEngine::new(config),
        }
    }

    pub fn max_words(&self) -> usize {
        self.normalizer.max_words()
    }

    pub fn clean(&self, raw: &str) -> String {
        self.normalizer.normalize(raw)
    }

    pub fn violations(&self, text: &str) -> Vec<Violation> {
        self.rule_engine.validate(text)
    }

    /// Clean `raw`, then validate the cleaned sentence
    pub fn enforce_style(&self, raw: &str) -> StyleReport {
        let cleaned = self.clean(raw);
        let violations = self.violations(&cleaned);

        // Cleaning guarantees these two; seeing them means a normalizer defect.
        if violations.contains(&Violation::TooManyWords)
            || violations.contains(&Violation::TrailingPunct)
            || !has_single_terminal(&cleaned)
        {
            tracing::warn!(
                "⚠️  Cleaned summary still breaks a normalizer guarantee: {:?} {:?}",
                cleaned,
                violations
            );
        }

        tracing::debug!("🧹 Cleaned summary {:?}, violations: {:?}", cleaned, violations);
        StyleReport {
            cleaned,
            violations,
        }
    }
}

impl Default for StyleGuard {
    fn default() -> Self {
        Self::new(&StyleConfig::default())
    }
}

/// Clean raw model output with the default style contract
pub fn clean_summary(raw: &str) -> String {
    DEFAULT_GUARD.clean(raw)
}

/// Style violations of `text` under the default style contract
pub fn violations(text: &str) -> Vec<Violation> {
    DEFAULT_GUARD.violations(text)
}

/// Clean raw model output and report what the cleaned text still violates
pub fn enforce_style(raw: &str) -> StyleReport {
    DEFAULT_GUARD.enforce_style(raw)
}
