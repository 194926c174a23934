use crate::types::DEFAULT_MAX_WORDS;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// Default value functions for serde
fn default_true() -> bool {
    true
}

fn default_max_words() -> usize {
    DEFAULT_MAX_WORDS
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("max_words must be at least 1 (got {0})")]
    InvalidMaxWords(usize),
    #[error("prompt template is missing the {{traits}} placeholder")]
    MissingTraitsPlaceholder,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleConfig {
    /// Word budget for a cleaned summary (words as counted by the tokenizer)
    #[serde(default = "default_max_words")]
    pub max_words: usize,
    /// Validation checks to run, in report order
    #[serde(default)]
    pub validation: ValidationConfig,
    /// Prompt used to ask the model for a summary
    #[serde(default)]
    pub prompt: PromptConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// List of rules to run in order
    pub rules: Vec<RuleConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Name of the rule
    pub name: String,
    /// Whether this rule is enabled
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl RuleConfig {
    fn enabled(name: &str) -> Self {
        Self {
            name: name.to_string(),
            enabled: true,
        }
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            rules: vec![
                RuleConfig::enabled("MultipleSentences"),
                RuleConfig::enabled("TooManyWords"),
                RuleConfig::enabled("ListLike"),
                RuleConfig::enabled("HashtagsEmojisEllipsis"),
                RuleConfig::enabled("TrailingPunct"),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptConfig {
    /// Template with `{traits}` and `{max_words}` placeholders
    pub template: String,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            template: concat!(
                "You are a witty music critic. Using the listening traits below, ",
                "describe this listener's personality in ONE sentence of at most ",
                "{max_words} words. No lists, no hashtags, no emojis, no quotes.\n\n",
                "Traits:\n{traits}\n"
            )
            .to_string(),
        }
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            max_words: DEFAULT_MAX_WORDS,
            validation: ValidationConfig::default(),
            prompt: PromptConfig::default(),
        }
    }
}

impl StyleConfig {
    /// Load config from file path (YAML)
    pub fn load_from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: StyleConfig = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config with fallback to default
    pub fn load_with_fallback(path: Option<&str>) -> Self {
        match path {
            Some(p) => Self::load_from_file(p).unwrap_or_else(|e| {
                tracing::warn!("⚠️  Failed to load config from {}: {e:#}, using defaults", p);
                Self::default()
            }),
            None => Self::default(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_words == 0 {
            return Err(ConfigError::InvalidMaxWords(self.max_words));
        }
        if !self.prompt.template.contains("{traits}") {
            return Err(ConfigError::MissingTraitsPlaceholder);
        }
        Ok(())
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
