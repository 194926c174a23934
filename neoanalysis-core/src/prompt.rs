use crate::config::PromptConfig;
use crate::types::TraitMap;

/// Fills the prompt template with the listener's traits
pub struct PromptBuilder<'a> {
    config: &'a PromptConfig,
    max_words: usize,
}

impl<'a> PromptBuilder<'a> {
    pub fn new(config: &'a PromptConfig, max_words: usize) -> Self {
        Self { config, max_words }
    }

    pub fn render(&self, traits: &TraitMap) -> String {
        self.config
            .template
            .replace("{max_words}", &self.max_words.to_string())
            .replace("{traits}", &format_traits(traits))
    }
}

/// One `- name: value` line per trait, in key order.
/// Strings are written bare; everything else as compact JSON.
pub fn format_traits(traits: &TraitMap) -> String {
    traits
        .iter()
        .map(|(name, value)| match value {
            serde_json::Value::String(s) => format!("- {name}: {s}"),
            other => format!("- {name}: {other}"),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_traits() -> TraitMap {
        let mut traits = TraitMap::new();
        traits.insert("avg_popularity".to_string(), json!(42.5));
        traits.insert("era_span".to_string(), json!([1977, 2023]));
        traits.insert("top_genre".to_string(), json!("shoegaze"));
        traits
    }

    #[test]
    fn test_format_traits_sorted_lines() {
        assert_eq!(
            format_traits(&sample_traits()),
            "- avg_popularity: 42.5\n- era_span: [1977,2023]\n- top_genre: shoegaze"
        );
    }

    #[test]
    fn test_render_fills_both_placeholders() {
        let config = PromptConfig {
            template: "Max {max_words} words.\n{traits}".to_string(),
        };
        let prompt = PromptBuilder::new(&config, 18).render(&sample_traits());
        assert!(prompt.starts_with("Max 18 words.\n- avg_popularity: 42.5"));
        assert!(!prompt.contains("{traits}"));
    }

    #[test]
    fn test_default_template_renders() {
        let config = PromptConfig::default();
        let prompt = PromptBuilder::new(&config, 18).render(&sample_traits());
        assert!(prompt.contains("at most 18 words"));
        assert!(prompt.contains("- top_genre: shoegaze"));
    }

    #[test]
    fn test_empty_traits() {
        assert_eq!(format_traits(&TraitMap::new()), "");
    }
}
