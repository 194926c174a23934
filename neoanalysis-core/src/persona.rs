// Persona orchestration: traits -> prompt -> model -> style guard -> response
//
// The model call sits behind the TextProvider trait so the web layer can plug
// in a real client while tests and the CLI use a fixed response.

use crate::config::StyleConfig;
use crate::processor::StyleGuard;
use crate::prompt::PromptBuilder;
use crate::types::*;
use anyhow::Result;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersonaError {
    #[error("text provider '{0}' returned an empty summary")]
    EmptyGeneration(String),
}

/// Generative text source.
/// Returns one free-form candidate sentence, or an empty string on failure.
pub trait TextProvider {
    fn generate(&self, prompt: &str) -> Result<String>;

    /// Provider name for logging
    fn name(&self) -> &str;
}

/// Provider that always answers with the same text
pub struct StaticProvider {
    text: String,
}

impl StaticProvider {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl TextProvider for StaticProvider {
    fn generate(&self, _prompt: &str) -> Result<String> {
        Ok(self.text.clone())
    }

    fn name(&self) -> &str {
        "static"
    }
}

pub struct PersonaPipeline {
    config: StyleConfig,
    guard: StyleGuard,
    provider: Box<dyn TextProvider>,
}

impl PersonaPipeline {
    pub fn new(config: StyleConfig, provider: Box<dyn TextProvider>) -> Self {
        let guard = StyleGuard::new(&config);
        Self {
            config,
            guard,
            provider,
        }
    }

    pub fn render_prompt(&self, traits: &TraitMap) -> String {
        PromptBuilder::new(&self.config.prompt, self.config.max_words).render(traits)
    }

    pub fn run(&self, traits: TraitMap) -> Result<PersonaResponse> {
        let prompt = self.render_prompt(&traits);
        tracing::debug!("📝 Prompt for {}: {} chars", self.provider.name(), prompt.len());

        let candidate = self.provider.generate(&prompt)?;
        if candidate.trim().is_empty() {
            return Err(PersonaError::EmptyGeneration(self.provider.name().to_string()).into());
        }

        let report = self.guard.enforce_style(&candidate);
        if !report.is_compliant() {
            tracing::info!("🔍 Summary kept with violations: {:?}", report.violations);
        }
        Ok(PersonaResponse::new(traits, report))
    }
}
