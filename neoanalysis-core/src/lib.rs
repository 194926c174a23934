// NeoAnalysis Core Library
//
// Style guard for generated listening-personality summaries.
// Normalizes free-form model output into one well-formed sentence and
// reports which style rules a text violates.

pub mod types;
pub mod config;
pub mod rules;
pub mod processor;
pub mod prompt;
pub mod persona;

// Re-export main types and functions for easy use
pub use types::*;
pub use config::{ConfigError, StyleConfig};
pub use processor::{clean_summary, enforce_style, violations, StyleGuard};
pub use prompt::PromptBuilder;
pub use persona::{PersonaError, PersonaPipeline, StaticProvider, TextProvider};
pub use rules::{word_count, words};
