// Main rules module - delegates to semantic sub-modules
// This file coordinates the style rules but actual implementations are in:
// - tokenizer.rs: word splitting shared by counting and truncation
// - normalizer.rs: rewrites raw model output into one clean sentence
// - validation.rs: the individual read-only style checks
// - engine.rs: RuleEngine that runs the configured checks in order

pub mod engine;
pub mod normalizer;
pub mod tokenizer;
pub mod validation;

pub use engine::{RuleEngine, StyleRule};
pub use normalizer::{has_single_terminal, Normalizer};
pub use tokenizer::{truncate_words, word_count, words};
