// All style logic is in neoanalysis-core
// This CLI acts as a thin wrapper around the core library

// CLI-specific modules
pub mod input;

// Re-export core types for convenience
pub use neoanalysis_core::*;

// Re-export CLI utilities
pub use input::{load_config, load_traits, read_candidate, write_json};
