use anyhow::{Context, Result};
use neoanalysis_core::{StyleConfig, TraitMap};
use serde::Serialize;
use std::io::Read;
use std::path::Path;

/// Candidate text from `--text`, else `--input <path>`, else stdin
pub fn read_candidate(text: Option<&str>, input: Option<&str>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text.to_string());
    }
    if let Some(path) = input {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read candidate text from {path}"));
    }
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read candidate text from stdin")?;
    Ok(buffer)
}

/// Style config for `--config`, with the status line describing where it came from
pub fn load_config(path: Option<&str>) -> (StyleConfig, String) {
    match path {
        Some(p) => match StyleConfig::load_from_file(p) {
            Ok(config) => (config, format!("📋 Loaded config from: {p}")),
            Err(e) => (
                StyleConfig::default(),
                format!("⚠️  Failed to load config from {p}: {e:#}, using default config"),
            ),
        },
        None => (StyleConfig::default(), "📋 Using default config".to_string()),
    }
}

/// Trait map exported by the aggregator (a flat JSON object)
pub fn load_traits(path: &str) -> Result<TraitMap> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read traits from {path}"))?;
    let traits: TraitMap = serde_json::from_str(&content)
        .with_context(|| format!("Traits file {path} is not a JSON object"))?;
    Ok(traits)
}

/// Pretty JSON to `output`, or stdout when no path is given
pub fn write_json<T: Serialize>(value: &T, output: Option<&str>) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    match output {
        Some(path) => {
            if let Some(parent) = Path::new(path).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write output to {path}"))?;
            eprintln!("💾 Results saved to: {path}");
        }
        None => println!("{json}"),
    }
    Ok(())
}
