use anyhow::Result;
use clap::Parser;
use serde::Serialize;

// Import from neoanalysis-core
use neoanalysis_core::{PersonaPipeline, StaticProvider, StyleConfig, StyleGuard, Violation};

// Import CLI utilities
use neoanalysis_cli::{load_config, load_traits, read_candidate, write_json};

#[derive(Parser)]
#[command(name = "neoanalysis")]
#[command(about = "Clean and audit generated listening-personality summaries")]
struct Args {
    /// Candidate text to process (takes precedence over --input and stdin)
    #[arg(short, long)]
    text: Option<String>,

    /// Path to a file holding the candidate text (stdin when omitted)
    #[arg(short, long)]
    input: Option<String>,

    /// Path to custom style config file (YAML format)
    #[arg(short, long)]
    config: Option<String>,

    /// Only report style violations of the raw text, without cleaning it
    #[arg(long)]
    audit: bool,

    /// Path to a JSON trait map; emits a full persona response
    #[arg(long)]
    traits: Option<String>,

    /// Print the prompt rendered from --traits before the response
    #[arg(long)]
    show_prompt: bool,

    /// Output file path (stdout if not specified)
    #[arg(short, long)]
    output: Option<String>,

    /// Print the default configuration as YAML and exit
    #[arg(long)]
    show_configs: bool,
}

#[derive(Serialize)]
struct AuditOutput<'a> {
    text: &'a str,
    violations: Vec<Violation>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "neoanalysis=info,neoanalysis_core=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if args.show_configs {
        print!("{}", StyleConfig::default().to_yaml()?);
        return Ok(());
    }

    eprintln!("🎧 NeoAnalysis Style Guard");

    let (config, status) = load_config(args.config.as_deref());
    eprintln!("{status}");

    if let Err(e) = run(&args, config) {
        eprintln!("❌ Processing failed: {e:#}");
        std::process::exit(1);
    }

    Ok(())
}

fn run(args: &Args, config: StyleConfig) -> Result<()> {
    let candidate = read_candidate(args.text.as_deref(), args.input.as_deref())?;

    if args.audit {
        let guard = StyleGuard::new(&config);
        let violations = guard.violations(&candidate);
        report_violations(&violations);
        return write_json(
            &AuditOutput {
                text: candidate.trim(),
                violations,
            },
            args.output.as_deref(),
        );
    }

    if let Some(traits_path) = &args.traits {
        let traits = load_traits(traits_path)?;
        eprintln!("📊 Loaded {} traits from: {}", traits.len(), traits_path);

        let pipeline = PersonaPipeline::new(config, Box::new(StaticProvider::new(candidate)));
        if args.show_prompt {
            eprintln!("📝 Prompt:\n{}", pipeline.render_prompt(&traits));
        }
        let response = pipeline.run(traits)?;
        report_violations(&response.violations);
        return write_json(&response, args.output.as_deref());
    }

    let guard = StyleGuard::new(&config);
    let report = guard.enforce_style(&candidate);
    eprintln!("✅ Cleaned summary ({} words)", neoanalysis_core::word_count(&report.cleaned));
    report_violations(&report.violations);
    write_json(&report, args.output.as_deref())
}

fn report_violations(violations: &[Violation]) {
    if violations.is_empty() {
        eprintln!("   ✅ No style violations detected!");
        return;
    }
    eprintln!("   ⚠️  {} style violation(s):", violations.len());
    for violation in violations {
        eprintln!("      - {violation}");
    }
}
