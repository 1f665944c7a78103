use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::warn;

use vigil::analysis;
use vigil::config::Config;
use vigil::language::Language;
use vigil::models::ModelSet;

/// Vigil: text risk scoring for incident reports.
///
/// Scores a text sample 0-100 for risk, estimates escalation probability,
/// and recommends one of four response actions.
#[derive(Parser)]
#[command(name = "vigil", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a single text sample
    Analyze {
        /// The text to analyze
        text: String,

        /// Language code for threat keyword lookup (e.g. en, hi, ta).
        /// Unknown codes fall back to English.
        #[arg(long)]
        language: Option<String>,

        /// Emit the raw JSON report instead of the terminal view
        #[arg(long)]
        json: bool,
    },

    /// Analyze a file with one sample per line
    Batch {
        /// Path to the input file
        file: PathBuf,

        /// Language code applied to every line
        #[arg(long)]
        language: Option<String>,

        /// Emit a JSON array of reports instead of the terminal table
        #[arg(long)]
        json: bool,
    },

    /// Show configuration and model availability
    Status,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("vigil=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            text,
            language,
            json,
        } => {
            let config = Config::load()?;
            let language = resolve_language(language.as_deref(), &config);
            let models = ModelSet::load(&config.model_dir);

            let result = analysis::analyze(&text, language, &models)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                vigil::output::terminal::display_analysis(&result);
            }
        }

        Commands::Batch {
            file,
            language,
            json,
        } => {
            let config = Config::load()?;
            let language = resolve_language(language.as_deref(), &config);
            let models = ModelSet::load(&config.model_dir);

            let content = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;

            let mut results = Vec::new();
            for (line_no, line) in content.lines().enumerate() {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                match analysis::analyze(line, language, &models) {
                    Ok(result) => results.push((line.to_string(), result)),
                    Err(e) => {
                        warn!(line = line_no + 1, error = %e, "Skipping sample");
                    }
                }
            }

            if json {
                let reports: Vec<_> = results.iter().map(|(_, r)| r).collect();
                println!("{}", serde_json::to_string_pretty(&reports)?);
            } else {
                vigil::output::terminal::display_batch(&results);
                println!(
                    "\n  Analyzed {} samples at {}",
                    results.len(),
                    chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
                );
            }
        }

        Commands::Status => {
            let config = Config::load()?;
            let models = ModelSet::load(&config.model_dir);
            let status = models.status();

            println!("\n{}", "=== Vigil Status ===".bold());
            println!("  Model directory: {}", config.model_dir.display());
            println!("  Default language: {}", config.default_language);
            println!(
                "  Checked at: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
            );
            println!("\n  Model slots:");
            print_slot("threat classifier", status.threat);
            print_slot("bullying classifier", status.bullying);
            print_slot("anomaly detector", status.anomaly);
            print_slot("escalation model", status.escalation);

            if !(status.threat && status.bullying && status.anomaly && status.escalation) {
                println!(
                    "\n  {}",
                    "Slots without a model run with neutral fallbacks (degraded mode).".dimmed()
                );
                println!(
                    "  {}",
                    format!(
                        "Export ONNX models into {} to enable them.",
                        config.model_dir.display()
                    )
                    .dimmed()
                );
            }
        }
    }

    Ok(())
}

/// Pick the language for this invocation: the CLI flag wins, then the
/// configured default.
fn resolve_language(flag: Option<&str>, config: &Config) -> Language {
    match flag {
        Some(code) => Language::from_code(code),
        None => config.default_language,
    }
}

fn print_slot(name: &str, loaded: bool) {
    let state = if loaded {
        "model loaded".green().to_string()
    } else {
        "neutral fallback".yellow().to_string()
    };
    println!("    {name:<22} {state}");
}
