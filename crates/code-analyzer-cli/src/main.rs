//! code-analyzer CLI tool.
//!
//! Usage:
//! ```bash
//! code-analyzer check [OPTIONS] [PATHS]...
//! code-analyzer list-rules
//! code-analyzer languages
//! code-analyzer init
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use code_analyzer_core::Language;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Multi-language static analyzer for source files and snippets
#[derive(Parser)]
#[command(name = "code-analyzer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file for every input (default: nearest code-analyzer.toml)
    #[arg(short, long, global = true, env = "CODE_ANALYZER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze files, directories or stdin (`-`)
    Check {
        /// Paths to analyze (default: current directory)
        #[arg(default_value = ".")]
        paths: Vec<PathBuf>,

        /// Analyze every input as this language instead of inferring it
        /// from the file extension. Required for stdin.
        #[arg(short, long)]
        language: Option<Language>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Exclude patterns (can be specified multiple times)
        #[arg(short, long)]
        exclude: Vec<String>,
    },

    /// List available rules
    ListRules,

    /// List supported languages and their file extensions
    Languages,

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Output format for analysis results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One-line-per-diagnostic compact format.
    Compact,
    /// Source excerpts with labelled spans.
    Pretty,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Check {
            paths,
            language,
            format,
            exclude,
        } => commands::check::run(&paths, language, format, exclude, cli.config.as_deref()),
        Commands::ListRules => {
            commands::list_rules::run();
            Ok(())
        }
        Commands::Languages => commands::languages::run(cli.config.as_deref()),
        Commands::Init { force } => commands::init::run(force),
    }
}
