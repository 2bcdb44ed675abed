//! llms-index CLI - regenerate llms.txt and llms-full.txt
//!
//! Run with no arguments from a repository root to rewrite both index
//! documents. `llms-index check` verifies they are current without
//! touching them, which is handy in CI.

use clap::{Parser, Subcommand};
use colored::Colorize;
use llms_index_core::IndexConfig;
use llms_index_render::Connection;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "llms-index")]
#[command(author = "llms-index Contributors")]
#[command(version)]
#[command(about = "Generate llms.txt and llms-full.txt documentation indexes", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Directory to scan (defaults to current directory)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Configuration file (defaults to llms-index.json in the scan root)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Repository identifier (owner/name) used in the endpoint URL
    #[arg(long, global = true, env = "GITHUB_REPOSITORY")]
    repository: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Commands {
    /// Write llms.txt and llms-full.txt (default)
    Generate,

    /// Fail if either index is out of date, ignoring the date line
    Check,
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only the confirmation line.
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> commands::Result<()> {
    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };

    let config = match &cli.config {
        Some(path) => IndexConfig::load(path)?,
        None => IndexConfig::discover(&root)?,
    };
    let connection = Connection::today(&config, cli.repository.as_deref());

    match cli.command.unwrap_or(Commands::Generate) {
        Commands::Generate => commands::generate(&root, &config, &connection),
        Commands::Check => commands::check(&root, &config, &connection),
    }
}
