mod commands;
mod summary;

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "focus-measure", about = "Image focus (blur) measurement job")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score one image and write the JSON result document
    Run(commands::run::RunArgs),
    /// Score image files and print a table
    Score(commands::score::ScoreArgs),
    /// Print or save default job settings as TOML
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose, rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .init();

    match &cli.command {
        Commands::Run(args) => Ok(commands::run::run(args)),
        Commands::Score(args) => commands::score::run(args),
        Commands::Config(args) => commands::config::run(args).map(|()| ExitCode::SUCCESS),
    }
}

/// `--verbose` forces debug; otherwise `RUST_LOG` when it parses, else info.
fn log_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}
