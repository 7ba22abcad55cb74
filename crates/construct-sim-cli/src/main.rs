//! Construct similarity CLI.
//!
//! # Commands
//!
//! - `compare`: run the full pipeline over an items CSV and a reference
//!   correlation CSV and print the correlation report

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod input;

/// Compare model-derived construct similarity against a reference table.
#[derive(Parser)]
#[command(name = "construct-sim")]
#[command(version = "0.1.0")]
#[command(about = "Construct similarity comparison pipeline")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Embed items, build both matrices, and score their agreement
    Compare(commands::compare::CompareArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Compare(args) => commands::compare::handle(args).await,
    }
}
