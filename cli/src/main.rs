//! Burnout CLI - Command-line interface
//!
//! Runs the burnout risk simulation and prints the per-day series and
//! summary as a table, CSV, or JSON.

mod commands;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "burnout")]
#[command(about = "Monte Carlo estimate of day-by-day burnout risk from a task backlog")]
struct Cli {
    #[command(subcommand)]
    command: commands::Commands,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays clean for CSV/JSON output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    commands::handle_command(cli.command)
}
