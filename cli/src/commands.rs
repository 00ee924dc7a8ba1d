//! CLI command implementations

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use burnout_sim_core::{
    CompletionModel, Execution, ModelOptions, Orchestrator, OrchestratorConfig, RiskModel,
    RngManager, SimulationParameters, DEFAULT_ARRIVAL_RATE,
};
use clap::{Args, Subcommand, ValueEnum};
use tracing::info;

use crate::output::{write_report, OutputFormat};

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Run a simulation and print the per-day series and summary
    Run(RunArgs),
}

/// Parameters for `burnout run`
///
/// Any parameter may come from `--config`; flags given on the command line
/// take precedence over the file.
#[derive(Args)]
pub struct RunArgs {
    /// JSON file with simulation parameters
    #[arg(long)]
    config: Option<PathBuf>,

    /// Initial backlog
    #[arg(long)]
    n_tasks: Option<u64>,

    /// Base completion probability per task per day
    #[arg(long)]
    p: Option<f64>,

    /// Backlog level above which a day counts as a breach
    #[arg(long)]
    threshold: Option<u64>,

    /// Days simulated per run
    #[arg(long)]
    days: Option<usize>,

    /// Number of independent runs
    #[arg(long)]
    reps: Option<usize>,

    /// Mean new tasks per day
    #[arg(long)]
    arrival_rate: Option<f64>,

    /// Master seed; picked from the clock and logged when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Run repetitions on the calling thread only
    #[arg(long, conflicts_with = "threads")]
    sequential: bool,

    /// Worker threads for parallel execution (default: all cores)
    #[arg(long)]
    threads: Option<usize>,

    /// Risk function applied to each day's backlog
    #[arg(long, value_enum, default_value_t = RiskArg::Logistic)]
    risk_model: RiskArg,

    /// How completed tasks are drawn each day
    #[arg(long, value_enum, default_value_t = CompletionArg::Binomial)]
    completion_model: CompletionArg,

    /// Output format written to stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

#[derive(Clone, Copy, ValueEnum)]
enum RiskArg {
    Logistic,
    Binary,
}

#[derive(Clone, Copy, ValueEnum)]
enum CompletionArg {
    Binomial,
    PerTask,
}

impl From<RiskArg> for RiskModel {
    fn from(arg: RiskArg) -> Self {
        match arg {
            RiskArg::Logistic => RiskModel::Logistic,
            RiskArg::Binary => RiskModel::Binary,
        }
    }
}

impl From<CompletionArg> for CompletionModel {
    fn from(arg: CompletionArg) -> Self {
        match arg {
            CompletionArg::Binomial => CompletionModel::Binomial,
            CompletionArg::PerTask => CompletionModel::PerTask,
        }
    }
}

/// Handle the CLI command
pub fn handle_command(command: Commands) -> Result<()> {
    match command {
        Commands::Run(args) => run_simulation(args),
    }
}

fn run_simulation(args: RunArgs) -> Result<()> {
    let params = resolve_params(&args)?;
    let rng_seed = match args.seed {
        Some(seed) => seed,
        None => {
            let seed = RngManager::seed_from_clock();
            info!(seed, "No seed given, using clock-derived seed");
            seed
        }
    };

    let execution = if args.sequential {
        Execution::Sequential
    } else {
        Execution::Parallel {
            threads: args.threads,
        }
    };

    let config = OrchestratorConfig {
        params,
        rng_seed,
        execution,
        options: ModelOptions {
            risk_model: args.risk_model.into(),
            completion_model: args.completion_model.into(),
        },
    };

    let report = Orchestrator::new(config)?.run()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &report, args.format)?;
    out.flush()?;
    Ok(())
}

/// Merge the optional config file with command-line overrides.
fn resolve_params(args: &RunArgs) -> Result<SimulationParameters> {
    let base: Option<SimulationParameters> = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            let parsed = serde_json::from_str(&raw)
                .with_context(|| format!("Failed to parse config file {}", path.display()))?;
            Some(parsed)
        }
        None => None,
    };

    Ok(SimulationParameters {
        n_tasks: required(args.n_tasks, base.as_ref().map(|b| b.n_tasks), "n-tasks")?,
        p: required(args.p, base.as_ref().map(|b| b.p), "p")?,
        threshold: required(args.threshold, base.as_ref().map(|b| b.threshold), "threshold")?,
        days: required(args.days, base.as_ref().map(|b| b.days), "days")?,
        reps: required(args.reps, base.as_ref().map(|b| b.reps), "reps")?,
        arrival_rate: args
            .arrival_rate
            .or(base.as_ref().map(|b| b.arrival_rate))
            .unwrap_or(DEFAULT_ARRIVAL_RATE),
    })
}

fn required<T>(flag: Option<T>, from_file: Option<T>, name: &str) -> Result<T> {
    flag.or(from_file).ok_or_else(|| anyhow!("Missing required parameter --{}", name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: RunArgs,
    }

    fn parse(argv: &[&str]) -> RunArgs {
        TestCli::try_parse_from(std::iter::once("burnout").chain(argv.iter().copied()))
            .unwrap()
            .args
    }

    #[test]
    fn test_flags_build_parameters() {
        let args = parse(&[
            "--n-tasks", "100", "--p", "0.5", "--threshold", "20", "--days", "30", "--reps", "10",
        ]);
        let params = resolve_params(&args).unwrap();
        assert_eq!(params, SimulationParameters::new(100, 0.5, 20, 30, 10));
    }

    #[test]
    fn test_missing_parameter_is_reported() {
        let args = parse(&["--n-tasks", "100", "--p", "0.5", "--days", "30", "--reps", "10"]);
        let err = resolve_params(&args).unwrap_err();
        assert!(err.to_string().contains("--threshold"));
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.json");
        fs::write(
            &path,
            r#"{"n_tasks": 40, "p": 0.2, "threshold": 5, "days": 12, "reps": 3, "arrival_rate": 2.5}"#,
        )
        .unwrap();

        let config = path.to_string_lossy().into_owned();
        let args = parse(&["--config", &config, "--reps", "7"]);
        let params = resolve_params(&args).unwrap();

        assert_eq!(params.reps, 7);
        assert_eq!(params.n_tasks, 40);
        assert_eq!(params.arrival_rate, 2.5);
    }

    #[test]
    fn test_sequential_conflicts_with_threads() {
        let result = TestCli::try_parse_from([
            "burnout", "--sequential", "--threads", "2",
        ]);
        assert!(result.is_err());
    }
}
