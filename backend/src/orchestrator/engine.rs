//! Orchestrator Engine
//!
//! Drives a complete Monte Carlo computation:
//!
//! ```text
//! 1. Validate parameters (fail fast, before any run)
//! 2. For each run r in 0..reps:
//!    a. Derive the run's RNG stream from (rng_seed, r)
//!    b. Simulate one trajectory
//!    c. Fold it into the per-day sums and the summary scalars
//! 3. Merge partial accumulators in run order
//! 4. Normalize by reps and package the report
//! ```
//!
//! Runs execute sequentially or on a rayon pool. Both modes hand run `r`
//! the same stream, so they differ at most in floating-point summation order.
//!
//! # Example
//!
//! ```rust
//! use burnout_sim_core::orchestrator::{Execution, Orchestrator, OrchestratorConfig};
//! use burnout_sim_core::{ModelOptions, SimulationParameters};
//!
//! let config = OrchestratorConfig {
//!     params: SimulationParameters::new(100, 0.5, 20, 30, 200),
//!     rng_seed: 12345,
//!     execution: Execution::Sequential,
//!     options: ModelOptions::default(),
//! };
//!
//! let orchestrator = Orchestrator::new(config).unwrap();
//! let report = orchestrator.run().unwrap();
//! assert_eq!(report.rows.len(), 30);
//! ```

use std::time::Instant;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, trace};

use crate::aggregate::{AggregateError, RunAccumulator};
use crate::models::{ConfigurationError, SimulationParameters};
use crate::orchestrator::report::BurnoutReport;
use crate::rng::RngManager;
use crate::simulation::{ModelOptions, RunSimulator};

// ============================================================================
// Configuration Types
// ============================================================================

/// How runs are scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Execution {
    /// All runs on the calling thread, in order
    Sequential,

    /// Runs spread over a rayon pool
    Parallel {
        /// Worker count; `None` uses the global rayon pool
        threads: Option<usize>,
    },
}

impl Default for Execution {
    fn default() -> Self {
        Execution::Parallel { threads: None }
    }
}

/// Complete orchestrator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrchestratorConfig {
    /// Model inputs
    pub params: SimulationParameters,

    /// Master seed; run `r` draws from stream `r` of this seed
    pub rng_seed: u64,

    /// Sequential or parallel scheduling
    #[serde(default)]
    pub execution: Execution,

    /// Risk and completion model choices
    #[serde(default)]
    pub options: ModelOptions,
}

impl OrchestratorConfig {
    /// Canonical model, parallel execution.
    pub fn new(params: SimulationParameters, rng_seed: u64) -> Self {
        Self {
            params,
            rng_seed,
            execution: Execution::default(),
            options: ModelOptions::default(),
        }
    }
}

/// Simulation error types
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimulationError {
    #[error("Invalid config: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Aggregate(#[from] AggregateError),

    #[error("Worker thread count must be > 0")]
    NoWorkerThreads,

    #[error("Failed to build worker pool: {0}")]
    ThreadPool(String),
}

// ============================================================================
// Orchestrator
// ============================================================================

/// Validated computation, ready to run.
///
/// # Determinism
///
/// All randomness comes from xorshift64* streams derived from `rng_seed`.
/// Same config = identical per-run trajectories.
#[derive(Debug, Clone)]
pub struct Orchestrator {
    config: OrchestratorConfig,
}

impl Orchestrator {
    /// Validate configuration and build the orchestrator.
    ///
    /// No simulation work happens until [`run`](Self::run).
    pub fn new(config: OrchestratorConfig) -> Result<Self, SimulationError> {
        config.params.validate()?;
        if let Execution::Parallel { threads: Some(0) } = config.execution {
            return Err(SimulationError::NoWorkerThreads);
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &OrchestratorConfig {
        &self.config
    }

    pub fn params(&self) -> &SimulationParameters {
        &self.config.params
    }

    /// Run every repetition and assemble the report.
    pub fn run(&self) -> Result<BurnoutReport, SimulationError> {
        let params = &self.config.params;
        info!(
            n_tasks = params.n_tasks,
            p = params.p,
            threshold = params.threshold,
            days = params.days,
            reps = params.reps,
            arrival_rate = params.arrival_rate,
            seed = self.config.rng_seed,
            "Starting burnout simulation"
        );
        let started = Instant::now();

        let acc = match self.config.execution {
            Execution::Sequential => {
                debug!("Executing runs sequentially");
                self.run_sequential()?
            }
            Execution::Parallel { threads: None } => {
                debug!(workers = rayon::current_num_threads(), "Executing runs on global pool");
                self.run_parallel()?
            }
            Execution::Parallel {
                threads: Some(threads),
            } => {
                debug!(workers = threads, "Executing runs on dedicated pool");
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| SimulationError::ThreadPool(e.to_string()))?;
                pool.install(|| self.run_parallel())?
            }
        };

        let report = BurnoutReport::from_accumulator(&acc)?;
        info!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            peak_risk_day = report.summary.peak_risk_day,
            high_risk_days = report.summary.high_risk_days,
            "Burnout simulation complete"
        );
        Ok(report)
    }

    fn run_sequential(&self) -> Result<RunAccumulator, SimulationError> {
        let simulator = RunSimulator::new(&self.config.params, self.config.options);
        let mut acc = RunAccumulator::new(self.config.params.days);

        for run in 0..self.config.params.reps {
            let mut rng = RngManager::for_stream(self.config.rng_seed, run as u64);
            let trajectory = simulator.run(&mut rng);
            acc.absorb(&trajectory)?;
            trace!(run, "Run folded");
        }

        Ok(acc)
    }

    /// Each rayon split folds its own contiguous range of runs; splits are
    /// then merged left to right, which keeps the earliest-run peak rule.
    fn run_parallel(&self) -> Result<RunAccumulator, SimulationError> {
        let simulator = RunSimulator::new(&self.config.params, self.config.options);
        let days = self.config.params.days;
        let seed = self.config.rng_seed;

        (0..self.config.params.reps)
            .into_par_iter()
            .try_fold(
                || RunAccumulator::new(days),
                |mut acc, run| {
                    let mut rng = RngManager::for_stream(seed, run as u64);
                    acc.absorb(&simulator.run(&mut rng))?;
                    Ok::<_, SimulationError>(acc)
                },
            )
            .try_reduce(
                || RunAccumulator::new(days),
                |earlier, later| Ok(earlier.merge(later)?),
            )
    }
}

/// Run the canonical model in parallel with the given seed.
///
/// # Example
///
/// ```rust
/// use burnout_sim_core::{simulate_burnout, SimulationParameters};
///
/// let params = SimulationParameters::new(40, 0.4, 10, 10, 50).with_arrival_rate(1.0);
/// let report = simulate_burnout(params, 7).unwrap();
/// assert!(report.summary.peak_risk_day >= 1 && report.summary.peak_risk_day <= 10);
/// ```
pub fn simulate_burnout(
    params: SimulationParameters,
    rng_seed: u64,
) -> Result<BurnoutReport, SimulationError> {
    Orchestrator::new(OrchestratorConfig::new(params, rng_seed))?.run()
}
