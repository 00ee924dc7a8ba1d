//! Burnout Simulator Core - Rust Engine
//!
//! Monte Carlo estimate of the day-by-day risk that a worker's backlog
//! exceeds a burnout threshold, under stochastic arrivals, stochastic
//! completions, and productivity feedback from the backlog.
//!
//! # Architecture
//!
//! - **rng**: Deterministic random variates (uniform, binomial, Poisson)
//! - **models**: Parameters, per-run state, trajectories
//! - **simulation**: Single-run simulator and model strategies
//! - **aggregate**: Per-day sums and summary scalars across runs
//! - **orchestrator**: Validation, run scheduling, report assembly
//!
//! # Critical Invariants
//!
//! 1. `pending >= 0` and `productivity ∈ [0.1, 1.0]` on every day
//! 2. All randomness is deterministic (seeded, one stream per run)
//! 3. Configuration is validated before any run starts
//! 4. FFI boundary is minimal and safe

// Module declarations
pub mod aggregate;
pub mod models;
pub mod orchestrator;
pub mod rng;
pub mod simulation;

// Re-exports for convenience
pub use aggregate::{AggregateError, AggregateSeries, RunAccumulator, SummaryStats};
pub use models::{
    ConfigurationError, DayOutcome, DayState, RunTrajectory, SimulationParameters,
    DEFAULT_ARRIVAL_RATE,
};
pub use orchestrator::{
    simulate_burnout, BurnoutReport, DayRow, Execution, Orchestrator, OrchestratorConfig,
    ReportColumns, ReportSummary, SimulationError,
};
pub use rng::{RandomSource, RngManager};
pub use simulation::{CompletionModel, ModelOptions, RiskModel, RunSimulator};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn burnout_sim_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(ffi::orchestrator::simulate_burnout, m)?)?;
    Ok(())
}
