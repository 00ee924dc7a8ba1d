//! PyO3 entry point for running a simulation
//!
//! # Example (from Python)
//!
//! ```python
//! from burnout_sim_core import simulate_burnout
//!
//! result = simulate_burnout(100, 0.5, 20, 30, 1000, arrival_rate=0.0, seed=42)
//! print(result["Summary_PeakRiskDay"], result["BurnoutRisk"][:5])
//! ```

use pyo3::prelude::*;
use pyo3::types::PyDict;

use super::types::{report_to_py, simulation_error_to_py};
use crate::models::{SimulationParameters, DEFAULT_ARRIVAL_RATE};
use crate::orchestrator::{Orchestrator, OrchestratorConfig, SimulationError};
use crate::rng::RngManager;

/// Run the burnout simulation and return its columns.
///
/// The computation releases the GIL while runs execute.
///
/// # Errors
///
/// Raises ValueError if any parameter violates its constraint.
#[pyfunction]
#[pyo3(signature = (n_tasks, p, threshold, days, reps, arrival_rate = DEFAULT_ARRIVAL_RATE, seed = None))]
#[allow(clippy::too_many_arguments)]
pub fn simulate_burnout(
    py: Python<'_>,
    n_tasks: i64,
    p: f64,
    threshold: i64,
    days: i64,
    reps: i64,
    arrival_rate: f64,
    seed: Option<u64>,
) -> PyResult<Py<PyDict>> {
    let params =
        SimulationParameters::from_signed(n_tasks, p, threshold, days, reps, arrival_rate)
            .map_err(|e| simulation_error_to_py(SimulationError::from(e)))?;
    let seed = seed.unwrap_or_else(RngManager::seed_from_clock);

    let orchestrator =
        Orchestrator::new(OrchestratorConfig::new(params, seed)).map_err(simulation_error_to_py)?;
    let report = py
        .allow_threads(|| orchestrator.run())
        .map_err(simulation_error_to_py)?;

    report_to_py(py, &report)
}
