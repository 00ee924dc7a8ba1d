//! Type conversion utilities for FFI boundary
//!
//! Converts simulation results and errors into Python objects.

use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::orchestrator::{BurnoutReport, SimulationError};

/// Convert a report into a dict of equal-length column lists plus the
/// summary scalars, mirroring a data frame with attached summary fields.
///
/// Keys: `Day`, `BurnoutRisk`, `AvgPendingTasks`, `Fatigue`,
/// `BreachProbability`, `Summary_HighRiskDays`, `Summary_PeakRiskDay`,
/// `Summary_PeakRisk`, `Summary_MaxFatigue`.
pub fn report_to_py(py: Python<'_>, report: &BurnoutReport) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new_bound(py);
    let columns = report.columns();

    dict.set_item("Day", columns.day)?;
    dict.set_item("BurnoutRisk", columns.burnout_risk)?;
    dict.set_item("AvgPendingTasks", columns.avg_pending_tasks)?;
    dict.set_item("Fatigue", columns.fatigue)?;
    dict.set_item("BreachProbability", columns.breach_probability)?;

    let summary = &report.summary;
    dict.set_item("Summary_HighRiskDays", summary.high_risk_days)?;
    dict.set_item("Summary_PeakRiskDay", summary.peak_risk_day)?;
    dict.set_item("Summary_PeakRisk", summary.peak_risk)?;
    dict.set_item("Summary_MaxFatigue", summary.max_fatigue)?;

    Ok(dict.unbind())
}

/// Map a simulation error onto the matching Python exception.
pub fn simulation_error_to_py(err: SimulationError) -> PyErr {
    match err {
        SimulationError::Configuration(e) => {
            PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string())
        }
        other => PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(format!(
            "Burnout simulation failed: {}",
            other
        )),
    }
}
