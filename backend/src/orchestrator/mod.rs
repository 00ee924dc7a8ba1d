//! Orchestrator - drives runs and assembles the report
//!
//! See `engine.rs` for the run loop and `report.rs` for output packaging.

pub mod engine;
pub mod report;

// Re-export main types for convenience
pub use engine::{simulate_burnout, Execution, Orchestrator, OrchestratorConfig, SimulationError};
pub use report::{BurnoutReport, DayRow, ReportColumns, ReportSummary};
