//! Domain models for the burnout simulator

pub mod params;
pub mod trajectory;

// Re-exports
pub use params::{ConfigurationError, SimulationParameters, DEFAULT_ARRIVAL_RATE};
pub use trajectory::{DayOutcome, DayState, RunTrajectory};
