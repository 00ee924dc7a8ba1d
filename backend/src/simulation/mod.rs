//! Single-run simulation
//!
//! One run is a pure function of the parameters, the model options, and the
//! random stream it is given. Runs share nothing, which is what lets the
//! orchestrator execute them on any number of threads.

pub mod run;
pub mod strategy;

pub use run::RunSimulator;
pub use strategy::{CompletionModel, ModelOptions, RiskModel};
