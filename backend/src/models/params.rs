//! Simulation parameters and their validation
//!
//! Parameters are validated once, up front, before any run is simulated.
//! Nothing downstream re-checks them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default mean number of new tasks arriving per day.
pub const DEFAULT_ARRIVAL_RATE: f64 = 0.5;

/// Configuration constraint violations.
///
/// Count-valued fields carry the offending value as `i64` so hosts that
/// hand over signed integers get the original value back in the message.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("n_tasks must be > 0, got {0}")]
    NonPositiveTasks(i64),

    #[error("p must lie in [0, 1], got {0}")]
    ProbabilityOutOfRange(f64),

    #[error("threshold must be >= 0, got {0}")]
    NegativeThreshold(i64),

    #[error("days must be > 0, got {0}")]
    NonPositiveDays(i64),

    #[error("reps must be > 0, got {0}")]
    NonPositiveReps(i64),

    #[error("arrival_rate must be finite and >= 0, got {0}")]
    InvalidArrivalRate(f64),
}

/// Inputs of one Monte Carlo computation.
///
/// # Example
/// ```
/// use burnout_sim_core::SimulationParameters;
///
/// let params = SimulationParameters::new(100, 0.5, 20, 30, 1000);
/// assert_eq!(params.arrival_rate, 0.5);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Initial backlog
    pub n_tasks: u64,

    /// Base per-task completion probability
    pub p: f64,

    /// Backlog level above which a day counts as a breach
    pub threshold: u64,

    /// Number of simulated days per run
    pub days: usize,

    /// Number of independent runs
    pub reps: usize,

    /// Mean new tasks per day (Poisson λ)
    #[serde(default = "default_arrival_rate")]
    pub arrival_rate: f64,
}

fn default_arrival_rate() -> f64 {
    DEFAULT_ARRIVAL_RATE
}

impl SimulationParameters {
    /// Parameters with the default arrival rate.
    pub fn new(n_tasks: u64, p: f64, threshold: u64, days: usize, reps: usize) -> Self {
        Self {
            n_tasks,
            p,
            threshold,
            days,
            reps,
            arrival_rate: DEFAULT_ARRIVAL_RATE,
        }
    }

    /// Override the arrival rate.
    pub fn with_arrival_rate(mut self, arrival_rate: f64) -> Self {
        self.arrival_rate = arrival_rate;
        self
    }

    /// Build validated parameters from signed host values.
    ///
    /// Used at boundaries (FFI, loosely typed configs) where negative counts
    /// can reach us and must be reported as configuration errors rather than
    /// conversion failures.
    ///
    /// # Example
    /// ```
    /// use burnout_sim_core::{ConfigurationError, SimulationParameters};
    ///
    /// let err = SimulationParameters::from_signed(10, 0.5, 2, 5, -1, 0.5).unwrap_err();
    /// assert_eq!(err, ConfigurationError::NonPositiveReps(-1));
    /// ```
    pub fn from_signed(
        n_tasks: i64,
        p: f64,
        threshold: i64,
        days: i64,
        reps: i64,
        arrival_rate: f64,
    ) -> Result<Self, ConfigurationError> {
        let n_tasks = u64::try_from(n_tasks)
            .map_err(|_| ConfigurationError::NonPositiveTasks(n_tasks))?;
        let threshold = u64::try_from(threshold)
            .map_err(|_| ConfigurationError::NegativeThreshold(threshold))?;
        let days = usize::try_from(days).map_err(|_| ConfigurationError::NonPositiveDays(days))?;
        let reps = usize::try_from(reps).map_err(|_| ConfigurationError::NonPositiveReps(reps))?;

        let params = Self {
            n_tasks,
            p,
            threshold,
            days,
            reps,
            arrival_rate,
        };
        params.validate()?;
        Ok(params)
    }

    /// Check every constraint, reporting the first violation.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.n_tasks == 0 {
            return Err(ConfigurationError::NonPositiveTasks(0));
        }

        // NaN fails the range check as well
        if !(0.0..=1.0).contains(&self.p) {
            return Err(ConfigurationError::ProbabilityOutOfRange(self.p));
        }

        if self.days == 0 {
            return Err(ConfigurationError::NonPositiveDays(0));
        }

        if self.reps == 0 {
            return Err(ConfigurationError::NonPositiveReps(0));
        }

        if !self.arrival_rate.is_finite() || self.arrival_rate < 0.0 {
            return Err(ConfigurationError::InvalidArrivalRate(self.arrival_rate));
        }

        Ok(())
    }
}
