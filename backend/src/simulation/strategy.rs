//! Pluggable risk and completion models
//!
//! The logistic risk curve and a single binomial completion draw form the
//! canonical model. The binary breach indicator and the per-task Bernoulli
//! loop are kept as alternatives for reproducing older result sets.

use serde::{Deserialize, Serialize};

use crate::rng::RandomSource;

/// Steepness of the logistic risk curve around the threshold.
pub const LOGISTIC_STEEPNESS: f64 = 0.8;

/// Bound applied to the logistic exponent before calling `exp`.
pub const EXPONENT_CLAMP: f64 = 50.0;

/// How a day's backlog maps to a risk value in `[0, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskModel {
    /// `1 / (1 + exp(-0.8 * (pending - threshold)))`
    #[default]
    Logistic,

    /// 1.0 when the backlog exceeds the threshold, otherwise 0.0
    Binary,
}

impl RiskModel {
    /// Risk for a backlog of `pending` tasks against `threshold`.
    ///
    /// # Example
    /// ```
    /// use burnout_sim_core::RiskModel;
    ///
    /// assert_eq!(RiskModel::Logistic.risk(20, 20), 0.5);
    /// assert_eq!(RiskModel::Binary.risk(21, 20), 1.0);
    /// assert_eq!(RiskModel::Binary.risk(20, 20), 0.0);
    /// ```
    pub fn risk(&self, pending: u64, threshold: u64) -> f64 {
        match self {
            RiskModel::Logistic => {
                let overshoot = pending as f64 - threshold as f64;
                let exponent =
                    (-LOGISTIC_STEEPNESS * overshoot).clamp(-EXPONENT_CLAMP, EXPONENT_CLAMP);
                1.0 / (1.0 + exponent.exp())
            }
            RiskModel::Binary => {
                if pending > threshold {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }
}

/// How many of the pending tasks get completed in a day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionModel {
    /// One `Binomial(pending, productivity)` draw, O(1) per day
    #[default]
    Binomial,

    /// One Bernoulli(productivity) trial per pending task, O(pending) per day
    PerTask,
}

impl CompletionModel {
    pub fn completed<R: RandomSource>(&self, rng: &mut R, pending: u64, productivity: f64) -> u64 {
        match self {
            CompletionModel::Binomial => rng.binomial(pending, productivity),
            CompletionModel::PerTask => (0..pending)
                .filter(|_| rng.bernoulli(productivity))
                .count() as u64,
        }
    }
}

/// Model choices for a computation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelOptions {
    pub risk_model: RiskModel,
    pub completion_model: CompletionModel,
}
