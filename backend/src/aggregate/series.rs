//! Per-day sums across runs
//!
//! Folding is an element-wise sum, so partial series built on different
//! threads can be merged in any grouping. Normalization divides by the
//! number of runs folded in.

use crate::models::RunTrajectory;
use super::AggregateError;

/// Running per-day sums of risk, backlog, fatigue, and breach counts.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateSeries {
    risk: Vec<f64>,
    pending: Vec<f64>,
    fatigue: Vec<f64>,
    breaches: Vec<u64>,
    runs: usize,
}

/// Per-day averages after normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayAverages {
    /// 1-based day index
    pub day: usize,
    pub risk: f64,
    pub pending: f64,
    pub fatigue: f64,
    /// Fraction of runs whose backlog exceeded the threshold on this day
    pub breach_probability: f64,
}

impl AggregateSeries {
    /// Empty sums for a run length of `days`.
    pub fn new(days: usize) -> Self {
        Self {
            risk: vec![0.0; days],
            pending: vec![0.0; days],
            fatigue: vec![0.0; days],
            breaches: vec![0; days],
            runs: 0,
        }
    }

    pub fn days(&self) -> usize {
        self.risk.len()
    }

    /// Number of runs folded in so far.
    pub fn runs(&self) -> usize {
        self.runs
    }

    /// Raw breach counts per day.
    pub fn breach_counts(&self) -> &[u64] {
        &self.breaches
    }

    /// Add one run's trajectory to the sums.
    pub fn fold(&mut self, trajectory: &RunTrajectory) -> Result<(), AggregateError> {
        if trajectory.len() != self.days() {
            return Err(AggregateError::ShapeMismatch {
                expected: self.days(),
                actual: trajectory.len(),
            });
        }

        for (idx, outcome) in trajectory.iter().enumerate() {
            self.risk[idx] += outcome.risk;
            self.pending[idx] += outcome.pending as f64;
            self.fatigue[idx] += outcome.fatigue;
            if outcome.over_threshold {
                self.breaches[idx] += 1;
            }
        }
        self.runs += 1;

        Ok(())
    }

    /// Combine two partial series covering disjoint sets of runs.
    pub fn merge(mut self, other: AggregateSeries) -> Result<Self, AggregateError> {
        if other.days() != self.days() {
            return Err(AggregateError::ShapeMismatch {
                expected: self.days(),
                actual: other.days(),
            });
        }

        for idx in 0..self.days() {
            self.risk[idx] += other.risk[idx];
            self.pending[idx] += other.pending[idx];
            self.fatigue[idx] += other.fatigue[idx];
            self.breaches[idx] += other.breaches[idx];
        }
        self.runs += other.runs;

        Ok(self)
    }

    /// Divide every sum by the number of runs.
    pub fn normalize(&self) -> Result<Vec<DayAverages>, AggregateError> {
        if self.runs == 0 {
            return Err(AggregateError::NoRuns);
        }

        let reps = self.runs as f64;
        Ok((0..self.days())
            .map(|idx| DayAverages {
                day: idx + 1,
                risk: self.risk[idx] / reps,
                pending: self.pending[idx] / reps,
                fatigue: self.fatigue[idx] / reps,
                breach_probability: self.breaches[idx] as f64 / reps,
            })
            .collect())
    }
}
