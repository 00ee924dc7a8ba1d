//! Reduction of run trajectories into per-day series and summary scalars
//!
//! Each worker owns a [`RunAccumulator`]; accumulators are merged pairwise
//! once their runs are done. Nothing here is shared between threads.

pub mod series;
pub mod summary;

pub use series::{AggregateSeries, DayAverages};
pub use summary::{RiskPeak, SummaryStats, HIGH_RISK_CUTOFF};

use thiserror::Error;

use crate::models::RunTrajectory;

/// Reduction errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AggregateError {
    #[error("Trajectory length {actual} does not match aggregate length {expected}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("No runs were aggregated")]
    NoRuns,
}

/// Partial result over a contiguous range of runs.
#[derive(Debug, Clone, PartialEq)]
pub struct RunAccumulator {
    pub series: AggregateSeries,
    pub summary: SummaryStats,
}

impl RunAccumulator {
    pub fn new(days: usize) -> Self {
        Self {
            series: AggregateSeries::new(days),
            summary: SummaryStats::new(),
        }
    }

    /// Fold one trajectory into both the series and the summary.
    pub fn absorb(&mut self, trajectory: &RunTrajectory) -> Result<(), AggregateError> {
        self.series.fold(trajectory)?;
        self.summary.observe(trajectory);
        Ok(())
    }

    /// Merge with the accumulator of the runs that follow this one.
    pub fn merge(self, later: RunAccumulator) -> Result<Self, AggregateError> {
        Ok(Self {
            series: self.series.merge(later.series)?,
            summary: self.summary.merge(later.summary),
        })
    }

    pub fn runs(&self) -> usize {
        self.series.runs()
    }
}
