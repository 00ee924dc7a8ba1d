//! Scalar summaries extracted from each run
//!
//! - High-risk days: count of days with risk above [`HIGH_RISK_CUTOFF`]
//! - Peak risk: the largest risk seen, and the day it first occurred
//! - Max fatigue: the largest fatigue seen
//!
//! Peaks are replaced only by strictly larger values, so the earliest
//! occurrence wins a tie, both within a run and across runs merged in order.

use crate::models::RunTrajectory;

/// Risk strictly above this value marks a high-risk day.
pub const HIGH_RISK_CUTOFF: f64 = 0.7;

/// Location and value of a risk maximum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskPeak {
    /// 1-based day index
    pub day: usize,
    pub risk: f64,
}

/// Running summary across the runs observed so far.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryStats {
    total_high_risk_days: u64,
    peak: Option<RiskPeak>,
    max_fatigue: f64,
}

impl SummaryStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Days above the cutoff, summed over all observed runs.
    pub fn total_high_risk_days(&self) -> u64 {
        self.total_high_risk_days
    }

    /// Global risk peak; `None` until a non-empty run has been observed.
    pub fn peak(&self) -> Option<RiskPeak> {
        self.peak
    }

    pub fn max_fatigue(&self) -> f64 {
        self.max_fatigue
    }

    /// Update the summary with one run.
    pub fn observe(&mut self, trajectory: &RunTrajectory) {
        let mut run_peak: Option<RiskPeak> = None;

        for (idx, outcome) in trajectory.iter().enumerate() {
            if outcome.risk > HIGH_RISK_CUTOFF {
                self.total_high_risk_days += 1;
            }

            if run_peak.map_or(true, |peak| outcome.risk > peak.risk) {
                run_peak = Some(RiskPeak {
                    day: idx + 1,
                    risk: outcome.risk,
                });
            }

            self.max_fatigue = self.max_fatigue.max(outcome.fatigue);
        }

        self.offer_peak(run_peak);
    }

    /// Combine with a summary of later runs.
    ///
    /// `self` is treated as the earlier of the two, so on equal peaks its
    /// day is kept.
    pub fn merge(mut self, later: SummaryStats) -> Self {
        self.total_high_risk_days += later.total_high_risk_days;
        self.max_fatigue = self.max_fatigue.max(later.max_fatigue);
        self.offer_peak(later.peak);
        self
    }

    fn offer_peak(&mut self, candidate: Option<RiskPeak>) {
        let Some(candidate) = candidate else { return };
        if self.peak.map_or(true, |current| candidate.risk > current.risk) {
            self.peak = Some(candidate);
        }
    }
}
