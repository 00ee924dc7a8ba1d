//! Report packaging
//!
//! The report is the only thing callers see: one row per day plus a summary
//! record. Field names serialize to the column names reporting layers
//! expect (`Day`, `BurnoutRisk`, ...).

use serde::{Deserialize, Serialize};

use crate::aggregate::{AggregateError, DayAverages, RunAccumulator};
use crate::orchestrator::SimulationError;

/// Averages for one simulated day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayRow {
    #[serde(rename = "Day")]
    pub day: usize,

    #[serde(rename = "BurnoutRisk")]
    pub burnout_risk: f64,

    #[serde(rename = "AvgPendingTasks")]
    pub avg_pending_tasks: f64,

    #[serde(rename = "Fatigue")]
    pub fatigue: f64,

    /// Share of runs whose backlog exceeded the threshold on this day
    #[serde(rename = "BreachProbability")]
    pub breach_probability: f64,
}

impl From<DayAverages> for DayRow {
    fn from(avg: DayAverages) -> Self {
        Self {
            day: avg.day,
            burnout_risk: avg.risk,
            avg_pending_tasks: avg.pending,
            fatigue: avg.fatigue,
            breach_probability: avg.breach_probability,
        }
    }
}

/// Scalars summarising all runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// High-risk days per run (total over all runs divided by `reps`)
    #[serde(rename = "Summary_HighRiskDays")]
    pub high_risk_days: f64,

    /// 1-based day of the largest risk seen in any run
    #[serde(rename = "Summary_PeakRiskDay")]
    pub peak_risk_day: usize,

    #[serde(rename = "Summary_PeakRisk")]
    pub peak_risk: f64,

    #[serde(rename = "Summary_MaxFatigue")]
    pub max_fatigue: f64,
}

/// Complete output of a computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BurnoutReport {
    pub rows: Vec<DayRow>,
    pub summary: ReportSummary,
}

/// Column-oriented view of a report, one vector per output column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportColumns {
    #[serde(rename = "Day")]
    pub day: Vec<usize>,
    #[serde(rename = "BurnoutRisk")]
    pub burnout_risk: Vec<f64>,
    #[serde(rename = "AvgPendingTasks")]
    pub avg_pending_tasks: Vec<f64>,
    #[serde(rename = "Fatigue")]
    pub fatigue: Vec<f64>,
    #[serde(rename = "BreachProbability")]
    pub breach_probability: Vec<f64>,
}

impl BurnoutReport {
    /// Normalize a fully reduced accumulator into a report.
    pub fn from_accumulator(acc: &RunAccumulator) -> Result<Self, SimulationError> {
        let rows: Vec<DayRow> = acc
            .series
            .normalize()?
            .into_iter()
            .map(DayRow::from)
            .collect();

        let peak = acc.summary.peak().ok_or(AggregateError::NoRuns)?;
        let reps = acc.runs() as f64;

        Ok(Self {
            rows,
            summary: ReportSummary {
                high_risk_days: acc.summary.total_high_risk_days() as f64 / reps,
                peak_risk_day: peak.day,
                peak_risk: peak.risk,
                max_fatigue: acc.summary.max_fatigue(),
            },
        })
    }

    pub fn days(&self) -> usize {
        self.rows.len()
    }

    /// Row for a 1-based day index.
    pub fn day(&self, day: usize) -> Option<&DayRow> {
        day.checked_sub(1).and_then(|idx| self.rows.get(idx))
    }

    pub fn columns(&self) -> ReportColumns {
        ReportColumns {
            day: self.rows.iter().map(|r| r.day).collect(),
            burnout_risk: self.rows.iter().map(|r| r.burnout_risk).collect(),
            avg_pending_tasks: self.rows.iter().map(|r| r.avg_pending_tasks).collect(),
            fatigue: self.rows.iter().map(|r| r.fatigue).collect(),
            breach_probability: self.rows.iter().map(|r| r.breach_probability).collect(),
        }
    }
}
