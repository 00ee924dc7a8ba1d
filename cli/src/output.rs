//! Report rendering for stdout

use std::io::Write;

use anyhow::Result;
use burnout_sim_core::{BurnoutReport, DayRow, ReportSummary};
use clap::ValueEnum;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned columns followed by a summary block
    Table,
    /// One row per day; summary scalars repeated on every row
    Csv,
    /// The full report as pretty-printed JSON
    Json,
}

/// One CSV line: a day's averages followed by the run-wide summary.
///
/// Column names must stay in step with the serde names on [`DayRow`] and
/// [`ReportSummary`] so the file reads back into either type.
#[derive(Serialize)]
struct CsvRecord {
    #[serde(rename = "Day")]
    day: usize,
    #[serde(rename = "BurnoutRisk")]
    burnout_risk: f64,
    #[serde(rename = "AvgPendingTasks")]
    avg_pending_tasks: f64,
    #[serde(rename = "Fatigue")]
    fatigue: f64,
    #[serde(rename = "BreachProbability")]
    breach_probability: f64,
    #[serde(rename = "Summary_HighRiskDays")]
    high_risk_days: f64,
    #[serde(rename = "Summary_PeakRiskDay")]
    peak_risk_day: usize,
    #[serde(rename = "Summary_PeakRisk")]
    peak_risk: f64,
    #[serde(rename = "Summary_MaxFatigue")]
    max_fatigue: f64,
}

impl CsvRecord {
    fn new(row: &DayRow, summary: &ReportSummary) -> Self {
        Self {
            day: row.day,
            burnout_risk: row.burnout_risk,
            avg_pending_tasks: row.avg_pending_tasks,
            fatigue: row.fatigue,
            breach_probability: row.breach_probability,
            high_risk_days: summary.high_risk_days,
            peak_risk_day: summary.peak_risk_day,
            peak_risk: summary.peak_risk,
            max_fatigue: summary.max_fatigue,
        }
    }
}

pub fn write_report<W: Write>(
    out: &mut W,
    report: &BurnoutReport,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Table => write_table(out, report),
        OutputFormat::Csv => write_csv(out, report),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
            Ok(())
        }
    }
}

fn write_table<W: Write>(out: &mut W, report: &BurnoutReport) -> Result<()> {
    writeln!(
        out,
        "{:>5}  {:>12}  {:>16}  {:>8}  {:>18}",
        "Day", "BurnoutRisk", "AvgPendingTasks", "Fatigue", "BreachProbability"
    )?;
    for row in &report.rows {
        writeln!(
            out,
            "{:>5}  {:>12.6}  {:>16.3}  {:>8.4}  {:>18.4}",
            row.day, row.burnout_risk, row.avg_pending_tasks, row.fatigue, row.breach_probability
        )?;
    }

    let summary = &report.summary;
    writeln!(out)?;
    writeln!(out, "High-risk days per run: {:.3}", summary.high_risk_days)?;
    writeln!(
        out,
        "Peak risk:              {:.6} on day {}",
        summary.peak_risk, summary.peak_risk_day
    )?;
    writeln!(out, "Max fatigue:            {:.4}", summary.max_fatigue)?;
    Ok(())
}

fn write_csv<W: Write>(out: &mut W, report: &BurnoutReport) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for row in &report.rows {
        writer.serialize(CsvRecord::new(row, &report.summary))?;
    }
    writer.flush()?;
    Ok(())
}
