//! Export and summary rendering of the daily risk series
//!
//! Consumes the pipeline output read-only: a CSV table with the stable
//! column order, a pretty JSON document with the covered date range, and a
//! fixed-width plain-text summary table.

use serde::Serialize;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::core_types::DailyRecord;

/// JSON document wrapping the daily series with its covered range
#[derive(Debug, Serialize)]
struct DailyReport<'a> {
    start_date: Option<chrono::NaiveDate>,
    end_date: Option<chrono::NaiveDate>,
    days: &'a [DailyRecord],
}

/// Write the daily series as a CSV table, one row per date.
///
/// Column order and headers follow the `DailyRecord` field order
/// (`date`, `daily_CFL`, `cumulative_CFL`, ...).
///
/// # Errors
/// Returns an error if the file cannot be written or a record cannot be
/// serialized.
pub fn write_daily_csv<P: AsRef<Path>>(path: P, daily: &[DailyRecord]) -> Result<(), ReportError> {
    let mut writer =
        csv::Writer::from_path(path).map_err(|e| ReportError::WriteFailed(e.to_string()))?;
    for record in daily {
        writer
            .serialize(record)
            .map_err(|e| ReportError::SerializeFailed(e.to_string()))?;
    }
    writer
        .flush()
        .map_err(|e| ReportError::WriteFailed(e.to_string()))?;
    Ok(())
}

/// Write the daily series as a pretty JSON document.
///
/// # Errors
/// Returns an error if serialization or the file write fails.
pub fn write_daily_json<P: AsRef<Path>>(path: P, daily: &[DailyRecord]) -> Result<(), ReportError> {
    let report = DailyReport {
        start_date: daily.first().map(|r| r.date),
        end_date: daily.last().map(|r| r.date),
        days: daily,
    };
    let contents = serde_json::to_string_pretty(&report)
        .map_err(|e| ReportError::SerializeFailed(e.to_string()))?;
    fs::write(path, contents).map_err(|e| ReportError::WriteFailed(e.to_string()))?;
    Ok(())
}

/// Render the fixed-width plain-text summary table, one line per date.
#[must_use]
pub fn summary_table(daily: &[DailyRecord]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<12} {:>10} {:>10} {:>9} {:>11} {:>10}",
        "date", "daily_CFL", "daily_NRD", "compound", "risk_state", "multiplier"
    );
    for record in daily {
        let _ = writeln!(
            out,
            "{:<12} {:>10.2} {:>10} {:>9} {:>11} {:>10.2}",
            record.date,
            record.daily_cfl,
            record.daily_nrd,
            record.compound,
            record.risk_state.as_str(),
            record.risk_multiplier
        );
    }
    out
}

/// Errors that can occur while exporting reports
#[derive(Debug)]
pub enum ReportError {
    /// Failed to write the output file
    WriteFailed(String),
    /// Failed to serialize the daily series
    SerializeFailed(String),
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportError::WriteFailed(msg) => write!(f, "Failed to write report: {msg}"),
            ReportError::SerializeFailed(msg) => write!(f, "Failed to serialize report: {msg}"),
        }
    }
}

impl std::error::Error for ReportError {}
