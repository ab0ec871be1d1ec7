//! Hourly fire-weather CSV ingestion
//!
//! Implements the upstream data-source contract the metrics engine assumes:
//! required columns present and numeric, timestamps normalized to naive UTC,
//! records sorted ascending with no duplicates, value bounds enforced, and
//! interior gaps filled to uniform hourly spacing by carrying the previous
//! hour's readings forward. Unknown extra columns are ignored; the optional
//! upstream indices are parsed when present and never required.

use chrono::{DateTime, NaiveDateTime, TimeDelta};
use csv::StringRecord;
use std::path::Path;
use tracing::info;

use crate::core_types::units::{Celsius, MetersPerSecond, Millimeters, Percent};
use crate::core_types::HourlyRecord;
use crate::series::{HourlySeries, SeriesError};

/// Columns every input file must provide
const REQUIRED_COLUMNS: [&str; 5] = ["timestamp", "temp_c", "rh", "wind_speed_ms", "precip_mm"];

/// Accepted timestamp layouts for offset-free inputs
const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];

/// Load an hourly CSV file and return a validated series.
///
/// # Errors
/// Returns the first failed validation: unreadable file, missing header,
/// unparseable field, duplicate timestamp, out-of-range value, or a violated
/// ordering/spacing invariant after gap filling.
pub fn load_hourly_csv<P: AsRef<Path>>(path: P) -> Result<HourlySeries, IngestError> {
    let mut reader =
        csv::Reader::from_path(path.as_ref()).map_err(|e| IngestError::ReadFailed(e.to_string()))?;

    let headers = reader
        .headers()
        .map_err(|e| IngestError::ReadFailed(e.to_string()))?
        .clone();
    let columns = ColumnLayout::resolve(&headers)?;

    let mut records = Vec::new();
    for (i, row) in reader.records().enumerate() {
        let row = row.map_err(|e| IngestError::ReadFailed(e.to_string()))?;
        // Header is line 1; data starts at line 2
        records.push(columns.parse_row(&row, i + 2)?);
    }

    records.sort_by_key(|r| r.timestamp);
    for pair in records.windows(2) {
        if pair[0].timestamp == pair[1].timestamp {
            return Err(IngestError::DuplicateTimestamp(pair[1].timestamp));
        }
    }

    let raw_len = records.len();
    let filled = fill_hourly_gaps(records);
    if filled.len() > raw_len {
        info!(
            parsed = raw_len,
            filled = filled.len() - raw_len,
            "forward-filled interior gaps to hourly spacing"
        );
    }

    Ok(HourlySeries::new(filled)?)
}

/// Resolved header positions for one input file
struct ColumnLayout {
    timestamp: usize,
    temp_c: usize,
    rh: usize,
    wind_speed_ms: usize,
    precip_mm: usize,
    fuel_dryness_index: Option<usize>,
    vegetation_type_index: Option<usize>,
}

impl ColumnLayout {
    fn resolve(headers: &StringRecord) -> Result<Self, IngestError> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        for name in REQUIRED_COLUMNS {
            if find(name).is_none() {
                return Err(IngestError::MissingColumn(name.to_string()));
            }
        }
        // Required positions proven present above
        Ok(Self {
            timestamp: find("timestamp").unwrap_or(0),
            temp_c: find("temp_c").unwrap_or(0),
            rh: find("rh").unwrap_or(0),
            wind_speed_ms: find("wind_speed_ms").unwrap_or(0),
            precip_mm: find("precip_mm").unwrap_or(0),
            fuel_dryness_index: find("fuel_dryness_index"),
            vegetation_type_index: find("vegetation_type_index"),
        })
    }

    fn parse_row(&self, row: &StringRecord, line: usize) -> Result<HourlyRecord, IngestError> {
        let timestamp = parse_timestamp(field(row, self.timestamp), line)?;
        let temp_c = parse_number(row, self.temp_c, "temp_c", line)?;
        let rh = parse_number(row, self.rh, "rh", line)?;
        let wind = parse_number(row, self.wind_speed_ms, "wind_speed_ms", line)?;
        let precip = parse_number(row, self.precip_mm, "precip_mm", line)?;

        // Bounds are enforced on the raw values before the unit constructors
        // run, so contract violations surface as errors rather than panics.
        if !(0.0..=100.0).contains(&rh) {
            return Err(IngestError::OutOfRange {
                column: "rh",
                timestamp,
                value: rh,
            });
        }
        if wind < 0.0 {
            return Err(IngestError::OutOfRange {
                column: "wind_speed_ms",
                timestamp,
                value: wind,
            });
        }
        if precip < 0.0 {
            return Err(IngestError::OutOfRange {
                column: "precip_mm",
                timestamp,
                value: precip,
            });
        }
        if temp_c < -273.15 {
            return Err(IngestError::OutOfRange {
                column: "temp_c",
                timestamp,
                value: temp_c,
            });
        }

        let mut record = HourlyRecord::new(
            timestamp,
            Celsius::new(temp_c),
            Percent::new(rh),
            MetersPerSecond::new(wind),
            Millimeters::new(precip),
        );
        record.fuel_dryness_index = self
            .fuel_dryness_index
            .and_then(|idx| parse_optional_number(row, idx));
        record.vegetation_type_index = self
            .vegetation_type_index
            .and_then(|idx| parse_optional_number(row, idx));
        Ok(record)
    }
}

fn field(row: &StringRecord, idx: usize) -> &str {
    row.get(idx).unwrap_or("")
}

fn parse_timestamp(raw: &str, line: usize) -> Result<NaiveDateTime, IngestError> {
    let raw = raw.trim();
    // Offset-carrying timestamps are normalized to naive UTC
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.naive_utc());
    }
    for format in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(dt);
        }
    }
    Err(IngestError::InvalidTimestamp {
        line,
        value: raw.to_string(),
    })
}

fn parse_number(
    row: &StringRecord,
    idx: usize,
    column: &'static str,
    line: usize,
) -> Result<f64, IngestError> {
    let raw = field(row, idx).trim();
    raw.parse::<f64>().map_err(|_| IngestError::InvalidNumber {
        line,
        column,
        value: raw.to_string(),
    })
}

/// Empty or unparseable optional fields simply stay absent
fn parse_optional_number(row: &StringRecord, idx: usize) -> Option<f64> {
    let raw = field(row, idx).trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse::<f64>().ok()
}

/// Fill interior gaps by carrying the previous hour's readings forward.
///
/// Input must already be sorted and duplicate-free. Timestamps that are off
/// the hour grid are left for `HourlySeries::new` to reject.
fn fill_hourly_gaps(records: Vec<HourlyRecord>) -> Vec<HourlyRecord> {
    let mut filled: Vec<HourlyRecord> = Vec::with_capacity(records.len());
    for record in records {
        if let Some(prev) = filled.last() {
            let mut next_ts = prev.timestamp + TimeDelta::hours(1);
            let mut carry = prev.clone();
            while next_ts < record.timestamp {
                carry.timestamp = next_ts;
                filled.push(carry.clone());
                next_ts += TimeDelta::hours(1);
            }
        }
        filled.push(record);
    }
    filled
}

/// Errors that can occur while loading an hourly CSV
#[derive(Debug)]
pub enum IngestError {
    /// Failed to open or read the file
    ReadFailed(String),
    /// A required column is absent from the header
    MissingColumn(String),
    /// A timestamp field could not be parsed
    InvalidTimestamp {
        /// 1-based file line of the offending row
        line: usize,
        /// The raw field contents
        value: String,
    },
    /// A numeric field could not be parsed
    InvalidNumber {
        /// 1-based file line of the offending row
        line: usize,
        /// Column the field belongs to
        column: &'static str,
        /// The raw field contents
        value: String,
    },
    /// The same timestamp appears more than once
    DuplicateTimestamp(NaiveDateTime),
    /// A value violates its documented bounds
    OutOfRange {
        /// Column the value belongs to
        column: &'static str,
        /// Timestamp of the offending row
        timestamp: NaiveDateTime,
        /// The out-of-bounds value
        value: f64,
    },
    /// The ordering/spacing contract failed after gap filling
    Series(SeriesError),
}

impl From<SeriesError> for IngestError {
    fn from(err: SeriesError) -> Self {
        IngestError::Series(err)
    }
}

impl std::fmt::Display for IngestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IngestError::ReadFailed(msg) => write!(f, "Failed to read CSV: {msg}"),
            IngestError::MissingColumn(name) => {
                write!(f, "Missing required column: {name}")
            }
            IngestError::InvalidTimestamp { line, value } => {
                write!(f, "Line {line}: invalid timestamp '{value}'")
            }
            IngestError::InvalidNumber {
                line,
                column,
                value,
            } => {
                write!(f, "Line {line}: invalid number '{value}' in column {column}")
            }
            IngestError::DuplicateTimestamp(ts) => {
                write!(f, "Duplicate timestamp: {ts}")
            }
            IngestError::OutOfRange {
                column,
                timestamp,
                value,
            } => {
                write!(f, "Value {value} out of range for {column} at {timestamp}")
            }
            IngestError::Series(err) => write!(f, "Series contract violated: {err}"),
        }
    }
}

impl std::error::Error for IngestError {}
