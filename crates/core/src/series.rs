//! Validated hourly input series
//!
//! The metrics engine trusts value bounds (the ingest layer enforces them)
//! but the ordering/spacing contract is checked fail-fast here: a series that
//! reaches the engine out of order, with duplicates, with gaps, or with
//! timestamps off the hour grid is a programming-contract violation and is
//! rejected with a descriptive error rather than silently coerced.

use chrono::{NaiveDateTime, TimeDelta, Timelike};

use crate::core_types::HourlyRecord;

/// Hourly records proven to be strictly ascending, duplicate-free, and
/// uniformly hourly-spaced. Construction is the only gate; once built the
/// engine consumes the slice without re-validation.
#[derive(Debug, Clone)]
pub struct HourlySeries {
    records: Vec<HourlyRecord>,
}

impl HourlySeries {
    /// Validate the ordering/spacing contract and wrap the records.
    ///
    /// An empty series is accepted and yields empty outputs downstream.
    ///
    /// # Errors
    /// Returns the first violated invariant, identifying the offending
    /// timestamp(s).
    pub fn new(records: Vec<HourlyRecord>) -> Result<Self, SeriesError> {
        for record in &records {
            let ts = record.timestamp;
            if ts.minute() != 0 || ts.second() != 0 || ts.nanosecond() != 0 {
                return Err(SeriesError::NotHourAligned(ts));
            }
        }

        for pair in records.windows(2) {
            let (prev, next) = (pair[0].timestamp, pair[1].timestamp);
            let delta = next - prev;
            if delta == TimeDelta::zero() {
                return Err(SeriesError::DuplicateTimestamp(next));
            }
            if delta < TimeDelta::zero() {
                return Err(SeriesError::OutOfOrder { prev, next });
            }
            if delta != TimeDelta::hours(1) {
                return Err(SeriesError::NonHourlySpacing { prev, next });
            }
        }

        Ok(Self { records })
    }

    /// The validated records in chronological order
    #[must_use]
    pub fn records(&self) -> &[HourlyRecord] {
        &self.records
    }

    /// Number of hours in the series
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the series holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Violations of the hourly ordering/spacing contract
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeriesError {
    /// A timestamp is not aligned to the top of an hour
    NotHourAligned(NaiveDateTime),
    /// The same timestamp appears more than once
    DuplicateTimestamp(NaiveDateTime),
    /// A timestamp is earlier than its predecessor
    OutOfOrder {
        /// Timestamp preceding the violation
        prev: NaiveDateTime,
        /// The out-of-order timestamp
        next: NaiveDateTime,
    },
    /// Consecutive timestamps are not exactly one hour apart
    NonHourlySpacing {
        /// Timestamp preceding the gap
        prev: NaiveDateTime,
        /// Timestamp following the gap
        next: NaiveDateTime,
    },
}

impl std::fmt::Display for SeriesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeriesError::NotHourAligned(ts) => {
                write!(f, "Timestamp not aligned to the hour: {ts}")
            }
            SeriesError::DuplicateTimestamp(ts) => {
                write!(f, "Duplicate timestamp: {ts}")
            }
            SeriesError::OutOfOrder { prev, next } => {
                write!(f, "Timestamps out of order: {next} follows {prev}")
            }
            SeriesError::NonHourlySpacing { prev, next } => {
                write!(f, "Non-hourly spacing between {prev} and {next}")
            }
        }
    }
}

impl std::error::Error for SeriesError {}
