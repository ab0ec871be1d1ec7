//! Nighttime Recovery Deficit (NRD) daily aggregation
//!
//! An hour is a poor-recovery hour when humidity stays low or wind stays high
//! (`rh < 60` or `wind > 5 m/s`), evaluated for every hour regardless of time
//! of day. Only hours inside the 20:00-08:00 night window count toward the
//! deficit, and the window crosses midnight: the physical night spanning
//! 20:00 of day N through 07:59 of day N+1 folds into one bucket keyed by
//! day N. Every hour is bucketed by the same rule (non-night hours contribute
//! zero), so a date's bucket exists even when its night was fully calm.

use chrono::{NaiveDate, TimeDelta, Timelike};
use rustc_hash::FxHashMap;

use crate::core_types::HourlyRecord;
use crate::thresholds::{
    NIGHT_RECOVERY_RH, NIGHT_RECOVERY_WIND, NIGHT_WINDOW_END_HOUR, NIGHT_WINDOW_START_HOUR,
};

/// Poor-recovery flag for a single hour (time of day not considered)
#[inline]
#[must_use]
pub fn poor_recovery_hour(record: &HourlyRecord) -> bool {
    *record.rh < NIGHT_RECOVERY_RH || *record.wind_speed_ms > NIGHT_RECOVERY_WIND
}

/// True for hours inside the 20:00-08:00 night window
#[inline]
#[must_use]
pub fn in_night_window(hour: u32) -> bool {
    hour >= NIGHT_WINDOW_START_HOUR || hour < NIGHT_WINDOW_END_HOUR
}

/// Date a night-window hour is attributed to.
///
/// Evening hours [20, 23] belong to their own calendar date; early-morning
/// hours [0, 7] continue the previous evening's night and are shifted back
/// one day. Hours outside the window map by the same rule and contribute
/// zero deficit.
#[inline]
#[must_use]
pub fn night_bucket_date(date: NaiveDate, hour: u32) -> NaiveDate {
    if hour < NIGHT_WINDOW_END_HOUR {
        date - TimeDelta::days(1)
    } else {
        date
    }
}

/// Count of poor-recovery night hours per attributed date.
///
/// The first calendar day's early-morning hours land in a bucket one day
/// before the first fire-load date; the pipeline's reconciliation keeps that
/// partial night rather than dropping it.
#[must_use]
pub fn daily_night_deficit(hours: &[HourlyRecord]) -> FxHashMap<NaiveDate, u32> {
    let mut totals: FxHashMap<NaiveDate, u32> = FxHashMap::default();
    for record in hours {
        let hour = record.timestamp.hour();
        let bucket = night_bucket_date(record.timestamp.date(), hour);
        let deficit = u32::from(in_night_window(hour) && poor_recovery_hour(record));
        *totals.entry(bucket).or_insert(0) += deficit;
    }
    totals
}
