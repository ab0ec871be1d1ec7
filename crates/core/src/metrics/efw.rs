//! Effective Fire Weather (EFW) per-hour index
//!
//! `EFW = temp_c + 0.5 * wind_speed_ms - 0.2 * rh`. A stateless, total
//! transform: defined for any real inputs, may be negative, and the output
//! stays index-aligned 1:1 with the input hours.

use rayon::prelude::*;

use crate::core_types::HourlyRecord;

/// Wind contribution weight in the EFW index
const WIND_WEIGHT: f64 = 0.5;

/// Humidity suppression weight in the EFW index
const HUMIDITY_WEIGHT: f64 = 0.2;

/// EFW index for a single hour
#[inline]
#[must_use]
pub fn effective_fire_weather(record: &HourlyRecord) -> f64 {
    *record.temp_c + WIND_WEIGHT * *record.wind_speed_ms - HUMIDITY_WEIGHT * *record.rh
}

/// EFW index for every hour, index-aligned with the input.
///
/// The per-hour transform is embarrassingly parallel; the parallel map
/// collects results in input order.
#[must_use]
pub fn compute_hourly_efw(hours: &[HourlyRecord]) -> Vec<f64> {
    hours.par_iter().map(effective_fire_weather).collect()
}
