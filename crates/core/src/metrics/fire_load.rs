//! Cumulative Fire Load (CFL) daily aggregation
//!
//! Each hour contributes the EFW excess over `FIRE_LOAD_BASELINE`, clamped
//! below at zero (fire load never goes negative). Hours are grouped by plain
//! calendar date; the cross-midnight night window belongs to the night
//! recovery aggregator, not here.

use chrono::NaiveDate;
use rustc_hash::FxHashMap;

use crate::core_types::HourlyRecord;
use crate::thresholds::FIRE_LOAD_BASELINE;

/// Fire load contributed by a single hour's EFW value
#[inline]
#[must_use]
pub fn hourly_fire_load(efw: f64) -> f64 {
    (efw - FIRE_LOAD_BASELINE).max(0.0)
}

/// Sum of hourly fire load per calendar date.
///
/// `efw` must be index-aligned with `hours` (the pipeline guarantees this by
/// construction).
#[must_use]
pub fn daily_fire_load(hours: &[HourlyRecord], efw: &[f64]) -> FxHashMap<NaiveDate, f64> {
    debug_assert_eq!(hours.len(), efw.len());

    let mut totals: FxHashMap<NaiveDate, f64> = FxHashMap::default();
    for (record, &efw_hour) in hours.iter().zip(efw) {
        *totals.entry(record.timestamp.date()).or_insert(0.0) += hourly_fire_load(efw_hour);
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::units::{Celsius, MetersPerSecond, Millimeters, Percent};
    use approx::assert_relative_eq;

    #[test]
    fn test_clamp_above_baseline() {
        assert_relative_eq!(hourly_fire_load(28.0), 8.0);
    }

    #[test]
    fn test_clamp_below_baseline_is_zero() {
        assert_relative_eq!(hourly_fire_load(15.0), 0.0);
        assert_relative_eq!(hourly_fire_load(-40.0), 0.0);
    }

    #[test]
    fn test_daily_grouping_by_calendar_date() {
        let mut hours = Vec::new();
        // Two hours on Jan 1, one hour on Jan 2
        for (day, h) in [(1, 10), (1, 11), (2, 10)] {
            hours.push(HourlyRecord::new(
                NaiveDate::from_ymd_opt(2020, 1, day)
                    .unwrap()
                    .and_hms_opt(h, 0, 0)
                    .unwrap(),
                Celsius::new(30.0),
                Percent::new(20.0),
                MetersPerSecond::new(4.0),
                Millimeters::new(0.0),
            ));
        }
        // EFW 28 each -> 8 load per hour
        let efw = vec![28.0, 28.0, 28.0];
        let totals = daily_fire_load(&hours, &efw);

        assert_eq!(totals.len(), 2);
        assert_relative_eq!(totals[&NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()], 16.0);
        assert_relative_eq!(totals[&NaiveDate::from_ymd_opt(2020, 1, 2).unwrap()], 8.0);
    }
}
