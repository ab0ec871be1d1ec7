//! Full daily metrics and risk pipeline
//!
//! Orchestrates the leaf calculations strictly downstream: hourly input →
//! EFW → daily fire-load and night-recovery totals → reconciled daily
//! sequence → flags/streaks → multiplier and risk state. The output is
//! produced fresh on each invocation; there is no cross-run state.

use chrono::NaiveDate;
use tracing::info;

use crate::core_types::DailyRecord;
use crate::metrics::{efw, fire_load, night_recovery, strain};
use crate::risk;
use crate::series::HourlySeries;

/// Compute the complete daily series and the hour-aligned EFW series.
///
/// The two aggregators can disagree on date coverage: the first calendar
/// day's early-morning night hours land one day before the first fire-load
/// date. The date sets are outer-joined, missing metrics filled with zero,
/// so a partial night is emitted as its own leading record rather than
/// silently dropped. Cumulative totals and streaks are computed on the
/// joined, date-sorted sequence, keeping both running totals monotone.
#[must_use]
pub fn compute_daily_metrics(series: &HourlySeries) -> (Vec<DailyRecord>, Vec<f64>) {
    let hours = series.records();
    let efw_series = efw::compute_hourly_efw(hours);

    let cfl_by_date = fire_load::daily_fire_load(hours, &efw_series);
    let nrd_by_date = night_recovery::daily_night_deficit(hours);

    // Outer join of the two aggregators' date ranges, ascending, no duplicates
    let mut dates: Vec<NaiveDate> = cfl_by_date.keys().chain(nrd_by_date.keys()).copied().collect();
    dates.sort_unstable();
    dates.dedup();

    let daily_cfl: Vec<f64> = dates
        .iter()
        .map(|d| cfl_by_date.get(d).copied().unwrap_or(0.0))
        .collect();
    let daily_nrd: Vec<u32> = dates
        .iter()
        .map(|d| nrd_by_date.get(d).copied().unwrap_or(0))
        .collect();

    let high_fire: Vec<bool> = daily_cfl.iter().map(|&c| strain::is_high_fire_day(c)).collect();
    let poor_recovery: Vec<bool> = daily_nrd
        .iter()
        .map(|&n| strain::is_poor_recovery_night(n))
        .collect();
    let compound: Vec<bool> = high_fire
        .iter()
        .zip(&poor_recovery)
        .map(|(&h, &p)| h && p)
        .collect();

    let fire_streaks = strain::running_streaks(&high_fire);
    let recovery_streaks = strain::running_streaks(&poor_recovery);
    let compound_streaks = strain::running_streaks(&compound);

    let mut records = Vec::with_capacity(dates.len());
    let mut cumulative_cfl = 0.0;
    let mut cumulative_nrd = 0u32;
    for i in 0..dates.len() {
        cumulative_cfl += daily_cfl[i];
        cumulative_nrd += daily_nrd[i];
        records.push(DailyRecord {
            date: dates[i],
            daily_cfl: daily_cfl[i],
            cumulative_cfl,
            daily_nrd: daily_nrd[i],
            cumulative_nrd,
            high_fire_day: high_fire[i],
            poor_recovery_night: poor_recovery[i],
            compound: compound[i],
            consecutive_high_fire_days: fire_streaks[i],
            consecutive_poor_recovery_nights: recovery_streaks[i],
            consecutive_compound_cycles: compound_streaks[i],
            risk_multiplier: risk::risk_multiplier(daily_cfl[i], daily_nrd[i], compound_streaks[i]),
            risk_state: risk::classify(daily_cfl[i], daily_nrd[i], compound_streaks[i]),
        });
    }

    info!(
        hours = hours.len(),
        days = records.len(),
        "computed daily metrics and risk series"
    );

    (records, efw_series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::units::{Celsius, MetersPerSecond, Millimeters, Percent};
    use crate::core_types::HourlyRecord;
    use crate::risk::RiskState;
    use chrono::{NaiveDateTime, TimeDelta};

    /// Hourly series of `days * 24` hours starting at the given instant,
    /// with per-hour conditions chosen by the closure `(day, hour)`.
    fn build_series<F>(start: NaiveDateTime, days: u32, conditions: F) -> HourlySeries
    where
        F: Fn(u32, u32) -> (f64, f64, f64),
    {
        let mut records = Vec::new();
        for day in 0..days {
            for hour in 0..24 {
                let (temp, rh, wind) = conditions(day, hour);
                let ts = start + TimeDelta::hours(i64::from(day) * 24 + i64::from(hour));
                records.push(HourlyRecord::new(
                    ts,
                    Celsius::new(temp),
                    Percent::new(rh),
                    MetersPerSecond::new(wind),
                    Millimeters::new(0.0),
                ));
            }
        }
        HourlySeries::new(records).unwrap()
    }

    fn start_at_midnight() -> NaiveDateTime {
        chrono::NaiveDate::from_ymd_opt(2020, 8, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    /// Calm, humid, cool conditions: zero fire load, zero deficit
    fn calm(_day: u32, _hour: u32) -> (f64, f64, f64) {
        (15.0, 90.0, 1.0)
    }

    /// Hot dry afternoons and dry nights: both flags raised every day
    fn severe(_day: u32, hour: u32) -> (f64, f64, f64) {
        if (8..20).contains(&hour) {
            (45.0, 10.0, 6.0)
        } else {
            (30.0, 20.0, 6.0)
        }
    }

    #[test]
    fn test_empty_series_yields_empty_outputs() {
        let series = HourlySeries::new(Vec::new()).unwrap();
        let (daily, efw) = compute_daily_metrics(&series);
        assert!(daily.is_empty());
        assert!(efw.is_empty());
    }

    #[test]
    fn test_leading_partial_night_is_emitted() {
        // Input starts at 00:00, so hours 00-07 of the first day belong to a
        // synthetic date one day before any fire-load date.
        let series = build_series(start_at_midnight(), 2, severe);
        let (daily, _) = compute_daily_metrics(&series);

        assert_eq!(daily.len(), 3);
        let leading = &daily[0];
        assert_eq!(
            leading.date,
            chrono::NaiveDate::from_ymd_opt(2020, 7, 31).unwrap()
        );
        assert_eq!(leading.daily_cfl, 0.0);
        assert_eq!(leading.daily_nrd, 8); // hours 00-07, all poor recovery
        assert!(!leading.high_fire_day);
        assert!(leading.poor_recovery_night);
    }

    #[test]
    fn test_cumulative_totals_are_monotone_prefix_sums() {
        let series = build_series(start_at_midnight(), 4, severe);
        let (daily, _) = compute_daily_metrics(&series);

        let mut expected_cfl = 0.0;
        let mut expected_nrd = 0;
        let mut prev_cfl = 0.0;
        for record in &daily {
            expected_cfl += record.daily_cfl;
            expected_nrd += record.daily_nrd;
            assert!((record.cumulative_cfl - expected_cfl).abs() < 1e-9);
            assert_eq!(record.cumulative_nrd, expected_nrd);
            assert!(record.cumulative_cfl >= prev_cfl);
            prev_cfl = record.cumulative_cfl;
        }
    }

    #[test]
    fn test_dates_are_ascending_and_complete() {
        let series = build_series(start_at_midnight(), 5, calm);
        let (daily, _) = compute_daily_metrics(&series);

        for pair in daily.windows(2) {
            assert_eq!(pair[1].date, pair[0].date + TimeDelta::days(1));
        }
    }

    #[test]
    fn test_compound_flag_truth_table() {
        // Dates 1-4 of the run exercise every (high_fire, poor_recovery)
        // combination. A date's night spans its own evening plus the next
        // day's early morning, so both halves are set per date:
        //   date 1: calm day, calm night        -> neither
        //   date 2: hot day, calm night         -> fire only
        //   date 3: calm day, dry night         -> night only
        //   date 4: hot day, dry night          -> both
        let hot_day = (45.0, 10.0, 6.0);
        let calm_air = (15.0, 90.0, 1.0);
        let dry_air = (15.0, 20.0, 1.0);
        let series = build_series(start_at_midnight(), 5, |day, hour| {
            let morning = hour < 8;
            let daytime = (8..20).contains(&hour);
            let evening = hour >= 20;
            let hot = (day == 1 || day == 3) && daytime;
            let dry_night = (day == 2 && evening)
                || (day == 3 && (morning || evening))
                || (day == 4 && morning);
            if hot {
                hot_day
            } else if dry_night {
                dry_air
            } else {
                calm_air
            }
        });
        let (daily, _) = compute_daily_metrics(&series);
        assert_eq!(daily.len(), 6);

        // Skip the synthetic leading date; inspect dates 1-4
        let by_day: Vec<&DailyRecord> = daily.iter().skip(1).take(4).collect();
        assert!(!by_day[0].high_fire_day && !by_day[0].poor_recovery_night);
        assert!(by_day[1].high_fire_day && !by_day[1].poor_recovery_night);
        assert!(!by_day[2].high_fire_day && by_day[2].poor_recovery_night);
        assert!(by_day[3].high_fire_day && by_day[3].poor_recovery_night);

        for record in &by_day {
            assert_eq!(
                record.compound,
                record.high_fire_day && record.poor_recovery_night,
                "compound must equal the conjunction on {}",
                record.date
            );
        }
    }

    #[test]
    fn test_sustained_severe_conditions_reach_failure() {
        let series = build_series(start_at_midnight(), 6, severe);
        let (daily, _) = compute_daily_metrics(&series);

        // severe(): 12 daytime hours of EFW 45+3-2=46 -> 26 load each -> 312,
        // already past the failure fire-load threshold on the first full day.
        let first_full_day = &daily[1];
        assert!(first_full_day.daily_cfl > 120.0);
        assert_eq!(first_full_day.risk_state, RiskState::Failure);

        // Compound streak grows day over day; the final date only holds the
        // evening half of its night (4 deficit hours), so check the last
        // fully-covered date.
        let last_full = &daily[daily.len() - 2];
        assert!(last_full.consecutive_compound_cycles >= 4);
    }

    #[test]
    fn test_calm_conditions_stay_stable() {
        let series = build_series(start_at_midnight(), 3, calm);
        let (daily, _) = compute_daily_metrics(&series);

        for record in &daily {
            assert_eq!(record.risk_state, RiskState::Stable);
            assert_eq!(record.risk_multiplier, 1.0);
            assert_eq!(record.consecutive_compound_cycles, 0);
        }
    }

    #[test]
    fn test_pipeline_is_deterministic() {
        let series = build_series(start_at_midnight(), 3, severe);
        let (daily_a, efw_a) = compute_daily_metrics(&series);
        let (daily_b, efw_b) = compute_daily_metrics(&series);
        assert_eq!(daily_a, daily_b);
        assert_eq!(efw_a, efw_b);
    }
}
