//! Compound strain flags and consecutive-day streaks
//!
//! Works purely on already-aggregated daily values; it never sees hourly
//! data. The streak scan is the one ordering-dependent step in the whole
//! pipeline: it must consume dates strictly in chronological order, so it is
//! an explicit left fold carrying the previous streak as its accumulator.

use crate::thresholds::{HIGH_FIRE_DAY_CFL, POOR_RECOVERY_NIGHT_NRD};

/// Day exceeded the high fire-load threshold
#[inline]
#[must_use]
pub fn is_high_fire_day(daily_cfl: f64) -> bool {
    daily_cfl > HIGH_FIRE_DAY_CFL
}

/// Night exceeded the poor-recovery threshold
#[inline]
#[must_use]
pub fn is_poor_recovery_night(daily_nrd: u32) -> bool {
    daily_nrd > POOR_RECOVERY_NIGHT_NRD
}

/// Running streak lengths for a chronologically-ordered boolean series.
///
/// Each true day extends the streak by one; the first false day resets it to
/// zero. The streak before the first day is zero. Reset-on-false breaks naive
/// associative summation, so reordering this fold breaks correctness.
#[must_use]
pub fn running_streaks(flags: &[bool]) -> Vec<u32> {
    let mut streaks = Vec::with_capacity(flags.len());
    let mut run = 0u32;
    for &flag in flags {
        run = if flag { run + 1 } else { 0 };
        streaks.push(run);
    }
    streaks
}
