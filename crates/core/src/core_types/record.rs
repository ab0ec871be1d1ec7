//! Input and output records of the daily metrics engine
//!
//! `HourlyRecord` is the validated upstream input (one per hour-aligned
//! timestamp); `DailyRecord` is the fully-derived per-date output handed
//! immutably to downstream consumers. Both are plain owned data and safe to
//! read concurrently by multiple renderers.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::units::{Celsius, MetersPerSecond, Millimeters, Percent};
use crate::risk::RiskState;

/// One hour of fire-weather observations.
///
/// The metrics engine assumes the upstream contract: strictly ascending,
/// duplicate-free, uniformly hourly-spaced timestamps, `rh` within [0, 100],
/// non-negative wind and precipitation. `precip_mm` and the optional indices
/// are carried for upstream extensibility and unused by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyRecord {
    /// Hour-aligned observation instant (naive UTC)
    pub timestamp: NaiveDateTime,
    /// Air temperature
    pub temp_c: Celsius,
    /// Relative humidity (0-100)
    pub rh: Percent,
    /// Wind speed
    pub wind_speed_ms: MetersPerSecond,
    /// Precipitation over the hour
    pub precip_mm: Millimeters,
    /// Optional upstream fuel dryness index (0-1)
    #[serde(default)]
    pub fuel_dryness_index: Option<f64>,
    /// Optional upstream vegetation type index (0-1)
    #[serde(default)]
    pub vegetation_type_index: Option<f64>,
}

impl HourlyRecord {
    /// Create a record with only the fields the engine reads; optional
    /// upstream indices are left empty.
    #[must_use]
    pub fn new(
        timestamp: NaiveDateTime,
        temp_c: Celsius,
        rh: Percent,
        wind_speed_ms: MetersPerSecond,
        precip_mm: Millimeters,
    ) -> Self {
        Self {
            timestamp,
            temp_c,
            rh,
            wind_speed_ms,
            precip_mm,
            fuel_dryness_index: None,
            vegetation_type_index: None,
        }
    }
}

/// One calendar date of derived metrics and risk classification.
///
/// Field order matches the stable column order of the exported daily table;
/// the serde renames keep the exported headers identical to the metric names
/// used throughout (`daily_CFL`, `daily_NRD`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    /// Calendar date this row describes
    pub date: chrono::NaiveDate,
    /// Fire load accumulated over this calendar day (>= 0)
    #[serde(rename = "daily_CFL")]
    pub daily_cfl: f64,
    /// Running fire-load total, non-decreasing across dates
    #[serde(rename = "cumulative_CFL")]
    pub cumulative_cfl: f64,
    /// Poor-recovery hours in this date's night window (0-24)
    #[serde(rename = "daily_NRD")]
    pub daily_nrd: u32,
    /// Running night-deficit total, non-decreasing across dates
    #[serde(rename = "cumulative_NRD")]
    pub cumulative_nrd: u32,
    /// Day exceeded the high fire-load threshold
    pub high_fire_day: bool,
    /// Night exceeded the poor-recovery threshold
    pub poor_recovery_night: bool,
    /// Both flags held simultaneously
    pub compound: bool,
    /// Consecutive high-fire days ending at this date
    pub consecutive_high_fire_days: u32,
    /// Consecutive poor-recovery nights ending at this date
    pub consecutive_poor_recovery_nights: u32,
    /// Consecutive compound days ending at this date
    pub consecutive_compound_cycles: u32,
    /// Combined escalation scalar (>= 1.0)
    pub risk_multiplier: f64,
    /// Precedence-ordered classification of the day
    pub risk_state: RiskState,
}
