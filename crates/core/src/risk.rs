//! Risk multiplier and precedence-ordered risk classification
//!
//! Both are pure per-day functions of `(daily_CFL, daily_NRD,
//! consecutive_compound_cycles)` with no transition memory beyond the streak
//! counters already computed upstream.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::thresholds::{
    FAILURE_CFL, FAILURE_COMPOUND_STREAK, FAILURE_NRD, MULTIPLIER_CFL_DIVISOR,
    MULTIPLIER_COMPOUND_STEP, MULTIPLIER_NRD_DIVISOR, STABLE_CFL_LIMIT, STABLE_COMPOUND_LIMIT,
    STABLE_NRD_LIMIT,
};

/// Daily risk classification, ordered by severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskState {
    /// All metrics clearly below strain thresholds
    Stable,
    /// Neither clearly stable nor in failure
    Straining,
    /// Any single failure threshold reached
    Failure,
}

impl RiskState {
    /// Stable string form used in reports
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            RiskState::Stable => "Stable",
            RiskState::Straining => "Straining",
            RiskState::Failure => "Failure",
        }
    }
}

impl fmt::Display for RiskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Combined escalation scalar for a day.
///
/// `1.0 + CFL/60 + NRD/4 + compound_streak * 0.5` — monotonically
/// non-decreasing in each input, minimum 1.0 when all inputs are zero.
#[inline]
#[must_use]
pub fn risk_multiplier(daily_cfl: f64, daily_nrd: u32, compound_streak: u32) -> f64 {
    1.0 + daily_cfl / MULTIPLIER_CFL_DIVISOR
        + f64::from(daily_nrd) / MULTIPLIER_NRD_DIVISOR
        + f64::from(compound_streak) * MULTIPLIER_COMPOUND_STEP
}

/// Classify a day's combined metrics.
///
/// Precedence is a first-class contract: Failure's disjunction is checked
/// first and short-circuits; Stable requires all three metrics strictly below
/// their limits; everything else is Straining. The branches have no gap or
/// overlap at the boundary values.
#[must_use]
pub fn classify(daily_cfl: f64, daily_nrd: u32, compound_streak: u32) -> RiskState {
    if daily_cfl >= FAILURE_CFL
        || daily_nrd >= FAILURE_NRD
        || compound_streak >= FAILURE_COMPOUND_STREAK
    {
        RiskState::Failure
    } else if daily_cfl < STABLE_CFL_LIMIT
        && daily_nrd < STABLE_NRD_LIMIT
        && compound_streak < STABLE_COMPOUND_LIMIT
    {
        RiskState::Stable
    } else {
        RiskState::Straining
    }
}
