//! Contractual threshold constants for the daily metrics and risk engine
//!
//! These values are exact contractual constants of the risk model, not
//! tunable defaults. The classifier's branches have no gap or overlap at the
//! boundary values: the Failure disjunction and the Stable conjunction are
//! logical complements there, so every day maps to exactly one state.

/// EFW baseline subtracted before fire load accumulates (clamped at zero)
pub const FIRE_LOAD_BASELINE: f64 = 20.0;

/// Relative humidity below which a night hour counts as poor recovery
pub const NIGHT_RECOVERY_RH: f64 = 60.0;

/// Wind speed above which a night hour counts as poor recovery (m/s)
pub const NIGHT_RECOVERY_WIND: f64 = 5.0;

/// First hour of the night window on the evening side (20:00)
pub const NIGHT_WINDOW_START_HOUR: u32 = 20;

/// First hour after the night window on the morning side (08:00)
pub const NIGHT_WINDOW_END_HOUR: u32 = 8;

/// Daily fire load above which a day is flagged high-fire
pub const HIGH_FIRE_DAY_CFL: f64 = 40.0;

/// Nightly deficit hours above which a night is flagged poor-recovery
pub const POOR_RECOVERY_NIGHT_NRD: u32 = 4;

/// Fire-load divisor in the risk multiplier formula
pub const MULTIPLIER_CFL_DIVISOR: f64 = 60.0;

/// Night-deficit divisor in the risk multiplier formula
pub const MULTIPLIER_NRD_DIVISOR: f64 = 4.0;

/// Per-compound-day increment in the risk multiplier formula
pub const MULTIPLIER_COMPOUND_STEP: f64 = 0.5;

/// Stable requires daily fire load strictly below this
pub const STABLE_CFL_LIMIT: f64 = 60.0;

/// Stable requires nightly deficit strictly below this
pub const STABLE_NRD_LIMIT: u32 = 4;

/// Stable requires the compound streak strictly below this
pub const STABLE_COMPOUND_LIMIT: u32 = 2;

/// Failure when daily fire load reaches this
pub const FAILURE_CFL: f64 = 120.0;

/// Failure when nightly deficit reaches this
pub const FAILURE_NRD: u32 = 8;

/// Failure when the compound streak reaches this
pub const FAILURE_COMPOUND_STREAK: u32 = 4;
