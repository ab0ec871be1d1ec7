//! Per-hour and per-day metric calculations
//!
//! Leaf-first: the EFW index maps each hour, the fire-load and night-recovery
//! aggregators reduce hours into daily totals, and the strain module derives
//! flags and streaks from those totals.

pub mod efw;
pub mod fire_load;
pub mod night_recovery;
pub mod strain;

pub use efw::compute_hourly_efw;
pub use night_recovery::night_bucket_date;
pub use strain::running_streaks;
