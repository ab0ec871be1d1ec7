//! Core types and utilities

pub mod record;
pub mod units;

pub use record::{DailyRecord, HourlyRecord};
pub use units::*;
