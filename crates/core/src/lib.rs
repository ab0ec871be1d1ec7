//! Wildfire Compound-Risk Daily Metrics Engine
//!
//! Derives a daily risk classification from an hourly fire-weather series,
//! flagging compounding wildfire-stress conditions: high fuel-load
//! accumulation coinciding with poor overnight recovery.
//!
//! The pipeline runs strictly downstream:
//! - Per-hour Effective Fire Weather (EFW) index
//! - Daily fire-load totals (calendar day) and nighttime recovery deficits
//!   (cross-midnight 20:00-08:00 window)
//! - Consecutive-day streak tracking for high-fire, poor-recovery, and
//!   compound days
//! - Risk multiplier and precedence-ordered {Stable, Straining, Failure}
//!   classification
//!
//! `ingest` provides the CSV data source implementing the upstream contract;
//! `report` serializes the output series for downstream renderers.

// Core types and utilities
pub mod core_types;

// Metrics engine
pub mod metrics;
pub mod pipeline;
pub mod risk;
pub mod series;
pub mod thresholds;

// Upstream/downstream collaborators
pub mod ingest;
pub mod report;

// Re-export core types
pub use core_types::{DailyRecord, HourlyRecord};
pub use core_types::{Celsius, MetersPerSecond, Millimeters, Percent};

// Re-export the engine boundary
pub use ingest::{load_hourly_csv, IngestError};
pub use metrics::compute_hourly_efw;
pub use pipeline::compute_daily_metrics;
pub use report::{summary_table, write_daily_csv, write_daily_json, ReportError};
pub use risk::RiskState;
pub use series::{HourlySeries, SeriesError};
