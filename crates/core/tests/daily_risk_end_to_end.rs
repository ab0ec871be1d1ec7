//! End-to-end test: CSV ingestion through the daily pipeline to report export
use fire_risk_core::{
    compute_daily_metrics, load_hourly_csv, summary_table, write_daily_csv, RiskState,
};
use std::fmt::Write as _;
use std::fs;

/// Three days of synthetic hours: one calm day, then two hot days with dry
/// windy nights, written as a CSV the ingest layer must accept.
fn write_sample_csv(path: &std::path::Path) {
    let mut contents = String::from("timestamp,temp_c,rh,wind_speed_ms,precip_mm\n");
    for day in 1..=3 {
        for hour in 0..24 {
            // Dry windy nights start with day 2's evening; day 2's early
            // morning still belongs to calm day 1's night.
            let hot_daytime = day >= 2 && (8..20).contains(&hour);
            let poor_night =
                (day == 2 && hour >= 20) || (day == 3 && !(8..20).contains(&hour));
            let (temp, rh, wind) = if hot_daytime {
                (44.0, 12.0, 5.0)
            } else if poor_night {
                (28.0, 25.0, 6.0)
            } else {
                (16.0, 85.0, 1.0)
            };
            let _ = writeln!(
                contents,
                "2020-08-{day:02}T{hour:02}:00:00,{temp},{rh},{wind},0.0"
            );
        }
    }
    fs::write(path, contents).unwrap();
}

#[test]
fn test_csv_to_daily_risk_series() {
    let dir = std::env::temp_dir();
    let input = dir.join(format!("fire-risk-e2e-{}.csv", std::process::id()));
    let output = dir.join(format!("fire-risk-e2e-{}-daily.csv", std::process::id()));
    write_sample_csv(&input);

    let series = load_hourly_csv(&input).unwrap();
    assert_eq!(series.len(), 72);

    let (daily, efw) = compute_daily_metrics(&series);
    assert_eq!(efw.len(), 72);

    // Aug 1 starts at 00:00, so its morning hours open a synthetic Jul 31
    // record; Aug 1-3 follow.
    assert_eq!(daily.len(), 4);
    assert_eq!(daily[0].daily_cfl, 0.0);

    // Calm day stays stable, hot days escalate
    assert_eq!(daily[1].risk_state, RiskState::Stable);
    assert!(daily[2].daily_cfl > 120.0);
    assert_eq!(daily[2].risk_state, RiskState::Failure);
    assert_eq!(daily[3].risk_state, RiskState::Failure);

    // Cumulative totals stay monotone across the whole reconciled range
    for pair in daily.windows(2) {
        assert!(pair[1].cumulative_cfl >= pair[0].cumulative_cfl);
        assert!(pair[1].cumulative_nrd >= pair[0].cumulative_nrd);
    }

    // Export surface accepts the series and renders one line per date
    write_daily_csv(&output, &daily).unwrap();
    let exported = fs::read_to_string(&output).unwrap();
    assert_eq!(exported.lines().count(), daily.len() + 1);

    let table = summary_table(&daily);
    assert_eq!(table.lines().count(), daily.len() + 1);

    let _ = fs::remove_file(&input);
    let _ = fs::remove_file(&output);
}
