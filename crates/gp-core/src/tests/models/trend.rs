use crate::{CarbonMetric, MetricSummary, TREND_WINDOW, trend};

use chrono::{Duration, TimeZone, Utc};

fn history(days: usize) -> Vec<CarbonMetric> {
    let newest = Utc.with_ymd_and_hms(2024, 10, 18, 12, 0, 0).unwrap();
    (0..days)
        .map(|i| CarbonMetric {
            id: i as i64,
            co2_grams: 0.1 + i as f64 * 0.01,
            energy_kwh: 0.000_456_7,
            page_weight: 3 * 1024 * 1024 / 2,
            cleaner_than_percentage: 71.6,
            measured_at: newest - Duration::days(i as i64),
        })
        .collect()
}

#[test]
fn test_trend_is_oldest_first_and_capped() {
    let metrics = history(40);

    let points = trend(&metrics);

    assert_eq!(points.len(), TREND_WINDOW);
    assert_eq!(points.last().unwrap().date, "Oct 18");
    assert_eq!(points.first().unwrap().date, "Sep 19");
}

#[test]
fn test_trend_rounds_values() {
    let metrics = history(1);

    let points = trend(&metrics);

    assert_eq!(points[0].co2, 0.1);
    assert_eq!(points[0].energy, 0.46);
}

#[test]
fn test_trend_of_empty_history_is_empty() {
    assert!(trend(&[]).is_empty());
}

#[test]
fn test_latest_summary_uses_first_metric() {
    let metrics = history(3);

    let summary = MetricSummary::latest(&metrics).unwrap();

    assert_eq!(summary.co2_grams, 0.1);
    assert_eq!(summary.energy_wh, 0.46);
    assert_eq!(summary.page_weight_mb, 1.5);
    assert_eq!(summary.cleaner_than_percentage, 72.0);
}

#[test]
fn test_latest_summary_of_empty_history_is_none() {
    assert!(MetricSummary::latest(&[]).is_none());
}
