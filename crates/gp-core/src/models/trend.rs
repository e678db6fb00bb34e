//! Chart-ready views over a project's metric history.

use crate::CarbonMetric;

use serde::Serialize;

/// Number of measurements shown on the trend chart.
pub const TREND_WINDOW: usize = 30;

const TREND_DATE_FORMAT: &str = "%b %-d";

/// One point on the CO₂ trend chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    /// Short label, e.g. "Oct 18"
    pub date: String,
    /// Grams CO₂, 3 decimals
    pub co2: f64,
    /// Watt-hours, 2 decimals
    pub energy: f64,
}

/// Builds the trend series from a newest-first history.
///
/// Keeps the newest [`TREND_WINDOW`] measurements and orders them oldest to
/// newest, the way the chart reads left to right.
pub fn trend(metrics: &[CarbonMetric]) -> Vec<TrendPoint> {
    metrics
        .iter()
        .take(TREND_WINDOW)
        .rev()
        .map(|metric| TrendPoint {
            date: metric.measured_at.format(TREND_DATE_FORMAT).to_string(),
            co2: round_to(metric.co2_grams, 3),
            energy: round_to(metric.energy_wh(), 2),
        })
        .collect()
}

/// Headline numbers for the latest measurement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricSummary {
    pub co2_grams: f64,
    pub energy_wh: f64,
    pub page_weight_mb: f64,
    pub cleaner_than_percentage: f64,
}

impl MetricSummary {
    /// Summary of the first (newest) metric, `None` when there is no history.
    pub fn latest(metrics: &[CarbonMetric]) -> Option<Self> {
        metrics.first().map(|metric| Self {
            co2_grams: round_to(metric.co2_grams, 3),
            energy_wh: round_to(metric.energy_wh(), 2),
            page_weight_mb: round_to(metric.page_weight_mb(), 2),
            cleaner_than_percentage: metric.cleaner_than_percentage.round(),
        })
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
