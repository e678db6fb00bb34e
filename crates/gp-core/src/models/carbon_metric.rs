//! One footprint measurement of a project.

use crate::{EcoRating, models::timestamp};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;
const WH_PER_KWH: f64 = 1000.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarbonMetric {
    pub id: i64,
    /// Grams of CO₂ per page view
    pub co2_grams: f64,
    /// Energy per page view
    pub energy_kwh: f64,
    /// Transferred bytes
    pub page_weight: u64,
    /// Share of measured websites this one beats
    pub cleaner_than_percentage: f64,
    #[serde(with = "timestamp")]
    pub measured_at: DateTime<Utc>,
}

impl CarbonMetric {
    pub fn energy_wh(&self) -> f64 {
        self.energy_kwh * WH_PER_KWH
    }

    pub fn page_weight_mb(&self) -> f64 {
        self.page_weight as f64 / BYTES_PER_MB
    }

    pub fn eco_rating(&self) -> EcoRating {
        EcoRating::from_co2(self.co2_grams)
    }
}
