pub mod demo;
pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::carbon_metric::CarbonMetric;
pub use models::eco_rating::EcoRating;
pub use models::project::Project;
pub use models::project_filter::ProjectFilter;
pub use models::project_status::ProjectStatus;
pub use models::trend::{MetricSummary, TREND_WINDOW, TrendPoint, trend};

#[cfg(test)]
mod tests;
