pub mod carbon_metric;
pub mod eco_rating;
pub mod project;
pub mod project_filter;
pub mod project_status;
pub mod timestamp;
pub mod trend;
