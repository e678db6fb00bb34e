mod carbon_metric;
mod eco_rating;
mod project;
mod project_filter;
mod project_status;
mod trend;
