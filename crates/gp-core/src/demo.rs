//! Stand-in data for when the projects API is unreachable.

use crate::{CarbonMetric, EcoRating, Project, ProjectStatus};

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

/// Days of history generated per project.
pub const DEMO_METRIC_DAYS: usize = 30;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// The three showcase projects.
pub fn demo_projects(now: DateTime<Utc>) -> Vec<Project> {
    vec![
        demo(
            1,
            "E-commerce Store",
            "https://example-ecommerce.com",
            "E-commerce",
            "Sustainable fashion marketplace with optimized images and lazy loading",
            ProjectStatus::Online,
            EcoRating::APlus,
            now,
        ),
        demo(
            2,
            "Customer Portal",
            "https://portal.example.com",
            "Portal",
            "Client dashboard with real-time analytics and minimal JavaScript",
            ProjectStatus::Maintenance,
            EcoRating::B,
            now,
        ),
        demo(
            3,
            "Marketing Site",
            "https://marketing.example.com",
            "Marketing",
            "Static site with CDN delivery and green hosting infrastructure",
            ProjectStatus::Online,
            EcoRating::A,
            now,
        ),
    ]
}

/// Demo project by id. Unknown ids show the first project.
pub fn demo_project(id: &str, now: DateTime<Utc>) -> Project {
    let mut projects = demo_projects(now);
    let index = projects
        .iter()
        .position(|p| p.id.to_string() == id)
        .unwrap_or(0);
    projects.swap_remove(index)
}

/// A month of daily measurements, newest first.
pub fn demo_metrics<R: Rng + ?Sized>(now: DateTime<Utc>, rng: &mut R) -> Vec<CarbonMetric> {
    (0..DEMO_METRIC_DAYS)
        .map(|days_ago| CarbonMetric {
            id: (DEMO_METRIC_DAYS - days_ago) as i64,
            co2_grams: rng.random_range(0.3..0.7),
            energy_kwh: rng.random_range(0.0004..0.0006),
            page_weight: (rng.random_range(1.5..3.0) * BYTES_PER_MB) as u64,
            cleaner_than_percentage: rng.random_range(65.0..90.0),
            measured_at: now - Duration::days(days_ago as i64),
        })
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn demo(
    id: i64,
    name: &str,
    url: &str,
    project_type: &str,
    description: &str,
    status: ProjectStatus,
    eco_rating: EcoRating,
    now: DateTime<Utc>,
) -> Project {
    Project {
        id,
        name: name.to_string(),
        url: url.to_string(),
        project_type: project_type.to_string(),
        description: Some(description.to_string()),
        status,
        eco_rating,
        created_at: Some(now),
        updated_at: Some(now),
    }
}
