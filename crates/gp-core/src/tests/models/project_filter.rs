use crate::demo::demo_projects;
use crate::{ProjectFilter, ProjectStatus};

use std::str::FromStr;

use chrono::Utc;

#[test]
fn test_filter_all_keeps_everything() {
    let projects = demo_projects(Utc::now());
    assert_eq!(ProjectFilter::All.apply(&projects).len(), 3);
}

#[test]
fn test_filter_by_status() {
    let projects = demo_projects(Utc::now());

    let online = ProjectFilter::Status(ProjectStatus::Online).apply(&projects);
    let maintenance = ProjectFilter::Status(ProjectStatus::Maintenance).apply(&projects);
    let offline = ProjectFilter::Status(ProjectStatus::Offline).apply(&projects);

    assert_eq!(online.len(), 2);
    assert_eq!(maintenance.len(), 1);
    assert_eq!(maintenance[0].name, "Customer Portal");
    assert!(offline.is_empty());
}

#[test]
fn test_filter_from_str() {
    assert_eq!(ProjectFilter::from_str("all").unwrap(), ProjectFilter::All);
    assert_eq!(
        ProjectFilter::from_str("Online").unwrap(),
        ProjectFilter::Status(ProjectStatus::Online)
    );
    assert!(ProjectFilter::from_str("archived").is_err());
}

#[test]
fn test_filter_display() {
    assert_eq!(ProjectFilter::All.to_string(), "all");
    assert_eq!(
        ProjectFilter::Status(ProjectStatus::Maintenance).to_string(),
        "maintenance"
    );
}
