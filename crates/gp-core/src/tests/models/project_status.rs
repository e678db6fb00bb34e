use crate::ProjectStatus;

use std::str::FromStr;

#[test]
fn test_project_status_as_str() {
    assert_eq!(ProjectStatus::Online.as_str(), "ONLINE");
    assert_eq!(ProjectStatus::Maintenance.as_str(), "MAINTENANCE");
    assert_eq!(ProjectStatus::Offline.as_str(), "OFFLINE");
    assert_eq!(ProjectStatus::Development.as_str(), "DEVELOPMENT");
}

#[test]
fn test_project_status_from_str_is_case_insensitive() {
    assert_eq!(
        ProjectStatus::from_str("online").unwrap(),
        ProjectStatus::Online
    );
    assert_eq!(
        ProjectStatus::from_str("MAINTENANCE").unwrap(),
        ProjectStatus::Maintenance
    );
    assert!(ProjectStatus::from_str("archived").is_err());
}

#[test]
fn test_project_status_default() {
    assert_eq!(ProjectStatus::default(), ProjectStatus::Online);
}
