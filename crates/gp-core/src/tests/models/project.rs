use crate::{EcoRating, Project, ProjectStatus};

use chrono::{TimeZone, Utc};

#[test]
fn test_project_deserializes_api_payload() {
    let json = r#"{
        "id": 7,
        "name": "Green Shop",
        "url": "https://green.example.com",
        "type": "E-commerce Store",
        "status": "DEVELOPMENT",
        "ecoRating": "A_PLUS",
        "createdAt": "2024-06-10T08:30:00.123",
        "updatedAt": "2024-06-11T09:00:00"
    }"#;

    let project: Project = serde_json::from_str(json).unwrap();

    assert_eq!(project.id, 7);
    assert_eq!(project.project_type, "E-commerce Store");
    assert_eq!(project.status, ProjectStatus::Development);
    assert_eq!(project.eco_rating, EcoRating::APlus);
    assert!(project.description.is_none());
    assert_eq!(
        project.updated_at,
        Some(Utc.with_ymd_and_hms(2024, 6, 11, 9, 0, 0).unwrap())
    );
}

#[test]
fn test_project_without_type_or_dates_deserializes() {
    let json = r#"{"id":1,"name":"n","url":"u","status":"ONLINE","ecoRating":"B"}"#;

    let project: Project = serde_json::from_str(json).unwrap();

    assert_eq!(project.project_type, "");
    assert!(project.created_at.is_none());
    assert!(project.is_online());
}

#[test]
fn test_project_serializes_camel_case() {
    let json = r#"{"id":1,"name":"n","url":"u","status":"ONLINE","ecoRating":"B",
        "createdAt":"2024-01-01T00:00:00Z"}"#;
    let project: Project = serde_json::from_str(json).unwrap();

    let value = serde_json::to_value(&project).unwrap();

    assert_eq!(value["ecoRating"], "B");
    assert_eq!(value["createdAt"], "2024-01-01T00:00:00+00:00");
    assert!(value.get("updatedAt").is_none());
    assert!(value.get("eco_rating").is_none());
}

#[test]
fn test_project_with_bad_timestamp_fails() {
    let json = r#"{"id":1,"name":"n","url":"u","status":"ONLINE","ecoRating":"B",
        "createdAt":"yesterday"}"#;
    assert!(serde_json::from_str::<Project>(json).is_err());
}
