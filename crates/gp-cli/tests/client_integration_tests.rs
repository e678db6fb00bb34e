//! Integration tests for the API client using wiremock mock server

use gp_cli::Client;
use gp_core::{EcoRating, ProjectStatus};

use std::time::Duration;

use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

fn client_for(server: &MockServer) -> Client {
    Client::new(&format!("{}/api", server.uri()), Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_list_projects_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 1,
                "name": "E-commerce Store",
                "url": "https://shop.example.com",
                "type": "E-commerce",
                "description": "Main online store",
                "status": "ONLINE",
                "ecoRating": "A_PLUS",
                "createdAt": "2024-01-15T10:30:00",
                "updatedAt": "2024-02-01T08:00:00"
            },
            {
                "id": 2,
                "name": "Customer Portal",
                "url": "https://portal.example.com",
                "type": "Portal",
                "status": "MAINTENANCE",
                "ecoRating": "B"
            }
        ])))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let projects = client.list_projects().await.unwrap();

    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].name, "E-commerce Store");
    assert_eq!(projects[0].eco_rating, EcoRating::APlus);
    assert!(projects[0].created_at.is_some());
    assert_eq!(projects[1].status, ProjectStatus::Maintenance);
    assert!(projects[1].description.is_none());
}

#[tokio::test]
async fn test_get_project_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/projects/99"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.get_project("99").await;

    let err = result.unwrap_err();
    assert!(err.is_not_found());
    assert!(err.to_string().contains("404"));
}

#[tokio::test]
async fn test_get_project_metrics_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/projects/1/metrics"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 11,
                "co2Grams": 0.42,
                "energyKwh": 0.00051,
                "pageWeight": 2097152,
                "cleanerThanPercentage": 78.5,
                "measuredAt": "2024-03-02T12:00:00Z"
            },
            {
                "id": 10,
                "co2Grams": 0.55,
                "energyKwh": 0.00058,
                "pageWeight": 2621440,
                "cleanerThanPercentage": 70.0,
                "measuredAt": "2024-03-01T12:00:00"
            }
        ])))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let metrics = client.get_project_metrics("1").await.unwrap();

    assert_eq!(metrics.len(), 2);
    assert_eq!(metrics[0].id, 11);
    assert_eq!(metrics[0].page_weight, 2_097_152);
    assert!(metrics[0].measured_at > metrics[1].measured_at);
}

#[tokio::test]
async fn test_refresh_metrics_posts() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/projects/3/metrics"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 40,
            "co2Grams": 0.31,
            "energyKwh": 0.00044,
            "pageWeight": 1572864,
            "cleanerThanPercentage": 88.0,
            "measuredAt": "2024-03-03T09:15:00Z"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let metric = client.refresh_metrics("3").await.unwrap();

    assert_eq!(metric.id, 40);
    assert_eq!(metric.eco_rating(), EcoRating::B);
}

#[tokio::test]
async fn test_server_error_keeps_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/projects"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database unavailable"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.list_projects().await.unwrap_err();

    assert!(!err.is_not_found());
    assert!(err.to_string().contains("database unavailable"));
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn test_invalid_json_is_reported() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.list_projects().await.unwrap_err();

    assert!(err.to_string().contains("JSON parse error"));
}
