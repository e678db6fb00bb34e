//! Demo-data fallback of the dashboard data layer

use gp_cli::{Client, Dashboard, DataSource};
use gp_core::demo::DEMO_METRIC_DAYS;

use std::time::Duration;

use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

fn dashboard_for(server: &MockServer, demo_fallback: bool) -> Dashboard {
    let client = Client::new(&format!("{}/api", server.uri()), Duration::from_secs(5)).unwrap();
    Dashboard::new(client, demo_fallback)
}

async fn failing_server() -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    mock_server
}

#[tokio::test]
async fn given_api_up_when_loading_projects_then_source_is_api() {
    // Given
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 5,
                "name": "Docs",
                "url": "https://docs.example.com",
                "type": "Documentation",
                "status": "DEVELOPMENT",
                "ecoRating": "C"
            }
        ])))
        .mount(&mock_server)
        .await;
    let dashboard = dashboard_for(&mock_server, true);

    // When
    let listing = dashboard.load_projects().await.unwrap();

    // Then
    assert_eq!(listing.source, DataSource::Api);
    assert_eq!(listing.projects.len(), 1);
    assert_eq!(listing.projects[0].name, "Docs");
}

#[tokio::test]
async fn given_api_failing_when_loading_projects_then_demo_projects_are_shown() {
    // Given
    let mock_server = failing_server().await;
    let dashboard = dashboard_for(&mock_server, true);

    // When
    let listing = dashboard.load_projects().await.unwrap();

    // Then
    assert_eq!(listing.source, DataSource::Demo);
    assert_eq!(listing.projects.len(), 3);
    assert_eq!(listing.projects[0].name, "E-commerce Store");
}

#[tokio::test]
async fn given_api_failing_and_fallback_off_when_loading_projects_then_error() {
    // Given
    let mock_server = failing_server().await;
    let dashboard = dashboard_for(&mock_server, false);

    // When
    let result = dashboard.load_projects().await;

    // Then
    assert!(result.is_err());
}

#[tokio::test]
async fn given_metrics_call_failing_when_loading_detail_then_whole_view_is_demo() {
    // Given
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/projects/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 2,
            "name": "Real Portal",
            "url": "https://portal.example.com",
            "status": "ONLINE",
            "ecoRating": "A"
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/projects/2/metrics"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;
    let dashboard = dashboard_for(&mock_server, true);

    // When
    let detail = dashboard.load_project_detail("2").await.unwrap();

    // Then
    assert_eq!(detail.source, DataSource::Demo);
    assert_eq!(detail.project.name, "Customer Portal");
    assert_eq!(detail.metrics.len(), DEMO_METRIC_DAYS);
}

#[tokio::test]
async fn given_api_failing_when_refreshing_then_error_even_with_fallback() {
    // Given
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;
    let dashboard = dashboard_for(&mock_server, true);

    // When
    let result = dashboard.refresh_metrics("1").await;

    // Then
    assert!(result.is_err());
}
