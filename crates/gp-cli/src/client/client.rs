use crate::{CliClientResult, ClientError};

use gp_core::{CarbonMetric, Project};

use std::time::Duration;

use log::debug;
use reqwest::{Client as ReqwestClient, Method};
use serde::de::DeserializeOwned;

/// HTTP client for the projects REST API
pub struct Client {
    pub base_url: String,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - API root including the `/api` prefix (e.g., "http://localhost:8080/api")
    /// * `timeout` - Per-request timeout
    pub fn new(base_url: &str, timeout: Duration) -> CliClientResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("{method} {url}");
        self.client.request(method, &url)
    }

    /// Execute request and decode the JSON body
    async fn execute<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> CliClientResult<T> {
        let response = req.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = if body.trim().is_empty() {
                status.canonical_reason().unwrap_or("Unknown error").to_string()
            } else {
                body
            };
            return Err(ClientError::api_error(status.as_u16(), message));
        }

        Ok(serde_json::from_str(&body)?)
    }

    // =========================================================================
    // Project Operations
    // =========================================================================

    /// List all projects
    pub async fn list_projects(&self) -> CliClientResult<Vec<Project>> {
        let req = self.request(Method::GET, "/projects");
        self.execute(req).await
    }

    /// Get a project by ID
    pub async fn get_project(&self, id: &str) -> CliClientResult<Project> {
        let req = self.request(Method::GET, &format!("/projects/{}", id));
        self.execute(req).await
    }

    // =========================================================================
    // Metric Operations
    // =========================================================================

    /// Measurement history of a project, newest first
    pub async fn get_project_metrics(&self, id: &str) -> CliClientResult<Vec<CarbonMetric>> {
        let req = self.request(Method::GET, &format!("/projects/{}/metrics", id));
        self.execute(req).await
    }

    /// Ask the server to take a fresh measurement now
    pub async fn refresh_metrics(&self, id: &str) -> CliClientResult<CarbonMetric> {
        let req = self.request(Method::POST, &format!("/projects/{}/metrics", id));
        self.execute(req).await
    }
}
