//! Project data for the dashboard views, with demo data standing in when
//! the API is down.

use crate::{CliClientResult, Client};

use gp_core::demo::{demo_metrics, demo_project, demo_projects};
use gp_core::{CarbonMetric, Project};

use chrono::Utc;
use log::warn;
use serde::Serialize;

/// Where the data shown came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    Api,
    Demo,
}

#[derive(Debug, Clone)]
pub struct ProjectListing {
    pub source: DataSource,
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone)]
pub struct ProjectDetail {
    pub source: DataSource,
    pub project: Project,
    /// Newest first
    pub metrics: Vec<CarbonMetric>,
}

pub struct Dashboard {
    client: Client,
    demo_fallback: bool,
}

impl Dashboard {
    pub fn new(client: Client, demo_fallback: bool) -> Self {
        Self {
            client,
            demo_fallback,
        }
    }

    /// All projects, or the demo set if the API call fails and fallback is on.
    pub async fn load_projects(&self) -> CliClientResult<ProjectListing> {
        match self.client.list_projects().await {
            Ok(projects) => Ok(ProjectListing {
                source: DataSource::Api,
                projects,
            }),
            Err(e) if self.demo_fallback => {
                warn!("Error fetching projects, showing demo data: {e}");
                Ok(ProjectListing {
                    source: DataSource::Demo,
                    projects: demo_projects(Utc::now()),
                })
            }
            Err(e) => Err(e),
        }
    }

    /// A project and its metric history, fetched together. If either call
    /// fails the whole view switches to demo data.
    pub async fn load_project_detail(&self, id: &str) -> CliClientResult<ProjectDetail> {
        let fetched = tokio::try_join!(
            self.client.get_project(id),
            self.client.get_project_metrics(id)
        );

        match fetched {
            Ok((project, metrics)) => Ok(ProjectDetail {
                source: DataSource::Api,
                project,
                metrics,
            }),
            Err(e) if self.demo_fallback => {
                warn!("Error fetching project {id}, showing demo data: {e}");
                let now = Utc::now();
                Ok(ProjectDetail {
                    source: DataSource::Demo,
                    project: demo_project(id, now),
                    metrics: demo_metrics(now, &mut rand::rng()),
                })
            }
            Err(e) => Err(e),
        }
    }

    /// Triggers a new measurement. Never falls back: there is nothing to
    /// refresh in demo mode.
    pub async fn refresh_metrics(&self, id: &str) -> CliClientResult<CarbonMetric> {
        self.client.refresh_metrics(id).await
    }
}
