//! Project entity - a client website whose footprint is tracked.

use crate::{EcoRating, ProjectStatus, models::timestamp};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub url: String,
    /// Kind of site, e.g. "E-commerce" or "Portal"
    #[serde(rename = "type", default)]
    pub project_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: ProjectStatus,
    pub eco_rating: EcoRating,
    #[serde(
        default,
        with = "timestamp::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "timestamp::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Project {
    pub fn is_online(&self) -> bool {
        self.status == ProjectStatus::Online
    }
}
