use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Operational state of a monitored site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    #[default]
    Online,
    Maintenance,
    Offline,
    Development,
}

impl ProjectStatus {
    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Online => "ONLINE",
            Self::Maintenance => "MAINTENANCE",
            Self::Offline => "OFFLINE",
            Self::Development => "DEVELOPMENT",
        }
    }
}

impl FromStr for ProjectStatus {
    type Err = CoreError;

    /// Case-insensitive, so both `ONLINE` and `online` parse.
    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s.to_ascii_uppercase().as_str() {
            "ONLINE" => Ok(Self::Online),
            "MAINTENANCE" => Ok(Self::Maintenance),
            "OFFLINE" => Ok(Self::Offline),
            "DEVELOPMENT" => Ok(Self::Development),
            _ => Err(CoreError::InvalidProjectStatus {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
