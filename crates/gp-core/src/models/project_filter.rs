use crate::{CoreError, Project, ProjectStatus, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;

/// Dashboard filter over project status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectFilter {
    #[default]
    All,
    Status(ProjectStatus),
}

impl ProjectFilter {
    pub fn matches(&self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Status(status) => project.status == *status,
        }
    }

    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects.iter().filter(|p| self.matches(p)).collect()
    }
}

impl FromStr for ProjectFilter {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }

        ProjectStatus::from_str(s)
            .map(Self::Status)
            .map_err(|_| CoreError::InvalidProjectFilter {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

impl std::fmt::Display for ProjectFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Status(status) => write!(f, "{}", status.as_str().to_ascii_lowercase()),
        }
    }
}
