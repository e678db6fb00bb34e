use crate::{Result as SessionResult, SessionError};

use std::str::FromStr;

/// Navigable destinations of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/`
    Landing,
    /// `/login`, where unauthenticated visitors are sent
    Login,
    /// `/dashboard`, the project list
    Dashboard,
    /// `/project/:id`, metrics and trend for one project
    ProjectDetail { id: String },
}

impl Route {
    /// Detail route for a project id. The id must be one non-empty path
    /// segment.
    #[track_caller]
    pub fn project(id: &str) -> SessionResult<Self> {
        if id.is_empty() || id.contains('/') || id == "." || id == ".." {
            return Err(SessionError::unknown_route(format!("/project/{id}")));
        }
        Ok(Self::ProjectDetail { id: id.to_string() })
    }

    /// Whether reaching this route requires an authenticated session.
    pub fn is_protected(&self) -> bool {
        matches!(self, Self::Dashboard | Self::ProjectDetail { .. })
    }

    pub fn path(&self) -> String {
        match self {
            Self::Landing => "/".to_string(),
            Self::Login => "/login".to_string(),
            Self::Dashboard => "/dashboard".to_string(),
            Self::ProjectDetail { id } => format!("/project/{id}"),
        }
    }
}

impl FromStr for Route {
    type Err = SessionError;

    #[track_caller]
    fn from_str(s: &str) -> SessionResult<Self> {
        let trimmed = s.trim();
        let path = trimmed.trim_end_matches('/');

        match path {
            "" => Ok(Self::Landing),
            "/login" => Ok(Self::Login),
            "/dashboard" => Ok(Self::Dashboard),
            _ => match path.strip_prefix("/project/") {
                Some(id) => Self::project(id),
                None => Err(SessionError::unknown_route(trimmed)),
            },
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}
