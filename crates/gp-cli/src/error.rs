use crate::ClientError;

use gp_config::ConfigError;
use gp_core::CoreError;
use gp_session::SessionError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("Login required to open {requested} {location}")]
    LoginRequired {
        requested: String,
        location: ErrorLocation,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("Failed to render output: {source}")]
    Output {
        #[source]
        source: serde_json::Error,
    },
}

impl CliError {
    #[track_caller]
    pub fn login_required(requested: impl Into<String>) -> Self {
        Self::LoginRequired {
            requested: requested.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// What the user can do about it, if there is something.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::LoginRequired { .. } => Some(
                "Log in first: `greenport login --email <email> --password <password>` \
                 or `greenport guest`",
            ),
            Self::Session(e) => Some(e.recovery_hint()),
            Self::Client(e) if e.is_not_found() => Some("Check the project id"),
            Self::Client(_) => Some("Check that the API is running or pass --api <url>"),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(source: serde_json::Error) -> Self {
        Self::Output { source }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
