use error_location::ErrorLocation;

use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid project status: {value} {location}")]
    InvalidProjectStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid eco rating: {value} {location}")]
    InvalidEcoRating {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid project filter: {value} {location}")]
    InvalidProjectFilter {
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
