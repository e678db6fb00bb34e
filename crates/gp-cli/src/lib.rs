//! gp-cli library
//!
//! The command runner, API client and dashboard data layer behind the
//! `greenport` binary, exported for integration tests.

pub mod app;
pub mod cli;
pub mod client;
pub mod commands;
pub mod dashboard;
pub mod error;
pub mod logger;

#[cfg(test)]
mod tests;

pub use app::{App, OPTIMIZATION_TIPS};
pub use cli::Cli;
pub use client::{CliClientResult, Client, ClientError};
pub use commands::Commands;
pub use dashboard::{DataSource, Dashboard, ProjectDetail, ProjectListing};
pub use error::{CliError, Result as CliResult};
