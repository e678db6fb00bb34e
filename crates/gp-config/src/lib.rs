mod api_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod session_config;

pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use session_config::SessionConfig;

#[cfg(test)]
mod tests;

pub const CONFIG_DIR_ENV: &str = "GP_CONFIG_DIR";
pub const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR_NAME: &str = "greenport";

const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";
const DEFAULT_API_TIMEOUT_SECS: u64 = 10;
const MIN_API_TIMEOUT_SECS: u64 = 1;
const MAX_API_TIMEOUT_SECS: u64 = 300;
const DEFAULT_DEMO_FALLBACK: bool = true;

const DEFAULT_STORAGE_KEY: &str = "greenport_user";
const DEFAULT_STORAGE_DIR: &str = "session";

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_COLORED: bool = true;
