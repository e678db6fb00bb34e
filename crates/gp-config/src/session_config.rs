use crate::{ConfigError, ConfigErrorResult, DEFAULT_STORAGE_DIR, DEFAULT_STORAGE_KEY};

use std::path::Path;

use serde::Deserialize;

/// Where the login session is kept between runs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Name of the record holding the logged-in identity
    pub storage_key: String,
    /// Directory for session records, relative to the config dir
    pub storage_dir: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: String::from(DEFAULT_STORAGE_KEY),
            storage_dir: String::from(DEFAULT_STORAGE_DIR),
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let key_ok = !self.storage_key.is_empty()
            && self
                .storage_key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-'));

        if !key_ok {
            return Err(ConfigError::session(format!(
                "session.storage_key may only contain letters, digits, '_' and '-', got '{}'",
                self.storage_key
            )));
        }

        if Path::new(&self.storage_dir).is_absolute() || self.storage_dir.contains("..") {
            return Err(ConfigError::session(
                "session.storage_dir must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }
}
