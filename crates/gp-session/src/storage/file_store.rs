use crate::{DurableStore, Result as SessionResult, SessionError};

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};

const FILE_EXTENSION: &str = "json";

/// Stores each key as `<dir>/<key>.json`.
///
/// Writes go through a temp file, fsync, then an atomic rename so a crash
/// mid-write never leaves a half-written record behind.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// The directory is created lazily on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`.
    ///
    /// Keys are plain names; anything that could escape the directory is
    /// rejected.
    #[track_caller]
    pub fn path_for(&self, key: &str) -> SessionResult<PathBuf> {
        let is_plain = !key.is_empty()
            && !key.contains("..")
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));

        if !is_plain {
            return Err(SessionError::storage(
                key,
                "keys may only contain letters, digits, '_', '-' and '.'",
            ));
        }

        Ok(self.dir.join(format!("{key}.{FILE_EXTENSION}")))
    }
}

impl DurableStore for FileStore {
    fn get(&self, key: &str) -> SessionResult<Option<String>> {
        let path = self.path_for(key)?;

        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No stored value for '{key}' at {path:?}");
                Ok(None)
            }
            Err(e) => Err(SessionError::io(path, e)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> SessionResult<()> {
        let final_path = self.path_for(key)?;

        fs::create_dir_all(&self.dir).map_err(|e| SessionError::io(self.dir.clone(), e))?;

        let temp_path = self.dir.join(format!(
            "{key}.{FILE_EXTENSION}.tmp.{}",
            std::process::id()
        ));

        {
            let mut file =
                fs::File::create(&temp_path).map_err(|e| SessionError::io(temp_path.clone(), e))?;

            file.write_all(value.as_bytes())
                .map_err(|e| SessionError::io(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| SessionError::io(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &final_path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            SessionError::atomic_rename(temp_path, final_path.clone(), e)
        })?;

        debug!("Wrote '{key}' to {final_path:?}");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> SessionResult<()> {
        let path = self.path_for(key)?;

        match fs::remove_file(&path) {
            Ok(()) => {
                info!("Removed stored value for '{key}'");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::io(path, e)),
        }
    }
}
