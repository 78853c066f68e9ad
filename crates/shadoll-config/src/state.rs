//! Last-used configuration, kept between runs as a query string.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::debug;

use crate::error::{ConfigError, ConfigResult};
use crate::settings::project_dirs;

/// A one-line file holding the query string of the last configuration.
#[derive(Debug, Clone)]
pub struct StateFile {
    path: PathBuf,
}

impl StateFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `last_query` inside the platform data directory.
    pub fn default_location() -> ConfigResult<Self> {
        Ok(Self::new(project_dirs()?.data_dir().join("last_query")))
    }

    /// The saved query, or `None` if nothing was saved yet.
    pub fn load(&self) -> ConfigResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(Some(text.trim().to_string())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(ConfigError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Replace the saved query. An empty query means "all defaults".
    pub fn save(&self, query: &str) -> ConfigResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&self.path, query).map_err(|source| ConfigError::Write {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), query, "saved configuration state");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing() {
        let dir = tempfile::tempdir().unwrap();
        let state = StateFile::new(dir.path().join("last_query"));
        assert_eq!(state.load().unwrap(), None);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let state = StateFile::new(dir.path().join("data").join("last_query"));
        state.save("bg=static&speed=2").unwrap();
        assert_eq!(state.load().unwrap().as_deref(), Some("bg=static&speed=2"));

        state.save("").unwrap();
        assert_eq!(state.load().unwrap().as_deref(), Some(""));
    }
}
