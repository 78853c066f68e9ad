use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading or writing configuration files.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid setting in {path}: {reason}")]
    Invalid { path: PathBuf, reason: String },

    /// The platform has no home directory to derive config paths from.
    #[error("No configuration directory available on this platform")]
    NoProjectDirs,
}

pub type ConfigResult<T> = Result<T, ConfigError>;
