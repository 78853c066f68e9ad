//! The optional `config.toml` settings file.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use shadoll_core::{DisplayConfig, clamp_speed};
use shadoll_tilt::TiltSettings;
use tracing::{debug, info};

use crate::error::{ConfigError, ConfigResult};

/// Platform directories for shadoll.
pub fn project_dirs() -> ConfigResult<ProjectDirs> {
    ProjectDirs::from("", "", "shadoll").ok_or(ConfigError::NoProjectDirs)
}

/// Logging options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `EnvFilter` directive, e.g. `info` or `shadoll_tilt=debug`.
    pub level: String,
    /// Directory for log files. Defaults to the platform data directory.
    pub directory: Option<PathBuf>,
    /// Emit JSON lines instead of plain text.
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
            json: false,
        }
    }
}

impl LoggingSettings {
    pub fn resolved_directory(&self) -> ConfigResult<PathBuf> {
        match &self.directory {
            Some(dir) => Ok(dir.clone()),
            None => Ok(project_dirs()?.data_local_dir().join("logs")),
        }
    }
}

/// Contents of `config.toml`. Every table is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Default display options.
    pub display: DisplayConfig,
    pub tilt: TiltSettings,
    pub logging: LoggingSettings,
}

impl Settings {
    /// `config.toml` inside the platform config directory.
    pub fn default_path() -> ConfigResult<PathBuf> {
        Ok(project_dirs()?.config_dir().join("config.toml"))
    }

    /// Load settings from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no settings file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let mut settings: Settings = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        validate(&settings).map_err(|reason| ConfigError::Invalid {
            path: path.to_path_buf(),
            reason,
        })?;
        settings.display.speed = clamp_speed(settings.display.speed);
        info!(path = %path.display(), "loaded settings");
        Ok(settings)
    }
}

/// Reject values that would poison animation time or tilt mapping.
fn validate(settings: &Settings) -> Result<(), String> {
    if !settings.display.speed.is_finite() {
        return Err(format!("display.speed must be a number, got {}", settings.display.speed));
    }
    let tilt = &settings.tilt;
    let positive = [
        ("max_angle_deg", tilt.max_angle_deg),
        ("beta_divisor", tilt.beta_divisor),
        ("gamma_divisor", tilt.gamma_divisor),
    ];
    for (name, value) in positive {
        if !value.is_finite() || value <= 0.0 {
            return Err(format!("tilt.{name} must be a positive number, got {value}"));
        }
    }
    if tilt.idle_timeout_ms == 0 {
        return Err("tilt.idle_timeout_ms must be greater than zero".to_string());
    }
    Ok(())
}
