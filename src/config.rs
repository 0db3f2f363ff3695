//! Configuration loading and management
//!
//! Handles parsing of the optional `config.toml` in the taskdeck config
//! directory. A missing file yields defaults; invalid TOML is an error.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,

    /// Focus timer configuration
    #[serde(default)]
    pub timer: TimerConfig,
}

/// Storage-related configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Override for the data directory holding the snapshot
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

/// Focus timer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerConfig {
    /// Focus session length in minutes
    #[serde(default = "default_timer_minutes")]
    pub minutes: u32,
}

fn default_timer_minutes() -> u32 {
    crate::timer::DEFAULT_TIMER_MINUTES
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            minutes: default_timer_minutes(),
        }
    }
}

impl Config {
    /// Load configuration from a specific file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from the default config dir, falling back to
    /// defaults when no file exists.
    pub fn load_default() -> Result<Self> {
        match default_config_file() {
            Some(path) if path.exists() => Config::load(&path),
            _ => Ok(Config::default()),
        }
    }

    /// Focus session length in seconds
    pub fn session_seconds(&self) -> u32 {
        self.timer.minutes * 60
    }
}

/// Path to the user-level config file, when a home directory is resolvable
pub fn default_config_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Resolve the data directory: explicit override first, then config, then
/// the platform default.
pub fn resolve_data_dir(override_dir: Option<PathBuf>, config: &Config) -> Result<PathBuf> {
    if let Some(dir) = override_dir {
        return Ok(dir);
    }
    if let Some(dir) = &config.storage.dir {
        return Ok(dir.clone());
    }
    project_dirs()
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| Error::DataDirUnavailable(PathBuf::from("~")))
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "taskdeck")
}
