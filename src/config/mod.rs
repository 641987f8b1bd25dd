use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::errors::{AppError, AppResult};

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Path of the JSON snapshot file.
    pub storage: String,
    #[serde(default = "default_autosave_delay_ms")]
    pub autosave_delay_ms: u64,
}

fn default_autosave_delay_ms() -> u64 {
    350
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: Self::storage_file().to_string_lossy().to_string(),
            autosave_delay_ms: default_autosave_delay_ms(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("servicelogger")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".servicelogger")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("servicelogger.conf")
    }

    /// Return the full path of the JSON state snapshot
    pub fn storage_file() -> PathBuf {
        Self::config_dir().join("servicelogger.state.json")
    }

    /// Load configuration from file, or return defaults if missing or
    /// unreadable. Core behavior never depends on environment variables.
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            fs::read_to_string(&path)
                .ok()
                .and_then(|content| serde_yaml::from_str(&content).ok())
                .unwrap_or_default()
        } else {
            Self::default()
        }
    }

    /// Write the configuration file, creating the directory on first use.
    pub fn save(&self) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::write(Self::config_file(), yaml).map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }
}
