//! Application configuration management
//!
//! Handles loading and saving application settings including:
//! - Ollama model selection
//! - Input length limit
//! - Timezone for the release metadata fetch

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{PatchNotesError, Result};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Ollama model used for generation
    #[serde(default = "default_model")]
    pub model: String,

    /// Maximum allowed length of the flattened bullet input, in characters
    #[serde(default = "default_max_input_chars")]
    pub max_input_chars: usize,

    /// Timezone passed to the time service when fetching release metadata
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

fn default_model() -> String {
    "gemma2:9b".to_string()
}

fn default_max_input_chars() -> usize {
    4000
}

fn default_timezone() -> String {
    "America/Toronto".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: default_model(),
            max_input_chars: default_max_input_chars(),
            timezone: default_timezone(),
        }
    }
}

impl Config {
    /// Load configuration from file, or create default if not exists
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let contents = fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        // Ensure parent directory exists
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let project_dirs = Self::project_dirs()?;
        Ok(project_dirs.config_dir().join("config.toml"))
    }

    /// Get the path of the append-only request log
    pub fn log_path() -> Result<PathBuf> {
        let project_dirs = Self::project_dirs()?;
        Ok(project_dirs.data_local_dir().join("logs").join("requests.log"))
    }

    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("com", "patchnotes", "patchnotes")
            .ok_or_else(|| PatchNotesError::Config("Could not determine config directory".into()))
    }
}
