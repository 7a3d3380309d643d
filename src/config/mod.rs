use crate::errors::{AppError, AppResult};
use crate::logfile::HeaderPolicy;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Environment variable overriding the configuration file location.
pub const CONFIG_ENV: &str = "TALOGO_CONFIG";

pub const DEFAULT_LOG_FILE: &str = "./talogo.csv";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_log_file")]
    pub log_file: String,
    #[serde(default)]
    pub header_policy: HeaderPolicy,
    #[serde(default = "default_show_diagnostics")]
    pub show_diagnostics: bool,
}

fn default_log_file() -> String {
    DEFAULT_LOG_FILE.to_string()
}
fn default_show_diagnostics() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            header_policy: HeaderPolicy::default(),
            show_diagnostics: default_show_diagnostics(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("talogo")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".talogo")
        }
    }

    /// Return the full path of the config file (`TALOGO_CONFIG` wins)
    pub fn config_file() -> PathBuf {
        match env::var_os(CONFIG_ENV) {
            Some(p) if !p.is_empty() => PathBuf::from(p),
            _ => Self::config_dir().join("talogo.conf"),
        }
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        Self::from_yaml(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Write the current settings to the config file, creating its directory.
    pub fn save(&self) -> AppResult<PathBuf> {
        let path = Self::config_file();
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(&path, self.to_yaml()?)?;
        Ok(path)
    }
}
