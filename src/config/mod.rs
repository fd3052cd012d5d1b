use crate::errors::{AppError, AppResult};
use crate::render::OutputFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_format")]
    pub default_format: OutputFormat,
    /// `key=value` attributes for the `<table>` tag, used when none are given
    /// on the command line.
    #[serde(default)]
    pub html_attributes: Vec<String>,
    #[serde(default = "default_warn_on_empty")]
    pub warn_on_empty: bool,
}

fn default_format() -> OutputFormat {
    OutputFormat::Text
}
fn default_warn_on_empty() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_format: default_format(),
            html_attributes: Vec::new(),
            warn_on_empty: default_warn_on_empty(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("rprettytable")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rprettytable.conf")
    }

    /// Load configuration from the default location, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    /// Load configuration from `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("failed to read {}: {e}", path.display()))
        })?;

        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("failed to parse {}: {e}", path.display())))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }
}
