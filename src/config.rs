//! User configuration (`config.toml` in the platform config directory).
//!
//! ```toml
//! [display]
//! col_width = 10
//!
//! [logging]
//! level = "info"
//! ```

use crate::error::{ConfigError, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};

const MAX_CONFIG_FILE_BYTES: u64 = 1_048_576; // 1 MiB

pub const MIN_COL_WIDTH: usize = 4;
pub const MAX_COL_WIDTH: usize = 40;

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, default)]
pub struct Config {
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, default)]
pub struct DisplayConfig {
    /// Width of every grid column in terminal cells.
    pub col_width: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { col_width: 10 }
    }
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, default)]
pub struct LoggingConfig {
    /// flexi_logger spec string, e.g. "info" or "debug, gridpad_core=trace".
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "gridpad")
}

fn user_config_path() -> Option<PathBuf> {
    project_dirs().map(|proj| proj.config_dir().join("config.toml"))
}

impl Config {
    /// Parse configuration text. Out-of-range values are clamped.
    pub fn from_toml(path: &Path, content: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.display.col_width = config.display.col_width.clamp(MIN_COL_WIDTH, MAX_COL_WIDTH);
        Ok(config)
    }

    /// Read one config file.
    pub fn read(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let io_err = |source: std::io::Error| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        let size = std::fs::metadata(path).map_err(io_err)?.len();
        if size > MAX_CONFIG_FILE_BYTES {
            return Err(ConfigError::TooLarge {
                path: path.to_path_buf(),
                size,
                max: MAX_CONFIG_FILE_BYTES,
            });
        }
        let content = std::fs::read_to_string(path).map_err(io_err)?;
        Self::from_toml(path, &content)
    }

    /// Load the configuration.
    ///
    /// An explicit path must exist and parse. Problems with the default
    /// location only produce warnings and fall back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<(Self, Vec<String>)> {
        if let Some(path) = explicit {
            return Ok((Self::read(path)?, Vec::new()));
        }

        let Some(path) = user_config_path() else {
            return Ok((Self::default(), Vec::new()));
        };
        if !path.exists() {
            return Ok((Self::default(), Vec::new()));
        }
        match Self::read(&path) {
            Ok(config) => Ok((config, Vec::new())),
            Err(err) => Ok((Self::default(), vec![err.to_string()])),
        }
    }
}
