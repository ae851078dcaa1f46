use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub(crate) struct Config {
    /// Seed for the random placement of the snake & food
    pub(crate) seed: Option<u64>,

    /// How the game is drawn
    pub(crate) display: DisplayConfig,

    /// Where & how much to log
    pub(crate) logging: LoggingConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("gridsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub(crate) struct DisplayConfig {
    /// Whether to mark the centers of empty tiles
    pub(crate) grid: bool,

    pub(crate) snake_style: Option<parse_style::Style>,

    pub(crate) food_style: Option<parse_style::Style>,

    pub(crate) grid_style: Option<parse_style::Style>,
}

impl Default for DisplayConfig {
    fn default() -> DisplayConfig {
        DisplayConfig {
            grid: true,
            snake_style: None,
            food_style: None,
            grid_style: None,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub(crate) struct LoggingConfig {
    /// File to write log messages to.  Nothing is logged if this is not set.
    pub(crate) file: Option<PathBuf>,

    /// Log filter used when `RUST_LOG` is not set, e.g., `"debug"`
    pub(crate) level: Option<String>,
}

impl LoggingConfig {
    pub(crate) const DEFAULT_LEVEL: &'static str = "info";

    pub(crate) fn level(&self) -> &str {
        self.level.as_deref().unwrap_or(Self::DEFAULT_LEVEL)
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}
