use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub classifier: ClassifierConfig,
    pub logging: LoggingConfig,
    pub data: DataConfig,
}

/// Dice classifier configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Memoize results by creature id.
    pub cache_enabled: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: String,
    /// Write JSON logs to a daily rolling file under the data directory.
    pub file_logging: bool,
}

/// Data directory configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Override the default data directory.
    pub data_dir: Option<PathBuf>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            cache_enabled: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            file_logging: true,
        }
    }
}

/// Why the configuration file was not used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("No config file at {}", path.display())]
    Missing { path: PathBuf },

    #[error("Failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    /// A missing file is the normal first-run case, not a problem.
    pub fn is_missing(&self) -> bool {
        matches!(self, ConfigError::Missing { .. })
    }
}

impl AppConfig {
    /// Load configuration from `~/.config/creature-dice/config.toml`.
    ///
    /// Falls back to `Default` if the file is missing or unparseable, and
    /// hands back the reason so it can be logged once logging is up.
    pub fn load() -> (Self, Option<ConfigError>) {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path, with the same fallbacks as
    /// [`AppConfig::load`].
    pub fn load_from(config_path: &Path) -> (Self, Option<ConfigError>) {
        match Self::try_load_from(config_path) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Load configuration from an explicit path without falling back.
    pub fn try_load_from(config_path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(config_path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                ConfigError::Missing {
                    path: config_path.to_path_buf(),
                }
            } else {
                ConfigError::Read {
                    path: config_path.to_path_buf(),
                    source,
                }
            }
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: config_path.to_path_buf(),
            source,
        })
    }

    /// Path of the user config file.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("creature-dice").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    /// Resolved data directory (override or XDG default).
    pub fn data_dir(&self) -> PathBuf {
        self.data.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .map(|d| d.join("creature-dice"))
                .unwrap_or_else(|| PathBuf::from("data"))
        })
    }

    /// Directory for rolling log files.
    pub fn log_dir(&self) -> PathBuf {
        self.data_dir().join("logs")
    }
}
