//! Configuration
//!
//! Loaded from a TOML file, then overridden by environment variables.
//! Every field has a default so an absent file is not an error.

use crate::metric::MetricKind;
use serde::Deserialize;
use std::{
    path::{Path, PathBuf},
    time::Duration,
};

/// Floor for the input poll interval.
pub const MIN_TICK_RATE_MS: u64 = 10;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub export: ExportConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Initial selection and redraw rate of the dashboard
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_county")]
    pub county: String,

    /// Metric key, e.g. `lowBirthWeight`
    #[serde(default = "default_metric")]
    pub metric: String,

    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
}

fn default_county() -> String {
    "Miami-Dade".to_string()
}

fn default_metric() -> String {
    MetricKind::LowBirthWeight.key().to_string()
}

fn default_tick_rate() -> u64 {
    250
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            county: default_county(),
            metric: default_metric(),
            tick_rate_ms: default_tick_rate(),
        }
    }
}

impl DisplayConfig {
    /// Configured poll interval, never below [`MIN_TICK_RATE_MS`].
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(MIN_TICK_RATE_MS))
    }

    /// The configured metric, or the default one when the key is unknown.
    pub fn metric_kind(&self) -> MetricKind {
        match self.metric.parse() {
            Ok(metric) => metric,
            Err(e) => {
                tracing::warn!("{}; falling back to {}", e, default_metric());
                MetricKind::LowBirthWeight
            }
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_export_dir")]
    pub directory: PathBuf,
}

fn default_export_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: default_export_dir(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_dir")]
    pub directory: PathBuf,

    #[serde(default = "default_log_prefix")]
    pub file_prefix: String,

    /// Level or `EnvFilter` directive: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_log_prefix() -> String {
    "florida-health.log".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: default_log_dir(),
            file_prefix: default_log_prefix(),
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from the default locations, falling back to defaults
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("florida-health").join("config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// `--config <path>` when given, otherwise the default search.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load_with_env(path),
            None => Ok(Self::load_default()),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(dir) = std::env::var("FLORIDA_HEALTH_EXPORT_DIR") {
            self.export.directory = PathBuf::from(dir);
        }
        if let Ok(dir) = std::env::var("FLORIDA_HEALTH_LOG_DIR") {
            self.logging.directory = PathBuf::from(dir);
        }
        if let Ok(level) = std::env::var("FLORIDA_HEALTH_LOG_LEVEL") {
            self.logging.level = level;
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Content of a config file with every default spelled out
pub fn generate_default_config() -> String {
    r#"# Florida Health Dashboard configuration
#
# Environment variables override these settings:
# - FLORIDA_HEALTH_EXPORT_DIR
# - FLORIDA_HEALTH_LOG_DIR
# - FLORIDA_HEALTH_LOG_LEVEL

[display]
# County selected at startup
county = "Miami-Dade"

# One of maternalMortality, lowBirthWeight, pretermBirth, teenBirthRate
metric = "lowBirthWeight"

# Input poll interval (ms)
tick_rate_ms = 250

[export]
# Directory that receives florida-health-data-2023.csv
directory = "."

[logging]
# Directory for the hourly rolling log file
directory = "."
file_prefix = "florida-health.log"

# trace, debug, info, warn, error
level = "info"
"#
    .to_string()
}
