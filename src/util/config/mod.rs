//! Interpreter configuration
//!
//! # Configuration hierarchy
//!
//! ```text
//! Priority (high -> low):
//! 1. CLI arguments
//! 2. Environment variables (COOL_GC_THRESHOLD)
//! 3. Config file (--config <path>, else ./cool.toml)
//! 4. Default values
//! ```
//!
//! # Usage
//!
//! ```rust
//! use cool_lang::util::config::InterpreterConfig;
//!
//! let config: InterpreterConfig = toml::from_str("[gc]\nthreshold = 16").unwrap();
//! assert_eq!(config.gc.threshold, 16);
//! assert_eq!(config.runtime.max_call_depth, 10_000);
//! ```

use crate::util::logger::LogLevel;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Project-level config file name, looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "cool.toml";

/// Environment variable overriding `gc.threshold`
pub const GC_THRESHOLD_ENV: &str = "COOL_GC_THRESHOLD";

/// Interpreter configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct InterpreterConfig {
    /// Garbage collector settings
    #[serde(default)]
    pub gc: GcSettings,
    /// Evaluator settings
    #[serde(default)]
    pub runtime: RuntimeSettings,
    /// Logging settings
    #[serde(default)]
    pub log: LogSettings,
}

/// Garbage collector settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GcSettings {
    /// Heap size that triggers a collection
    #[serde(default = "default_gc_threshold")]
    pub threshold: usize,
}

fn default_gc_threshold() -> usize {
    1000
}

impl Default for GcSettings {
    fn default() -> Self {
        Self {
            threshold: default_gc_threshold(),
        }
    }
}

/// Evaluator settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeSettings {
    /// Maximum number of nested dispatches
    #[serde(default = "default_max_call_depth")]
    pub max_call_depth: usize,
}

fn default_max_call_depth() -> usize {
    10_000
}

impl Default for RuntimeSettings {
    fn default() -> Self {
        Self {
            max_call_depth: default_max_call_depth(),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LogSettings {
    #[serde(default)]
    pub level: LogLevel,
}

impl InterpreterConfig {
    /// Parse a TOML document
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::ParseError)
    }

    /// Load from an explicit path
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::IoError {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Load with the usual precedence: explicit path, else `cool.toml` in
    /// the working directory, else defaults; then apply the environment.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => {
                let local = PathBuf::from(CONFIG_FILE_NAME);
                if local.is_file() {
                    Self::from_file(&local)?
                } else {
                    Self::default()
                }
            }
        };
        config.apply_env()?;
        Ok(config)
    }

    /// Apply environment variable overrides
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Ok(raw) = std::env::var(GC_THRESHOLD_ENV) {
            self.gc.threshold = parse_threshold(GC_THRESHOLD_ENV, &raw)?;
        }
        Ok(())
    }

    /// Serialize back to TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::SerializeError)
    }
}

fn parse_threshold(
    name: &str,
    raw: &str,
) -> Result<usize, ConfigError> {
    raw.trim()
        .parse::<usize>()
        .map_err(|_| ConfigError::InvalidValue {
            name: name.to_string(),
            value: raw.to_string(),
        })
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {}: {source}", path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Config parse error: {0}")]
    ParseError(toml::de::Error),
    #[error("Config serialize error: {0}")]
    SerializeError(toml::ser::Error),
    #[error("Invalid value '{value}' for {name}")]
    InvalidValue { name: String, value: String },
}
