//! Configuration for the optio demo.
//!
//! Read from `~/.optio/config.toml`. A missing file is not an error; every
//! setting has a default.
//!
//! ```toml
//! [demo]
//! checkmate_probability = 0.1
//! max_moves = 200
//! ```

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Overrides `[demo] max_moves`.
pub const MAX_MOVES_ENV: &str = "OPTIO_MAX_MOVES";

pub const DEFAULT_CHECKMATE_PROBABILITY: f64 = 0.1;

const fn default_checkmate_probability() -> f64 {
    DEFAULT_CHECKMATE_PROBABILITY
}

#[derive(Debug, Default, Deserialize)]
pub struct OptioConfig {
    pub demo: Option<DemoConfig>,
}

#[derive(Debug, Deserialize)]
pub struct DemoConfig {
    /// Chance per move that the game ends in checkmate. Clamped to `[0, 1]`.
    #[serde(default = "default_checkmate_probability")]
    pub checkmate_probability: f64,
    /// Hard cap on the number of moves, if any.
    pub max_moves: Option<u32>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("{name} must be a non-negative integer, got {value:?}")]
    Env { name: &'static str, value: String },
}

impl ConfigError {
    /// The config file involved, if the error came from one.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => Some(path),
            ConfigError::Env { .. } => None,
        }
    }
}

impl OptioConfig {
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    /// Load from an explicit path. `Ok(None)` when the file does not exist.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }
}

/// Effective demo settings after defaults, clamping and env overrides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemoSettings {
    pub checkmate_probability: f64,
    pub max_moves: Option<u32>,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            checkmate_probability: DEFAULT_CHECKMATE_PROBABILITY,
            max_moves: None,
        }
    }
}

impl DemoSettings {
    /// Resolve settings from the loaded config and the process environment.
    pub fn from_env(config: Option<&OptioConfig>) -> Result<Self, ConfigError> {
        Self::resolve(config, env::var(MAX_MOVES_ENV).ok())
    }

    pub fn resolve(
        config: Option<&OptioConfig>,
        max_moves_override: Option<String>,
    ) -> Result<Self, ConfigError> {
        let demo = config.and_then(|cfg| cfg.demo.as_ref());

        let checkmate_probability = demo.map_or(DEFAULT_CHECKMATE_PROBABILITY, |d| {
            clamp_probability(d.checkmate_probability)
        });

        let max_moves = match max_moves_override {
            Some(raw) => Some(raw.trim().parse::<u32>().map_err(|_| ConfigError::Env {
                name: MAX_MOVES_ENV,
                value: raw.clone(),
            })?),
            None => demo.and_then(|d| d.max_moves),
        };

        Ok(Self {
            checkmate_probability,
            max_moves,
        })
    }
}

fn clamp_probability(value: f64) -> f64 {
    if value.is_nan() {
        tracing::warn!("checkmate_probability is NaN, using default");
        return DEFAULT_CHECKMATE_PROBABILITY;
    }
    value.clamp(0.0, 1.0)
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".optio").join("config.toml"))
}
