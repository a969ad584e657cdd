//! Runtime configuration, loaded from a TOML file.
//!
//! Every field has a default so a missing file or a partial file just works;
//! a file that exists but does not parse is an error (silently ignoring a
//! typo'd config is worse than failing).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::acquire::RetryPolicy;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub data: DataConfig,
    pub scrape: ScrapeConfig,
}

/// Where the canonical dataset files live.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub rent_csv: PathBuf,
    pub buy_csv: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            rent_csv: PathBuf::from("data/rent.csv"),
            buy_csv: PathBuf::from("data/buy.csv"),
        }
    }
}

/// Scrape-run tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapeConfig {
    /// Postal codes fetched in parallel per batch.
    pub batch_size: usize,
    /// Minimum milliseconds between requests to the portal.
    pub min_request_interval_ms: u64,
    /// Cooldown after the portal blocks us, in seconds.
    pub cooldown_secs: u64,
    pub retry: RetryPolicy,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            batch_size: 8,
            min_request_interval_ms: 500,
            cooldown_secs: 600,
            retry: RetryPolicy::default(),
        }
    }
}

impl AppConfig {
    /// Load from `path`; a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn throttle(&self) -> crate::acquire::ScrapeThrottle {
        crate::acquire::ScrapeThrottle::new(
            std::time::Duration::from_millis(self.scrape.min_request_interval_ms),
            std::time::Duration::from_secs(self.scrape.cooldown_secs),
        )
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {message}")]
    Parse { path: PathBuf, message: String },
}
