//! Memoized per-session dataset store.
//!
//! The dashboard loads the rent and buy datasets exactly once per session and
//! recomputes everything else from the in-memory copies. Invalidation is
//! explicit via [`DatasetStore::reload`] — there is no hidden global and no
//! time-based expiry.

use std::fs;
use std::path::{Path, PathBuf};

use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};

use super::load::load_dataset;
use super::DataError;
use crate::domain::Market;

/// Metadata recorded for one successful load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetMeta {
    pub rent_rows: usize,
    pub buy_rows: usize,
    /// blake3 hash over the raw bytes of both source files.
    pub data_hash: String,
    pub loaded_at: chrono::NaiveDateTime,
}

/// Cleaned rent and buy tables held for the session.
#[derive(Debug, Clone)]
pub struct LoadedDatasets {
    pub rent: DataFrame,
    pub buy: DataFrame,
    pub meta: DatasetMeta,
}

impl LoadedDatasets {
    pub fn market(&self, market: Market) -> &DataFrame {
        match market {
            Market::Rent => &self.rent,
            Market::Buy => &self.buy,
        }
    }
}

/// Load-once accessor over the two canonical dataset files.
pub struct DatasetStore {
    rent_path: PathBuf,
    buy_path: PathBuf,
    loaded: Option<LoadedDatasets>,
}

impl DatasetStore {
    pub fn new(rent_path: impl Into<PathBuf>, buy_path: impl Into<PathBuf>) -> Self {
        Self {
            rent_path: rent_path.into(),
            buy_path: buy_path.into(),
            loaded: None,
        }
    }

    pub fn rent_path(&self) -> &Path {
        &self.rent_path
    }

    pub fn buy_path(&self) -> &Path {
        &self.buy_path
    }

    /// Get the session datasets, loading and cleaning them on first call.
    pub fn get(&mut self) -> Result<&LoadedDatasets, DataError> {
        if self.loaded.is_none() {
            self.loaded = Some(self.load_both()?);
        }
        Ok(self.loaded.as_ref().unwrap())
    }

    /// Drop the memoized copy and load fresh from disk.
    pub fn reload(&mut self) -> Result<&LoadedDatasets, DataError> {
        self.loaded = None;
        self.get()
    }

    fn load_both(&self) -> Result<LoadedDatasets, DataError> {
        let rent = load_dataset(&self.rent_path)?;
        let buy = load_dataset(&self.buy_path)?;

        let mut hasher = blake3::Hasher::new();
        for path in [&self.rent_path, &self.buy_path] {
            let bytes = fs::read(path).map_err(|e| DataError::ReadFailed {
                path: path.clone(),
                source: e,
            })?;
            hasher.update(&bytes);
        }

        let meta = DatasetMeta {
            rent_rows: rent.height(),
            buy_rows: buy.height(),
            data_hash: hasher.finalize().to_hex().to_string(),
            loaded_at: chrono::Local::now().naive_local(),
        };

        Ok(LoadedDatasets { rent, buy, meta })
    }
}
