//! Dataset loading, cleaning, and the per-session store.

pub mod clean;
pub mod load;
pub mod schema;
pub mod store;

pub use clean::clean;
pub use load::{load_csv, load_dataset};
pub use schema::{ListingSchema, SchemaError};
pub use store::{DatasetMeta, DatasetStore, LoadedDatasets};

use std::path::PathBuf;
use thiserror::Error;

/// Structured error types for dataset operations.
///
/// These are designed to be displayable in both CLI and TUI contexts.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("csv parse failed for {path}: {message}")]
    CsvFailed { path: PathBuf, message: String },

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Polars(#[from] polars::error::PolarsError),
}
