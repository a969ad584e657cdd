//! Canton metrics over cleaned listing tables.
//!
//! Every function here is a pure transform: it never mutates its input and is
//! safely replayable. Missing required columns surface as
//! [`MetricsError::MissingColumn`] — silent wrong output is worse than a
//! stopped pipeline.

pub mod per_area;
pub mod price_to_rent;
pub mod ranking;

pub use per_area::with_price_per_m2;
pub use price_to_rent::{
    market_comparison, mean_price_by_zip, median_ratio_by_canton, price_to_rent,
};
pub use ranking::{average_price_per_m2_by_canton, rank_cantons};

use polars::prelude::*;
use thiserror::Error;

use crate::data::{ListingSchema, SchemaError};

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("missing required column '{column}' for {operation}")]
    MissingColumn { column: String, operation: String },

    #[error(transparent)]
    Polars(#[from] PolarsError),
}

/// Validate required columns, tagging the failing operation.
pub(crate) fn require_columns(
    df: &DataFrame,
    required: &[&str],
    operation: &str,
) -> Result<(), MetricsError> {
    ListingSchema::require(df, required).map_err(|e| match e {
        SchemaError::MissingColumn(column) => MetricsError::MissingColumn {
            column,
            operation: operation.to_string(),
        },
    })
}

/// View a column as Float64 values, casting numerics where needed.
pub(crate) fn to_f64(column: &Column) -> Result<Float64Chunked, MetricsError> {
    let series = column.as_materialized_series();
    if series.dtype() == &DataType::Float64 {
        Ok(series.f64()?.clone())
    } else {
        Ok(series.cast(&DataType::Float64)?.f64()?.clone())
    }
}
