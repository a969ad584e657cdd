//! Cleaning pass for raw listing tables.
//!
//! Contract:
//! - every *present* column of {price_chf, rooms, area_m2} is coerced to
//!   Float64; unparseable values become null, never an error
//! - rows with null or non-positive area_m2 are dropped
//! - canton text is trimmed and upper-cased when present
//! - exact-duplicate rows are dropped (stable, keep first); duplicates are
//!   detected after normalization so spelling variants collapse in one pass
//! - absent columns stay absent; no column is invented; the input is
//!   never mutated
//!
//! The pass is idempotent: `clean(clean(df)) == clean(df)`.

use polars::prelude::*;

use super::DataError;

/// Columns that must end up numeric when they exist.
const NUMERIC_COLUMNS: &[&str] = &["price_chf", "rooms", "area_m2"];

/// Clean a raw listing table. Pure: returns a new DataFrame.
pub fn clean(df: &DataFrame) -> Result<DataFrame, DataError> {
    let mut out = df.clone();

    for name in NUMERIC_COLUMNS {
        if out.schema().contains(name) {
            let coerced = coerce_numeric(out.column(name)?)?;
            out.replace(name, coerced)?;
        }
    }

    if out.schema().contains("area_m2") {
        let mask = out.column("area_m2")?.f64()?.gt(0.0);
        out = out.filter(&mask)?;
    }

    if out.schema().contains("canton") {
        let normalized = normalize_canton(out.column("canton")?)?;
        out.replace("canton", normalized)?;
    }

    // Dedupe last: rows that only differ in canton spelling are already
    // identical here, so a second pass has nothing left to merge.
    out = out
        .lazy()
        .unique_stable(None, UniqueKeepStrategy::First)
        .collect()?;

    Ok(out)
}

/// Coerce a column to Float64. Text that does not parse becomes null.
fn coerce_numeric(column: &Column) -> Result<Series, DataError> {
    let series = match column.dtype() {
        DataType::String => {
            let parsed: Float64Chunked = column
                .str()?
                .into_iter()
                .map(|opt| opt.and_then(|v| v.trim().parse::<f64>().ok()))
                .collect();
            parsed.with_name(column.name().clone()).into_series()
        }
        DataType::Float64 => column.as_materialized_series().clone(),
        _ => column.as_materialized_series().cast(&DataType::Float64)?,
    };
    Ok(series)
}

/// Trim and upper-case canton codes ("  zh " → "ZH").
fn normalize_canton(column: &Column) -> Result<Series, DataError> {
    let normalized: StringChunked = column
        .str()?
        .into_iter()
        .map(|opt| opt.map(|v| v.trim().to_uppercase()))
        .collect();
    Ok(normalized.with_name(column.name().clone()).into_series())
}
