//! Per-row metric: price per square meter.

use polars::prelude::*;

use super::{require_columns, to_f64, MetricsError};

/// Append a `price_per_m2` column (`price_chf / area_m2`) to the table.
///
/// Cleaning is expected to have excluded zero/missing areas already; rows
/// that slipped through produce a null metric rather than an infinity or a
/// panic. Missing required columns are a validation error.
pub fn with_price_per_m2(df: &DataFrame) -> Result<DataFrame, MetricsError> {
    require_columns(df, &["price_chf", "area_m2"], "price_per_m2")?;

    let price = to_f64(df.column("price_chf")?)?;
    let area = to_f64(df.column("area_m2")?)?;

    let ratio: Float64Chunked = price
        .into_iter()
        .zip(area.into_iter())
        .map(|(p, a)| match (p, a) {
            (Some(p), Some(a)) if a > 0.0 => {
                let r = p / a;
                r.is_finite().then_some(r)
            }
            _ => None,
        })
        .collect();

    let mut out = df.clone();
    out.with_column(ratio.with_name("price_per_m2".into()).into_series())?;
    Ok(out)
}
