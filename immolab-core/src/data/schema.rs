use polars::prelude::*;

/// Canonical schema for listing datasets.
///
/// The raw scrape output uses `zip` (or `postal_code`) instead of `zip_code`
/// and carries every field as text; [`normalize_zip_column`] and the cleaning
/// pass bring a table into this shape.
pub struct ListingSchema;

impl ListingSchema {
    /// Get the canonical listing schema.
    pub fn schema() -> Schema {
        Schema::from_iter(vec![
            Field::new("zip_code".into(), DataType::Int64),
            Field::new("canton".into(), DataType::String),
            Field::new("price_chf".into(), DataType::Float64),
            Field::new("rooms".into(), DataType::Float64),
            Field::new("area_m2".into(), DataType::Float64),
        ])
    }

    /// Columns the raw scraper CSV carries, in order.
    pub fn raw_columns() -> &'static [&'static str] {
        &["zip", "url", "price_chf", "rooms", "area_m2"]
    }

    /// Check that every column in `required` is present on the DataFrame.
    pub fn require(df: &DataFrame, required: &[&str]) -> Result<(), SchemaError> {
        let actual = df.schema();
        for name in required {
            if !actual.contains(name) {
                return Err(SchemaError::MissingColumn(name.to_string()));
            }
        }
        Ok(())
    }
}

/// Rename legacy zip column spellings (`zip`, `postal_code`) to `zip_code`.
///
/// The scraper writes `zip`; older dataset exports used `postal_code`. A table
/// that already has `zip_code` is returned unchanged.
pub fn normalize_zip_column(mut df: DataFrame) -> DataFrame {
    if df.schema().contains("zip_code") {
        return df;
    }
    for legacy in ["zip", "postal_code"] {
        if df.schema().contains(legacy) {
            let _ = df.rename(legacy, "zip_code".into());
            // polars 0.46: `rename` does not invalidate the cached schema,
            // which was primed by the `contains` checks above.
            df.clear_schema();
            return df;
        }
    }
    df
}

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("missing required column: {0}")]
    MissingColumn(String),
}
