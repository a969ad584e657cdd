use std::path::Path;

use polars::prelude::*;

use super::schema::normalize_zip_column;
use super::DataError;

/// Sentinels the scraper writes for fields it could not extract.
const MISSING_SENTINELS: &[&str] = &["N/A", "NA"];

/// Load a listing CSV into a DataFrame.
///
/// `N/A` sentinels become nulls and legacy zip column spellings are renamed
/// to `zip_code`. No cleaning happens here; numeric columns may still be text
/// if the file mixes digits with junk.
pub fn load_csv(path: &Path) -> Result<DataFrame, DataError> {
    if !path.exists() {
        return Err(DataError::ReadFailed {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        });
    }

    let null_values: Vec<PlSmallStr> = MISSING_SENTINELS.iter().map(|s| (*s).into()).collect();

    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_null_values(Some(NullValues::AllColumns(null_values)))
        .finish()
        .and_then(|lf| lf.collect())
        .map_err(|e| DataError::CsvFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    Ok(normalize_zip_column(df))
}

/// Load and clean a canonical dataset file in one step.
pub fn load_dataset(path: &Path) -> Result<DataFrame, DataError> {
    let raw = load_csv(path)?;
    super::clean::clean(&raw)
}
