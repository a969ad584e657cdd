//! Batch orchestration for multi-zip scrape runs.
//!
//! Postal codes are processed in fixed-size batches; within a batch each code
//! is an independent rayon task with its own provider fetch (no shared
//! per-fetch state). Batch completion is a synchronization barrier — the next
//! batch starts only when every task in the current one has settled. A
//! failing code is skipped and contributes zero rows; the run continues.

use std::path::Path;

use rayon::prelude::*;

use super::provider::{AcquireError, ListingProvider, RawListing, ScrapeProgress};

/// Summary of one scrape run.
#[derive(Debug)]
pub struct ScrapeSummary {
    pub total_zips: usize,
    pub succeeded: usize,
    pub skipped: usize,
    pub rows: usize,
    pub errors: Vec<(u32, AcquireError)>,
}

impl ScrapeSummary {
    pub fn all_succeeded(&self) -> bool {
        self.skipped == 0
    }
}

/// Scrape all listings for the given postal codes.
///
/// Returns the collected rows plus a summary. Bails out of the remaining
/// batches early when the provider reports itself unavailable (portal ban),
/// marking the untouched codes as skipped.
pub fn scrape_postal_codes(
    provider: &dyn ListingProvider,
    zips: &[u32],
    batch_size: usize,
    progress: &dyn ScrapeProgress,
) -> (Vec<RawListing>, ScrapeSummary) {
    let batch_size = batch_size.max(1);
    let mut all_rows = Vec::new();
    let mut succeeded = 0;
    let mut skipped = 0;
    let mut errors: Vec<(u32, AcquireError)> = Vec::new();
    let mut processed = 0;

    for (batch_index, chunk) in zips.chunks(batch_size).enumerate() {
        progress.on_batch_start(chunk, batch_index);

        // The collect is the batch barrier: every fetch settles before any
        // result is handled.
        let results: Vec<(u32, Result<Vec<RawListing>, AcquireError>)> = chunk
            .par_iter()
            .map(|&zip| (zip, provider.fetch_listings(zip)))
            .collect();

        for (zip, result) in results {
            processed += 1;
            match result {
                Ok(rows) => {
                    progress.on_zip_complete(zip, &Ok(rows.len()));
                    succeeded += 1;
                    all_rows.extend(rows);
                }
                Err(e) => {
                    let settled: Result<usize, AcquireError> = Err(e);
                    progress.on_zip_complete(zip, &settled);
                    skipped += 1;
                    if let Err(e) = settled {
                        errors.push((zip, e));
                    }
                }
            }
        }

        if !provider.is_available() {
            for &zip in &zips[processed..] {
                errors.push((zip, AcquireError::Blocked));
                skipped += 1;
            }
            break;
        }
    }

    progress.on_run_complete(succeeded, skipped, all_rows.len());

    let summary = ScrapeSummary {
        total_zips: zips.len(),
        succeeded,
        skipped,
        rows: all_rows.len(),
        errors,
    };
    (all_rows, summary)
}

/// Write raw listings to a CSV with the scraper's output schema.
pub fn write_raw_csv(path: &Path, rows: &[RawListing]) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["zip", "url", "price_chf", "rooms", "area_m2"])?;
    for row in rows {
        writer.write_record([
            row.zip_code.to_string().as_str(),
            &row.url,
            &row.price_chf,
            &row.rooms,
            &row.area_m2,
        ])?;
    }
    writer.flush()?;
    Ok(())
}
