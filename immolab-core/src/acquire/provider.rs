//! Listing provider trait and structured error types.
//!
//! The ListingProvider trait abstracts over acquisition backends (the HTTP
//! portal provider, a replayed CSV, a browser-automation bridge) so the
//! pipeline can swap implementations and mock for tests.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sentinel written for a field the extractor could not parse.
pub const MISSING: &str = "N/A";

/// One scraped advertisement, fields still as text.
///
/// This is the raw CSV row schema: numeric fields may need coercion and carry
/// the `N/A` sentinel when extraction failed. Cleaning turns them into
/// nullable numerics downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawListing {
    pub zip_code: u32,
    pub url: String,
    pub price_chf: String,
    pub rooms: String,
    pub area_m2: String,
}

/// Structured error types for acquisition.
///
/// All of these are non-fatal at the run level: the batch orchestrator logs
/// them and skips the affected postal code.
#[derive(Debug, Error)]
pub enum AcquireError {
    #[error("page for zip {zip_code} unreachable after {attempts} attempts: {message}")]
    PageUnreachable {
        zip_code: u32,
        attempts: u32,
        message: String,
    },

    #[error("portal shows no result page for zip {zip_code}")]
    EmptyPage { zip_code: u32 },

    #[error("no listings found for zip {zip_code}")]
    NoListings { zip_code: u32 },

    #[error("rate limited by portal (retry after {retry_after_secs}s)")]
    RateLimited { retry_after_secs: u64 },

    #[error("hard stop: portal has blocked requests (throttle tripped)")]
    Blocked,

    #[error("response format changed: {0}")]
    ResponseFormatChanged(String),

    #[error("http error: {0}")]
    Http(String),
}

impl AcquireError {
    /// Transient errors are worth another attempt; the rest are final for
    /// this postal code.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            AcquireError::PageUnreachable { .. }
                | AcquireError::RateLimited { .. }
                | AcquireError::Http(_)
        )
    }
}

/// Trait for listing acquisition backends.
///
/// Implementations must not share per-fetch session state (cookies, page
/// context) across postal codes — every `fetch_listings` call stands alone.
pub trait ListingProvider: Send + Sync {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    /// Fetch all listings on the result page for one postal code.
    fn fetch_listings(&self, zip_code: u32) -> Result<Vec<RawListing>, AcquireError>;

    /// Check if the provider is currently available (not blocked).
    fn is_available(&self) -> bool {
        true
    }
}

/// Progress callback for multi-zip scrape runs.
pub trait ScrapeProgress: Send {
    /// Called when a batch of postal codes is dispatched.
    fn on_batch_start(&self, zips: &[u32], batch_index: usize);

    /// Called once per postal code after its fetch settled.
    fn on_zip_complete(&self, zip_code: u32, result: &Result<usize, AcquireError>);

    /// Called when the entire run is done.
    fn on_run_complete(&self, succeeded: usize, skipped: usize, rows: usize);
}

/// Simple progress reporter that prints to stdout.
pub struct StdoutProgress;

impl ScrapeProgress for StdoutProgress {
    fn on_batch_start(&self, zips: &[u32], batch_index: usize) {
        println!("batch {}: dispatching {} postal codes", batch_index + 1, zips.len());
    }

    fn on_zip_complete(&self, zip_code: u32, result: &Result<usize, AcquireError>) {
        match result {
            Ok(rows) => println!("  zip {zip_code}: {rows} listings"),
            Err(e) => println!("  zip {zip_code}: skipped ({e})"),
        }
    }

    fn on_run_complete(&self, succeeded: usize, skipped: usize, rows: usize) {
        println!("done: {succeeded} ok, {skipped} skipped, {rows} rows");
    }
}

/// No-op progress reporter for tests and embedding.
pub struct SilentProgress;

impl ScrapeProgress for SilentProgress {
    fn on_batch_start(&self, _zips: &[u32], _batch_index: usize) {}
    fn on_zip_complete(&self, _zip_code: u32, _result: &Result<usize, AcquireError>) {}
    fn on_run_complete(&self, _succeeded: usize, _skipped: usize, _rows: usize) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transient_classification() {
        assert!(AcquireError::Http("timeout".into()).is_transient());
        assert!(AcquireError::RateLimited {
            retry_after_secs: 5
        }
        .is_transient());
        assert!(!AcquireError::NoListings { zip_code: 1000 }.is_transient());
        assert!(!AcquireError::Blocked.is_transient());
    }
}
