//! Listing acquisition: provider trait, bounded retry, batch orchestration.
//!
//! Acquisition failures are always contained locally — a postal code whose
//! page cannot be fetched contributes zero rows and the run continues.

pub mod batch;
pub mod homegate;
pub mod provider;
pub mod retry;
pub mod throttle;

pub use batch::{scrape_postal_codes, write_raw_csv, ScrapeSummary};
pub use homegate::HomegateProvider;
pub use provider::{
    AcquireError, ListingProvider, RawListing, ScrapeProgress, SilentProgress, StdoutProgress,
};
pub use retry::RetryPolicy;
pub use throttle::ScrapeThrottle;
