//! Homegate listing provider.
//!
//! Fetches the server-rendered result page for one postal code and extracts
//! listings from the embedded `window.__INITIAL_STATE__` JSON payload.
//! Handles retries through [`RetryPolicy`], pacing and bans through
//! [`ScrapeThrottle`].
//!
//! The portal has no official API and the payload layout changes without
//! notice; extraction stays tolerant and falls back to the `N/A` sentinel per
//! field. Full browser automation remains an external collaborator behind
//! [`ListingProvider`] — this provider covers the server-rendered path only.

use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::Value;

use super::provider::{AcquireError, ListingProvider, RawListing, MISSING};
use super::retry::RetryPolicy;
use super::throttle::ScrapeThrottle;
use crate::domain::Market;

const STATE_MARKER: &str = "window.__INITIAL_STATE__=";
const LISTINGS_POINTER: &str = "/resultList/search/fullSearch/result/listings";

/// Homegate result-page provider.
pub struct HomegateProvider {
    client: reqwest::blocking::Client,
    throttle: Arc<ScrapeThrottle>,
    retry: RetryPolicy,
    market: Market,
}

impl HomegateProvider {
    pub fn new(
        market: Market,
        throttle: Arc<ScrapeThrottle>,
        retry: RetryPolicy,
    ) -> Result<Self, AcquireError> {
        // No cookie store: successive fetches share no session state, per the
        // acquisition contract.
        let client = reqwest::blocking::Client::builder()
            .timeout(retry.timeout())
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .build()
            .map_err(|e| AcquireError::Http(e.to_string()))?;

        Ok(Self {
            client,
            throttle,
            retry,
            market,
        })
    }

    /// Build the result-list URL for a postal code.
    fn listing_url(&self, zip_code: u32) -> String {
        let segment = match self.market {
            Market::Rent => "louer",
            Market::Buy => "acheter",
        };
        format!("https://www.homegate.ch/{segment}/biens-immobiliers/npa-{zip_code}/liste-annonces")
    }

    /// Canonical advertisement URL for a listing id.
    fn advert_url(&self, id: &str) -> String {
        let segment = match self.market {
            Market::Rent => "louer",
            Market::Buy => "acheter",
        };
        format!("https://www.homegate.ch/{segment}/{id}")
    }

    /// Fetch one page, mapping HTTP status to the acquisition taxonomy.
    fn fetch_page(&self, zip_code: u32) -> Result<String, AcquireError> {
        if !self.throttle.acquire_slot() {
            return Err(AcquireError::Blocked);
        }

        let url = self.listing_url(zip_code);
        let resp = self
            .client
            .get(&url)
            .send()
            .map_err(|e| AcquireError::Http(e.to_string()))?;

        match resp.status() {
            StatusCode::FORBIDDEN => {
                // The portal has blocked us; stop the whole run.
                self.throttle.trip();
                Err(AcquireError::Blocked)
            }
            StatusCode::TOO_MANY_REQUESTS => {
                self.throttle.record_failure();
                let retry_after_secs = resp
                    .headers()
                    .get(reqwest::header::RETRY_AFTER)
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(30);
                Err(AcquireError::RateLimited { retry_after_secs })
            }
            StatusCode::NOT_FOUND => Err(AcquireError::EmptyPage { zip_code }),
            status if !status.is_success() => {
                Err(AcquireError::Http(format!("status {status} for {url}")))
            }
            _ => resp.text().map_err(|e| AcquireError::Http(e.to_string())),
        }
    }

    /// Extract listings from a result page body.
    fn parse_listings(&self, zip_code: u32, body: &str) -> Result<Vec<RawListing>, AcquireError> {
        let start = body.find(STATE_MARKER).ok_or_else(|| {
            AcquireError::ResponseFormatChanged("initial state payload not found".into())
        })? + STATE_MARKER.len();

        // The payload is followed by more script text; take the first
        // complete JSON value and ignore the rest.
        let state: Value = serde_json::Deserializer::from_str(&body[start..])
            .into_iter()
            .next()
            .ok_or_else(|| {
                AcquireError::ResponseFormatChanged("initial state payload is empty".into())
            })?
            .map_err(|e| AcquireError::ResponseFormatChanged(e.to_string()))?;

        let listings = state
            .pointer(LISTINGS_POINTER)
            .and_then(Value::as_array)
            .ok_or(AcquireError::EmptyPage { zip_code })?;

        if listings.is_empty() {
            return Err(AcquireError::NoListings { zip_code });
        }

        Ok(listings
            .iter()
            .map(|entry| self.extract_listing(zip_code, entry))
            .collect())
    }

    /// Pull one raw row out of a listing entry, field by field.
    ///
    /// A field that cannot be located or parsed becomes the `N/A` sentinel;
    /// the row itself is always kept.
    fn extract_listing(&self, zip_code: u32, entry: &Value) -> RawListing {
        let listing = entry.pointer("/listing").unwrap_or(entry);

        let url = listing
            .pointer("/id")
            .and_then(value_text)
            .map(|id| self.advert_url(&id))
            .unwrap_or_else(|| MISSING.to_string());

        let price_pointer = match self.market {
            Market::Rent => "/prices/rent/gross",
            Market::Buy => "/prices/buy/price",
        };

        RawListing {
            zip_code,
            url,
            price_chf: number_field(listing.pointer(price_pointer)),
            rooms: number_field(listing.pointer("/characteristics/numberOfRooms")),
            area_m2: number_field(listing.pointer("/characteristics/livingSpace")),
        }
    }
}

impl ListingProvider for HomegateProvider {
    fn name(&self) -> &str {
        "homegate"
    }

    fn fetch_listings(&self, zip_code: u32) -> Result<Vec<RawListing>, AcquireError> {
        let body = self.retry.run(|| self.fetch_page(zip_code)).map_err(|e| {
            // After the retry budget, a plain transport failure reads as
            // "page unreachable" in the run summary.
            match e {
                AcquireError::Http(message) => AcquireError::PageUnreachable {
                    zip_code,
                    attempts: self.retry.max_attempts,
                    message,
                },
                other => other,
            }
        })?;
        self.throttle.record_success();
        self.parse_listings(zip_code, &body)
    }

    fn is_available(&self) -> bool {
        self.throttle.is_allowed()
    }
}

/// Render a JSON scalar as text, if it is one.
fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Extract the first number from a possibly messy field.
///
/// Prices arrive as `"CHF 1’500.–"` and similar; digit-grouping apostrophes
/// and surrounding text are stripped, everything after the first numeric run
/// is ignored. No number → `N/A`.
fn number_field(value: Option<&Value>) -> String {
    let text = match value {
        Some(Value::Number(n)) => return n.to_string(),
        Some(Value::String(s)) => s.as_str(),
        _ => return MISSING.to_string(),
    };
    first_number(text).unwrap_or_else(|| MISSING.to_string())
}

fn first_number(text: &str) -> Option<String> {
    let mut out = String::new();
    let mut seen_digit = false;
    let mut seen_dot = false;

    for c in text.chars() {
        match c {
            // digit-grouping and whitespace characters inside a number
            '\u{2019}' | '\'' | '\u{00a0}' | ' ' | ',' => continue,
            d if d.is_ascii_digit() => {
                out.push(d);
                seen_digit = true;
            }
            '.' if seen_digit && !seen_dot => {
                out.push('.');
                seen_dot = true;
            }
            _ if seen_digit => break,
            _ => continue,
        }
    }

    if out.ends_with('.') {
        out.pop();
    }
    seen_digit.then_some(out)
}
