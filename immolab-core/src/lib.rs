//! ImmoLab Core — Swiss real-estate listing analytics.
//!
//! This crate contains the heart of the pipeline:
//! - Domain types (markets, raw listings)
//! - Dataset loading, cleaning, and the memoized session store
//! - Canton metrics (price per m², rankings, price-to-rent ratio)
//! - Acquisition: provider trait, bounded retry, batch orchestration
//! - TOML runtime configuration

pub mod acquire;
pub mod config;
pub mod data;
pub mod domain;
pub mod metrics;
