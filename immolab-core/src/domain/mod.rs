//! Domain types shared across the pipeline.

mod market;

pub use market::Market;
