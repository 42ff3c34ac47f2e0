//! Volume-weighted two-way price calculator.
//!
//! - `aggregator` — `VwapAggregator`, the latest-per-market aggregation engine.
//! - `weighted` — one-sided weighted price computation.
//! - `calculator` — the `Calculator` trait implemented by the aggregator.
//! - `reader` — JSON-lines market update reader feeding a channel.
//! - `sink` — JSON-lines writer for computed quotes.
#![warn(missing_docs)]
pub mod aggregator;
pub mod calculator;
pub mod reader;
pub mod sink;
pub mod weighted;

pub use aggregator::VwapAggregator;
pub use calculator::Calculator;
pub use weighted::{Side, WeightedResult, compute_weighted};
