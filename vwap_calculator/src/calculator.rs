//! Calculator seam between the update source and the aggregation engine.
use vwap_common::{MarketUpdate, Result, TwoWayPrice};

/// Turns a stream of market updates into derived two-way prices.
pub trait Calculator {
    /// Apply one update and return the recomputed two-way price for its instrument.
    fn apply_market_update(&mut self, update: MarketUpdate) -> Result<TwoWayPrice>;
}
