//! Latest-per-market VWAP aggregation.
//!
//! `VwapAggregator` keeps, per instrument, the most recent `MarketUpdate` seen from
//! each market. Every applied update replaces the stored entry for its
//! (instrument, market) pair and the bid and offer are recomputed over the whole
//! snapshot of markets known for that instrument:
//!
//! - the returned prices are volume-weighted averages across markets;
//! - the returned amounts are the summed volumes of the contributing markets,
//!   not the triggering update's own volume;
//! - the returned state is the state of the triggering update.
//!
//! A side whose triggering amount is zero is reported as zero price and zero
//! volume, whatever the other markets hold.
//!
//! Design notes:
//! - No sequencing is performed: a late or duplicate update simply overwrites.
//! - State only grows; markets are never evicted.
//! - The aggregator is not synchronized; if it is shared across threads, wrap it
//!   with a `Mutex` or give it a single owning thread.

use log::debug;
use std::collections::HashMap;
use vwap_common::{Instrument, Market, MarketUpdate, Result, TwoWayPrice, VwapError};

use crate::calculator::Calculator;
use crate::weighted::{Side, WeightedResult, compute_weighted};

/// Volume-weighted two-way price calculator over the latest quote of each market.
#[derive(Debug, Default)]
pub struct VwapAggregator {
    /// Latest update per market, grouped by instrument.
    latest: HashMap<Instrument, HashMap<Market, MarketUpdate>>,
}

impl VwapAggregator {
    /// Create an empty aggregator.
    pub fn new() -> Self {
        Self {
            latest: HashMap::new(),
        }
    }

    /// Latest stored update for the (instrument, market) pair, if any.
    pub fn latest(&self, instrument: &Instrument, market: &Market) -> Option<&MarketUpdate> {
        self.latest
            .get(instrument)
            .and_then(|markets| markets.get(market))
    }

    /// Snapshot of the latest update of every market known for `instrument`.
    ///
    /// Iteration order is unspecified.
    pub fn latest_updates(&self, instrument: &Instrument) -> impl Iterator<Item = &MarketUpdate> {
        self.latest
            .get(instrument)
            .into_iter()
            .flat_map(|markets| markets.values())
    }

    /// Number of markets that have quoted `instrument` so far.
    pub fn market_count(&self, instrument: &Instrument) -> usize {
        self.latest.get(instrument).map(HashMap::len).unwrap_or(0)
    }

    /// Instruments that have received at least one update.
    pub fn instruments(&self) -> impl Iterator<Item = &Instrument> {
        self.latest.keys()
    }
}

impl VwapAggregator {
    /// Undo the insertion of `update`, putting back `previous` for its market.
    fn restore(&mut self, update: MarketUpdate, previous: Option<MarketUpdate>) {
        let instrument = update.two_way_price.instrument;
        let Some(markets) = self.latest.get_mut(&instrument) else {
            return;
        };
        match previous {
            Some(previous) => {
                markets.insert(update.market, previous);
            }
            None => {
                markets.remove(&update.market);
                if markets.is_empty() {
                    self.latest.remove(&instrument);
                }
            }
        }
    }
}

impl Calculator for VwapAggregator {
    /// Store `update` as the latest for its market and recompute the instrument's
    /// weighted bid and offer.
    ///
    /// Returns an error, leaving the stored state untouched, when any price or
    /// amount of the update is negative or not finite, or when the aggregation
    /// overflows to a non-finite price or volume.
    fn apply_market_update(&mut self, update: MarketUpdate) -> Result<TwoWayPrice> {
        update.two_way_price.validate()?;

        let trigger = update.two_way_price;
        let markets = self.latest.entry(trigger.instrument).or_default();
        let previous = markets.insert(update.market, update);
        if previous.is_none() {
            debug!(
                "New market {} for {} ({} markets known)",
                update.market,
                trigger.instrument,
                markets.len()
            );
        }

        let bid = if trigger.bid_amount > 0.0 {
            compute_weighted(markets.values(), Side::Bid)
        } else {
            WeightedResult::ZERO
        };
        let offer = if trigger.offer_amount > 0.0 {
            compute_weighted(markets.values(), Side::Offer)
        } else {
            WeightedResult::ZERO
        };

        let overflowed = if !bid.is_finite() {
            Some("bid")
        } else if !offer.is_finite() {
            Some("offer")
        } else {
            None
        };
        if let Some(side) = overflowed {
            self.restore(update, previous);
            return Err(VwapError::NonFiniteResult {
                side,
                instrument: trigger.instrument.to_string(),
            });
        }

        debug!(
            "Applied {} update for {}: bid {:.6}@{} offer {:.6}@{}",
            update.market,
            trigger.instrument,
            bid.price,
            bid.total_volume,
            offer.price,
            offer.total_volume
        );

        Ok(TwoWayPrice::new(
            trigger.instrument,
            trigger.state,
            bid.price,
            bid.total_volume,
            offer.price,
            offer.total_volume,
        ))
    }
}
