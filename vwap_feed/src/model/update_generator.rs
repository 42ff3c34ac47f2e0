//! Synthetic market update generator.
//!
//! Each (instrument, market) pair keeps its own mid price, moved by a small random
//! walk on every tick it is picked for. Bid and offer straddle the mid with a
//! random spread, and amounts are random with an occasional empty side so the
//! downstream zero-volume handling gets exercised.

use rand::Rng;
use std::collections::HashMap;
use vwap_common::{Instrument, Market, MarketUpdate, Result, State, TwoWayPrice, VwapError};

/// Mid price every pair starts from.
const INITIAL_MID: f64 = 100.0;
/// Lowest mid the random walk can reach.
const MIN_MID: f64 = 0.01;
/// Upper bound of a single side's amount.
const MAX_AMOUNT: u32 = 5000;
/// Chance that a side is quoted with zero amount.
const EMPTY_SIDE_RATIO: f64 = 0.1;

/// Produces random `MarketUpdate`s over a fixed set of instruments and markets.
pub struct UpdateGenerator<R: Rng> {
    rng: R,
    instruments: Vec<Instrument>,
    markets: Vec<Market>,
    indicative_ratio: f64,
    mids: HashMap<(Instrument, Market), f64>,
}

impl<R: Rng> UpdateGenerator<R> {
    /// Create a generator. Fails when either set is empty or `indicative_ratio`
    /// is outside `[0, 1]`.
    pub fn new(
        instruments: Vec<Instrument>,
        markets: Vec<Market>,
        indicative_ratio: f64,
        rng: R,
    ) -> Result<Self> {
        if instruments.is_empty() {
            return Err(VwapError::Format(String::from("No instruments to simulate")));
        }
        if markets.is_empty() {
            return Err(VwapError::Format(String::from("No markets to simulate")));
        }
        if !(0.0..=1.0).contains(&indicative_ratio) {
            return Err(VwapError::Format(format!(
                "Indicative ratio must be within [0, 1], got {}",
                indicative_ratio
            )));
        }

        Ok(Self {
            rng,
            instruments,
            markets,
            indicative_ratio,
            mids: HashMap::new(),
        })
    }

    /// Calculate the next mid using a small random walk around `current`.
    ///
    /// The change is sampled uniformly from `[-1%, +1%]` and the result is clamped
    /// to `MIN_MID`.
    fn next_mid(&mut self, current: f64) -> f64 {
        let change: f64 = self.rng.random_range(-0.01..0.01);
        (current * (1.0 + change)).max(MIN_MID)
    }

    fn next_amount(&mut self) -> f64 {
        if self.rng.random_bool(EMPTY_SIDE_RATIO) {
            0.0
        } else {
            f64::from(self.rng.random_range(1..=MAX_AMOUNT))
        }
    }

    /// Generate the next update for a randomly picked (instrument, market) pair.
    pub fn next_update(&mut self) -> MarketUpdate {
        let instrument = self.instruments[self.rng.random_range(0..self.instruments.len())];
        let market = self.markets[self.rng.random_range(0..self.markets.len())];

        let current = self
            .mids
            .get(&(instrument, market))
            .copied()
            .unwrap_or(INITIAL_MID);
        let mid = self.next_mid(current);
        self.mids.insert((instrument, market), mid);

        let half_spread = mid * self.rng.random_range(0.001..0.005) / 2.0;
        let state = if self.rng.random_bool(self.indicative_ratio) {
            State::INDICATIVE
        } else {
            State::FIRM
        };
        let bid_amount = self.next_amount();
        let offer_amount = self.next_amount();

        MarketUpdate::new(
            market,
            TwoWayPrice::new(
                instrument,
                state,
                (mid - half_spread).max(0.0),
                bid_amount,
                mid + half_spread,
                offer_amount,
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::UpdateGenerator;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use vwap_common::{Instrument, Market, State, VwapError};

    fn generator(indicative_ratio: f64) -> UpdateGenerator<StdRng> {
        UpdateGenerator::new(
            vec![Instrument::INSTRUMENT0, Instrument::INSTRUMENT1],
            vec![Market::MARKET0, Market::MARKET1, Market::MARKET2],
            indicative_ratio,
            StdRng::seed_from_u64(7),
        )
        .unwrap()
    }

    #[test]
    fn test_that_generated_updates_are_valid_and_in_range() {
        let mut generator = generator(0.0);
        for _ in 0..1000 {
            let update = generator.next_update();
            let price = update.two_way_price;
            assert!(price.validate().is_ok());
            assert!(price.bid_price < price.offer_price);
            assert!(price.bid_amount <= 5000.0);
            assert!(price.offer_amount <= 5000.0);
            assert_eq!(price.state, State::FIRM);
            assert!(matches!(
                price.instrument,
                Instrument::INSTRUMENT0 | Instrument::INSTRUMENT1
            ));
            assert!(matches!(
                update.market,
                Market::MARKET0 | Market::MARKET1 | Market::MARKET2
            ));
        }
    }

    #[test]
    fn test_that_indicative_ratio_one_marks_every_update() {
        let mut generator = generator(1.0);
        for _ in 0..100 {
            assert_eq!(generator.next_update().two_way_price.state, State::INDICATIVE);
        }
    }

    #[test]
    fn test_that_first_tick_stays_near_initial_mid() {
        let mut generator = generator(0.0);
        let price = generator.next_update().two_way_price;
        let mid = (price.bid_price + price.offer_price) / 2.0;
        assert!((mid - 100.0).abs() <= 1.0);
    }

    #[test]
    fn test_that_empty_sets_and_bad_ratio_are_rejected() {
        let res = UpdateGenerator::new(
            Vec::new(),
            vec![Market::MARKET0],
            0.0,
            StdRng::seed_from_u64(1),
        );
        assert!(matches!(res, Err(VwapError::Format(_))));

        let res = UpdateGenerator::new(
            vec![Instrument::INSTRUMENT0],
            vec![Market::MARKET0],
            1.5,
            StdRng::seed_from_u64(1),
        );
        assert!(matches!(res, Err(VwapError::Format(_))));
    }
}
