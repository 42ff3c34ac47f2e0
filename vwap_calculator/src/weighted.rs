//! One-sided volume-weighted price computation.
//!
//! Bid and offer are always computed independently: a single call only ever
//! reads the fields of one side, even though both sides are stored in the same
//! update.

use vwap_common::{MarketUpdate, TwoWayPrice};

/// Side of a two-way price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Bid price and bid amount.
    Bid,
    /// Offer price and offer amount.
    Offer,
}

impl Side {
    /// Price and amount of this side of `price`.
    pub fn of(self, price: &TwoWayPrice) -> (f64, f64) {
        match self {
            Side::Bid => (price.bid_price, price.bid_amount),
            Side::Offer => (price.offer_price, price.offer_amount),
        }
    }
}

/// Result of a one-sided weighted computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedResult {
    /// Volume-weighted price, `0.0` when `total_volume` is zero.
    pub price: f64,
    /// Sum of the amounts that contributed.
    pub total_volume: f64,
}

impl WeightedResult {
    /// Zero price and zero volume.
    pub const ZERO: WeightedResult = WeightedResult {
        price: 0.0,
        total_volume: 0.0,
    };

    /// Whether both price and volume are finite.
    pub fn is_finite(&self) -> bool {
        self.price.is_finite() && self.total_volume.is_finite()
    }
}

/// Compute `Σ(price_i * amount_i) / Σ(amount_i)` for `side` over `updates`.
///
/// Updates with a zero amount add nothing to either sum. When the total volume
/// is zero the result is [`WeightedResult::ZERO`].
pub fn compute_weighted<'a, I>(updates: I, side: Side) -> WeightedResult
where
    I: IntoIterator<Item = &'a MarketUpdate>,
{
    let (weighted_sum, total_volume) =
        updates
            .into_iter()
            .fold((0.0, 0.0), |(weighted_sum, total_volume), update| {
                let (price, amount) = side.of(&update.two_way_price);
                (weighted_sum + price * amount, total_volume + amount)
            });

    if total_volume == 0.0 {
        return WeightedResult::ZERO;
    }

    WeightedResult {
        price: weighted_sum / total_volume,
        total_volume,
    }
}

#[cfg(test)]
mod tests {
    use super::{Side, WeightedResult, compute_weighted};
    use vwap_common::{Instrument, Market, MarketUpdate, State, TwoWayPrice};

    fn update(market: Market, bid: (f64, f64), offer: (f64, f64)) -> MarketUpdate {
        MarketUpdate::new(
            market,
            TwoWayPrice::new(
                Instrument::INSTRUMENT0,
                State::FIRM,
                bid.0,
                bid.1,
                offer.0,
                offer.1,
            ),
        )
    }

    #[test]
    fn test_that_single_update_returns_its_own_price() {
        let updates = vec![update(Market::MARKET0, (10.0, 100.0), (0.0, 0.0))];
        let res = compute_weighted(&updates, Side::Bid);
        assert_eq!(res.price, 10.0);
        assert_eq!(res.total_volume, 100.0);
    }

    #[test]
    fn test_that_prices_are_blended_by_amount() {
        let updates = vec![
            update(Market::MARKET0, (10.0, 100.0), (12.0, 300.0)),
            update(Market::MARKET1, (20.0, 300.0), (14.0, 100.0)),
        ];

        let bid = compute_weighted(&updates, Side::Bid);
        assert_eq!(bid.price, 17.5);
        assert_eq!(bid.total_volume, 400.0);

        let offer = compute_weighted(&updates, Side::Offer);
        assert_eq!(offer.price, 12.5);
        assert_eq!(offer.total_volume, 400.0);
    }

    #[test]
    fn test_that_zero_amount_markets_do_not_move_the_price() {
        let updates = vec![
            update(Market::MARKET0, (10.0, 100.0), (0.0, 0.0)),
            update(Market::MARKET1, (99.0, 0.0), (0.0, 0.0)),
        ];
        let res = compute_weighted(&updates, Side::Bid);
        assert_eq!(res.price, 10.0);
        assert_eq!(res.total_volume, 100.0);
    }

    #[test]
    fn test_that_sides_do_not_mix() {
        let updates = vec![update(Market::MARKET0, (10.0, 0.0), (11.0, 50.0))];
        assert_eq!(compute_weighted(&updates, Side::Bid), WeightedResult::ZERO);
        let offer = compute_weighted(&updates, Side::Offer);
        assert_eq!(offer.price, 11.0);
        assert_eq!(offer.total_volume, 50.0);
    }

    #[test]
    fn test_that_empty_input_is_zero() {
        let updates: Vec<MarketUpdate> = Vec::new();
        assert_eq!(
            compute_weighted(&updates, Side::Offer),
            WeightedResult::ZERO
        );
    }
}
