//! Two-way price model.
//!
//! A `TwoWayPrice` is a paired bid and offer (price + amount) for one instrument.
//! The same shape is used on input, where amounts are a single market's volume,
//! and on output, where amounts are the volume summed across every market known
//! for the instrument.

use serde::{Deserialize, Serialize};

use crate::error::VwapError;
use crate::ids::{Instrument, State};
use crate::result::Result;

/// Bid and offer for a single instrument.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TwoWayPrice {
    /// Instrument the prices refer to.
    pub instrument: Instrument,
    /// Status tag carried through unchanged.
    pub state: State,
    /// Bid price.
    pub bid_price: f64,
    /// Volume available at the bid.
    pub bid_amount: f64,
    /// Offer price.
    pub offer_price: f64,
    /// Volume available at the offer.
    pub offer_amount: f64,
}

impl TwoWayPrice {
    /// Creates a new two-way price.
    pub fn new(
        instrument: Instrument,
        state: State,
        bid_price: f64,
        bid_amount: f64,
        offer_price: f64,
        offer_amount: f64,
    ) -> Self {
        TwoWayPrice {
            instrument,
            state,
            bid_price,
            bid_amount,
            offer_price,
            offer_amount,
        }
    }

    /// Checks that every price and amount is finite and non-negative.
    ///
    /// The first offending field is reported, checked in declaration order.
    pub fn validate(&self) -> Result<()> {
        check_price("bid_price", self.bid_price)?;
        check_amount("bid_amount", self.bid_amount)?;
        check_price("offer_price", self.offer_price)?;
        check_amount("offer_amount", self.offer_amount)?;
        Ok(())
    }
}

fn check_price(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(VwapError::InvalidPrice { field, value })
    }
}

fn check_amount(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(VwapError::InvalidAmount { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::TwoWayPrice;
    use crate::error::VwapError;
    use crate::ids::{Instrument, State};

    fn price(bid_price: f64, bid_amount: f64, offer_price: f64, offer_amount: f64) -> TwoWayPrice {
        TwoWayPrice::new(
            Instrument::INSTRUMENT0,
            State::FIRM,
            bid_price,
            bid_amount,
            offer_price,
            offer_amount,
        )
    }

    #[test]
    fn test_that_zero_amounts_and_prices_are_valid() {
        assert!(price(0.0, 0.0, 0.0, 0.0).validate().is_ok());
        assert!(price(10.0, 100.0, 11.0, 50.0).validate().is_ok());
    }

    #[test]
    fn test_that_negative_amount_is_rejected() {
        let res = price(10.0, 100.0, 11.0, -1.0).validate();
        match res {
            Err(VwapError::InvalidAmount { field, value }) => {
                assert_eq!(field, "offer_amount");
                assert_eq!(value, -1.0);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_that_non_finite_values_are_rejected() {
        assert!(matches!(
            price(f64::NAN, 100.0, 11.0, 50.0).validate(),
            Err(VwapError::InvalidPrice { field: "bid_price", .. })
        ));
        assert!(matches!(
            price(10.0, f64::INFINITY, 11.0, 50.0).validate(),
            Err(VwapError::InvalidAmount { field: "bid_amount", .. })
        ));
        assert!(matches!(
            price(10.0, 100.0, -0.5, 50.0).validate(),
            Err(VwapError::InvalidPrice { field: "offer_price", .. })
        ));
    }
}
