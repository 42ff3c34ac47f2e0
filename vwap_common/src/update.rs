//! Market update model.

use serde::{Deserialize, Serialize};

use crate::ids::Market;
use crate::price::TwoWayPrice;

/// One market's current two-way price for one instrument.
///
/// The instrument is carried inside `two_way_price`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketUpdate {
    /// Venue the price was observed on.
    pub market: Market,
    /// The observed bid and offer.
    pub two_way_price: TwoWayPrice,
}

impl MarketUpdate {
    /// Creates a new market update.
    pub fn new(market: Market, two_way_price: TwoWayPrice) -> Self {
        MarketUpdate {
            market,
            two_way_price,
        }
    }

    /// Decode a single update from a JSON line.
    pub fn from_json(line: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(line)?)
    }

    /// Encode the update as a single JSON line (without the trailing newline).
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
