//!
//! Common types and utilities shared by the VWAP calculator and the feed.
//!
//! This crate aggregates:
//! - `error` — unified error type `VwapError` used across the workspace.
//! - `result` — handy `Result<T, VwapError>` alias.
//! - `ids` — instrument, market and state identifiers plus file parsing.
//! - `price` — the `TwoWayPrice` value and its validation.
//! - `update` — the `MarketUpdate` value and its JSON line encoding.
#![warn(missing_docs)]
pub mod error;
pub mod ids;
pub mod price;
pub mod result;
pub mod update;

pub use error::VwapError;
pub use ids::{Instrument, Market, State};
pub use price::TwoWayPrice;
pub use result::Result;
pub use update::MarketUpdate;
