//! Error types shared between the calculator and the feed.
//!
//! `VwapError` covers I/O and JSON failures on the line-oriented boundaries,
//! channel plumbing in the calculator binary, and validation of incoming
//! two-way prices.
use std::io;

use thiserror::Error;

/// Unified error type shared across the workspace.
#[derive(Error, Debug)]
pub enum VwapError {
    /// I/O error originating from stdin/stdout or files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Generic formatting/validation error with a human-readable message.
    #[error("Format error: {0}")]
    Format(String),

    /// Error while parsing the instruments file into `Instrument` values.
    #[error("Parse instruments file error: {0}")]
    ParseInstrumentsFile(String),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// An amount is negative, NaN or infinite.
    #[error("Invalid amount for {field}: {value}")]
    InvalidAmount {
        /// Name of the offending field (`bid_amount` or `offer_amount`).
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A price is negative, NaN or infinite.
    #[error("Invalid price for {field}: {value}")]
    InvalidPrice {
        /// Name of the offending field (`bid_price` or `offer_price`).
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Aggregating valid inputs overflowed to a NaN or infinite price or volume.
    #[error("Non-finite {side} result for {instrument}")]
    NonFiniteResult {
        /// Side that overflowed (`bid` or `offer`).
        side: &'static str,
        /// Instrument whose aggregation overflowed.
        instrument: String,
    },

    /// Channel send failed (receiver dropped); contains a short context string.
    #[error("Channel send failed: {0}")]
    ChannelSend(String),

    /// Channel receive failed (sender closed); contains a short context string.
    #[error("Channel receive failed: {0}")]
    ChannelRecv(String),
}
