//! Output sink for computed VWAP quotes.
//!
//! A `PublishedQuote` is the payload written downstream: the aggregated two-way
//! price plus a millisecond UTC timestamp, encoded as one JSON object per line.

use chrono::Utc;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::Write;
use vwap_common::{Instrument, Result, TwoWayPrice};

/// Aggregated quote as written to the sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublishedQuote {
    /// The VWAP two-way price; amounts are summed volumes.
    #[serde(flatten)]
    pub quote: TwoWayPrice,
    /// UTC timestamp in milliseconds since Unix epoch.
    pub timestamp: u64,
}

impl PublishedQuote {
    /// Stamp `quote` with the current time.
    pub fn now(quote: TwoWayPrice) -> Self {
        Self {
            quote,
            timestamp: Utc::now().timestamp_millis() as u64,
        }
    }

    /// Encode the quote to JSON bytes.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>> {
        let json = serde_json::to_vec(self)?;
        Ok(json)
    }
}

/// Writes published quotes as JSON lines, optionally restricted to a set of instruments.
pub struct QuoteSink<W: Write> {
    writer: W,
    /// Instruments to publish; empty means all.
    instruments: HashSet<Instrument>,
}

impl<W: Write> QuoteSink<W> {
    /// Create a sink over `writer`. An empty `instruments` slice publishes everything.
    pub fn new(writer: W, instruments: &[Instrument]) -> Self {
        Self {
            writer,
            instruments: instruments.iter().copied().collect(),
        }
    }

    /// Write `quote` if its instrument passes the filter. Returns whether it was written.
    pub fn publish(&mut self, quote: TwoWayPrice) -> Result<bool> {
        if !self.instruments.is_empty() && !self.instruments.contains(&quote.instrument) {
            debug!("Filtered quote for {}", quote.instrument);
            return Ok(false);
        }

        let data = PublishedQuote::now(quote).to_json_bytes()?;
        self.writer.write_all(&data)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(true)
    }
}
