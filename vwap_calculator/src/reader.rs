//! Line-oriented market update reader.
//!
//! Reads JSON-encoded `MarketUpdate`s, one per line, and forwards them into a
//! channel. A line that fails to decode is logged and skipped so one bad record
//! never stops the stream.
use crossbeam_channel::Sender;
use log::{debug, info, warn};
use std::io::BufRead;
use vwap_common::{MarketUpdate, Result, VwapError};

/// Message sent by the reader to the aggregation loop.
#[derive(Debug, Clone)]
pub enum FeedEvent {
    /// A decoded market update.
    Update(MarketUpdate),
    /// The input is exhausted.
    Eof,
}

/// Counters reported when the reader finishes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReadStats {
    /// Non-empty lines seen.
    pub lines: usize,
    /// Lines decoded into updates and forwarded.
    pub forwarded: usize,
    /// Lines that failed to decode.
    pub skipped: usize,
}

/// Reads market updates from a buffered source.
pub struct UpdateReader<R> {
    reader: R,
    /// Human-readable name of the source for log messages.
    source: String,
}

impl<R: BufRead> UpdateReader<R> {
    /// Wrap `reader`; `source` names it in log messages (e.g. a path or `stdin`).
    pub fn new(reader: R, source: impl Into<String>) -> Self {
        Self {
            reader,
            source: source.into(),
        }
    }

    /// Blocking loop that decodes every line and forwards it to `tx`, followed by
    /// a final `FeedEvent::Eof`.
    ///
    /// Fails on I/O errors or when the receiving side of `tx` is gone.
    pub fn read_loop_with_channel(self, tx: Sender<FeedEvent>) -> Result<ReadStats> {
        info!("Reading market updates from {}", self.source);
        let mut stats = ReadStats::default();

        for (index, line_result) in self.reader.lines().enumerate() {
            let line = line_result?;
            let trimmed_line = line.trim();
            if trimmed_line.is_empty() {
                continue;
            }
            stats.lines += 1;

            match MarketUpdate::from_json(trimmed_line) {
                Ok(update) => {
                    debug!("Read update {:?}", update);
                    tx.send(FeedEvent::Update(update))
                        .map_err(|e| VwapError::ChannelSend(e.to_string()))?;
                    stats.forwarded += 1;
                }
                Err(e) => {
                    warn!(
                        "{}:{}: skipping malformed update: {}",
                        self.source,
                        index + 1,
                        e
                    );
                    stats.skipped += 1;
                }
            }
        }

        tx.send(FeedEvent::Eof)
            .map_err(|e| VwapError::ChannelSend(e.to_string()))?;
        Ok(stats)
    }
}
