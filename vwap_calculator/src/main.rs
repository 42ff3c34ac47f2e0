//! VWAP calculator.
//!
//! This binary reads market updates as JSON lines, feeds them through a
//! `VwapAggregator` and writes the resulting volume-weighted two-way prices to
//! stdout, one JSON object per line. It wires together:
//!
//! - `UpdateReader` — a background thread decoding updates from a file or stdin
//!   and forwarding them as `FeedEvent`s over a `crossbeam_channel`.
//! - `VwapAggregator` — owned by the main thread, the only place state is mutated.
//! - `QuoteSink` — writes every computed quote (optionally filtered by instrument).
//!
//! Shutdown:
//! - The loop ends when the reader reports `FeedEvent::Eof` or when Ctrl+C is
//!   received.
//! - Updates rejected by validation are logged and dropped; the stream continues.
//!
//! Usage example:
//! ```bash
//! vwap_feed --count 1000 | vwap_calculator --instrument instrument0
//! ```
#![warn(missing_docs)]
mod args;

use crate::args::Args;
use clap::Parser;
use crossbeam_channel::{bounded, select, unbounded};
use log::{error, info, warn};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::thread;
use vwap_calculator::reader::{FeedEvent, UpdateReader};
use vwap_calculator::sink::QuoteSink;
use vwap_calculator::{Calculator, VwapAggregator};
use vwap_common::{Result, VwapError};

fn main() -> Result<(), VwapError> {
    init_logger();
    let args = Args::parse();

    let (shutdown_tx, shutdown_rx) = bounded::<()>(1);
    ctrlc::set_handler(move || {
        info!("Ctrl+C received. Shutting down calculator...");
        let _ = shutdown_tx.try_send(());
    })
    .map_err(|e| VwapError::Format(format!("Failed to set Ctrl+C handler: {}", e)))?;

    let (source, source_name): (Box<dyn BufRead + Send>, String) = match &args.input {
        Some(raw) => {
            let path = normalize_path(raw);
            let file = File::open(&path)?;
            (Box::new(BufReader::new(file)), path.display().to_string())
        }
        None => (Box::new(BufReader::new(io::stdin())), String::from("stdin")),
    };

    let (update_tx, update_rx) = unbounded::<FeedEvent>();
    thread::spawn(move || {
        match UpdateReader::new(source, source_name).read_loop_with_channel(update_tx) {
            Ok(stats) => info!(
                "Reader finished: {} lines, {} forwarded, {} skipped",
                stats.lines, stats.forwarded, stats.skipped
            ),
            Err(e) => error!("Reader loop failed: {}", e),
        }
    });

    let mut aggregator = VwapAggregator::new();
    let mut sink = QuoteSink::new(io::stdout().lock(), &args.instrument);
    let mut applied = 0usize;
    let mut rejected = 0usize;

    loop {
        select! {
            recv(shutdown_rx) -> _ => break,
            recv(update_rx) -> msg => match msg {
                Ok(FeedEvent::Update(update)) => match aggregator.apply_market_update(update) {
                    Ok(vwap) => {
                        applied += 1;
                        sink.publish(vwap)?;
                    }
                    Err(e) => {
                        rejected += 1;
                        warn!(
                            "Rejected update from {} for {}: {}",
                            update.market, update.two_way_price.instrument, e
                        );
                    }
                },
                Ok(FeedEvent::Eof) => break,
                Err(e) => {
                    error!("Update channel closed unexpectedly: {}", e);
                    return Err(VwapError::ChannelRecv(e.to_string()));
                }
            }
        }
    }

    info!(
        "Calculator stopped: {} updates applied, {} rejected, {} instruments tracked",
        applied,
        rejected,
        aggregator.instruments().count()
    );
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

/// Normalize a CLI-provided path string by trimming whitespace and matching quotes.
fn normalize_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let no_quotes = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    PathBuf::from(no_quotes)
}
