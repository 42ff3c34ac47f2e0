//! VWAP Feed — writes synthetic market updates to stdout as JSON lines so they can
//! be piped into the calculator. Instruments come from a text file (one per line)
//! or default to the full set; each is quoted by the first `--markets` markets.
//!
//! Usage example (CLI):
//! ```bash
//! vwap_feed --path ./instruments.txt --markets 5 --interval-ms 100 | vwap_calculator
//! ```
//!
//! Logs go to stderr; stdout carries only updates. The feed stops after `--count`
//! updates, on Ctrl+C, or when the reading side of the pipe goes away.
#![warn(missing_docs)]
mod args;
mod model;
mod sender;

use crate::args::Args;
use crate::model::update_generator::UpdateGenerator;
use crate::sender::UpdateSender;
use clap::Parser;
use log::{info, warn};
use std::fs::File;
use std::io::{self, BufReader, ErrorKind};
use std::path::PathBuf;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use std::thread;
use std::time::Duration;
use strum::IntoEnumIterator;
use vwap_common::ids::InstrumentParser;
use vwap_common::{Instrument, Market, Result, VwapError};

fn main() -> Result<(), VwapError> {
    init_logger();
    let args = Args::parse();
    let shutdown = Arc::new(AtomicBool::new(false));
    {
        let shutdown = shutdown.clone();
        ctrlc::set_handler(move || {
            info!("Ctrl+C received. Shutting down feed...");
            shutdown.store(true, Ordering::SeqCst);
        })
        .map_err(|e| VwapError::Format(format!("Failed to set Ctrl+C handler: {}", e)))?;
    }

    let instruments = match &args.path {
        Some(raw) => {
            let file_path = normalize_path(raw);
            if !is_file_exist(&file_path) {
                return Err(VwapError::Format(format!(
                    "Instruments file not found: {}",
                    file_path.display()
                )));
            }
            let file = File::open(file_path)?;
            Instrument::parse_from_file(BufReader::new(file))?
        }
        None => Instrument::iter().collect(),
    };
    let markets: Vec<Market> = Market::iter().take(usize::from(args.markets)).collect();
    info!(
        "Simulating {} instruments over {} markets",
        instruments.len(),
        markets.len()
    );

    let mut generator =
        UpdateGenerator::new(instruments, markets, args.indicative_ratio, rand::rng())?;
    let mut sender = UpdateSender::new(io::stdout().lock());
    let interval = Duration::from_millis(args.interval_ms);

    while !shutdown.load(Ordering::Relaxed) {
        if args.count.is_some_and(|limit| sender.sent() >= limit) {
            break;
        }

        let update = generator.next_update();
        match sender.send(&update) {
            Ok(()) => {}
            Err(VwapError::Io(e)) if e.kind() == ErrorKind::BrokenPipe => {
                warn!("Downstream closed the pipe");
                break;
            }
            Err(e) => return Err(e),
        }

        if !interval.is_zero() {
            thread::sleep(interval);
        }
    }

    info!("Feed stopped after {} updates", sender.sent());
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

/// Normalize a CLI-provided path string by trimming whitespace and matching quotes.
///
/// This allows passing Windows paths in quotes without breaking parsing.
fn normalize_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let no_quotes = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    PathBuf::from(no_quotes)
}

/// Returns `true` if the provided path exists and is a regular file.
fn is_file_exist(path: &PathBuf) -> bool {
    path.exists() && path.is_file()
}
