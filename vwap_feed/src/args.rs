//! Command-line arguments for the VWAP feed.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::Parser;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to a text file with instruments to simulate, one per line.
    /// All instruments are simulated when omitted.
    #[clap(long)]
    pub path: Option<String>,

    /// Number of markets quoting each instrument (MARKET0 upwards).
    #[clap(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=50))]
    pub markets: u8,

    /// Stop after this many updates. Runs until Ctrl+C when omitted.
    #[clap(long)]
    pub count: Option<usize>,

    /// Pause between two updates, in milliseconds.
    #[clap(long, default_value_t = 500)]
    pub interval_ms: u64,

    /// Probability that an update is INDICATIVE rather than FIRM.
    #[clap(long, default_value_t = 0.0)]
    pub indicative_ratio: f64,
}
