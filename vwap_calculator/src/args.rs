//! Command-line arguments for the VWAP calculator.
use clap::Parser;
use vwap_common::Instrument;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to a JSON-lines file of market updates. Reads stdin when omitted.
    #[clap(long)]
    pub input: Option<String>,

    /// Only publish quotes for this instrument. May be repeated.
    /// Updates for other instruments are still applied.
    #[clap(long, value_enum)]
    pub instrument: Vec<Instrument>,
}
