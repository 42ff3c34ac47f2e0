//! Instrument, market and state identifiers shared by the calculator and the feed.
//!
//! The aggregation core only needs these to be equatable and hashable; the extra
//! derives let the binaries parse them from the command line, from text files and
//! from JSON lines.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::BufRead;
use strum_macros::{Display, EnumIter, EnumString};

use crate::error::VwapError;

/// Trait providing file parsing for instruments.
pub trait InstrumentParser {
    /// Parses instruments from a buffered reader.
    ///
    /// Each non-empty line is parsed as a single `Instrument` value using `FromStr`.
    /// Returns an error if any line cannot be parsed.
    fn parse_from_file<R: BufRead>(reader: R) -> Result<Vec<Instrument>, VwapError>;
}

impl InstrumentParser for Instrument {
    fn parse_from_file<R: BufRead>(reader: R) -> Result<Vec<Self>, VwapError> {
        let mut instruments = Vec::new();

        for line_result in reader.lines() {
            let line = line_result.map_err(VwapError::Io)?;
            let trimmed_line = line.trim();
            if trimmed_line.is_empty() {
                continue;
            }

            match trimmed_line.parse::<Self>() {
                Ok(instrument) => instruments.push(instrument),
                Err(e) => {
                    return Err(VwapError::ParseInstrumentsFile(format!(
                        "{}: {}",
                        trimmed_line, e
                    )));
                }
            }
        }
        Ok(instruments)
    }
}

/// Tradable instruments a two-way price can refer to.
#[allow(missing_docs)]
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    ValueEnum,
    Display,
    EnumString,
    EnumIter,
    Hash,
    Eq,
    PartialEq,
)]
#[clap(rename_all = "lower")]
#[strum(ascii_case_insensitive)]
pub enum Instrument {
    INSTRUMENT0,
    INSTRUMENT1,
    INSTRUMENT2,
    INSTRUMENT3,
    INSTRUMENT4,
    INSTRUMENT5,
    INSTRUMENT6,
    INSTRUMENT7,
    INSTRUMENT8,
    INSTRUMENT9,
    INSTRUMENT10,
    INSTRUMENT11,
    INSTRUMENT12,
    INSTRUMENT13,
    INSTRUMENT14,
    INSTRUMENT15,
    INSTRUMENT16,
    INSTRUMENT17,
    INSTRUMENT18,
    INSTRUMENT19,
}

/// Venues a market update can originate from.
#[allow(missing_docs)]
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    ValueEnum,
    Display,
    EnumString,
    EnumIter,
    Hash,
    Eq,
    PartialEq,
)]
#[clap(rename_all = "lower")]
#[strum(ascii_case_insensitive)]
pub enum Market {
    MARKET0,
    MARKET1,
    MARKET2,
    MARKET3,
    MARKET4,
    MARKET5,
    MARKET6,
    MARKET7,
    MARKET8,
    MARKET9,
    MARKET10,
    MARKET11,
    MARKET12,
    MARKET13,
    MARKET14,
    MARKET15,
    MARKET16,
    MARKET17,
    MARKET18,
    MARKET19,
    MARKET20,
    MARKET21,
    MARKET22,
    MARKET23,
    MARKET24,
    MARKET25,
    MARKET26,
    MARKET27,
    MARKET28,
    MARKET29,
    MARKET30,
    MARKET31,
    MARKET32,
    MARKET33,
    MARKET34,
    MARKET35,
    MARKET36,
    MARKET37,
    MARKET38,
    MARKET39,
    MARKET40,
    MARKET41,
    MARKET42,
    MARKET43,
    MARKET44,
    MARKET45,
    MARKET46,
    MARKET47,
    MARKET48,
    MARKET49,
}

/// Status of a quote, carried through the aggregation unchanged.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    ValueEnum,
    Display,
    EnumString,
    EnumIter,
    Hash,
    Eq,
    PartialEq,
)]
#[clap(rename_all = "lower")]
#[strum(ascii_case_insensitive)]
pub enum State {
    /// Executable price.
    FIRM,
    /// Price for information only.
    INDICATIVE,
}

#[cfg(test)]
mod tests {
    use super::{Instrument, InstrumentParser, Market, State};
    use crate::error::VwapError;
    use std::io::Cursor;
    use strum::IntoEnumIterator;

    #[test]
    fn test_that_parser_skips_blank_lines_and_ignores_case() {
        let input = Cursor::new("INSTRUMENT0\n\n  instrument7  \nInstrument19\n");
        let instruments = Instrument::parse_from_file(input).unwrap();
        assert_eq!(
            instruments,
            vec![
                Instrument::INSTRUMENT0,
                Instrument::INSTRUMENT7,
                Instrument::INSTRUMENT19
            ]
        );
    }

    #[test]
    fn test_that_parser_rejects_unknown_instrument() {
        let input = Cursor::new("INSTRUMENT0\nINSTRUMENT20\n");
        let res = Instrument::parse_from_file(input);
        assert!(matches!(res, Err(VwapError::ParseInstrumentsFile(_))));
    }

    #[test]
    fn test_that_identifier_sets_are_closed() {
        assert_eq!(Instrument::iter().count(), 20);
        assert_eq!(Market::iter().count(), 50);
        assert_eq!(State::iter().count(), 2);
    }

    #[test]
    fn test_that_identifiers_serialize_by_name() {
        let json = serde_json::to_string(&Market::MARKET12).unwrap();
        assert_eq!(json, "\"MARKET12\"");
        let state: State = serde_json::from_str("\"INDICATIVE\"").unwrap();
        assert_eq!(state, State::INDICATIVE);
        assert_eq!(Instrument::INSTRUMENT3.to_string(), "INSTRUMENT3");
    }
}
