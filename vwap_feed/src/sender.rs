//! Writing market updates downstream as JSON lines.
use log::debug;
use std::io::Write;
use vwap_common::{MarketUpdate, Result};

/// Helper type for sending updates to a writer, one JSON object per line.
pub struct UpdateSender<W: Write> {
    writer: W,
    sent: usize,
}

impl<W: Write> UpdateSender<W> {
    /// Wrap `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer, sent: 0 }
    }

    /// Encode `update`, write it followed by a newline and flush.
    pub fn send(&mut self, update: &MarketUpdate) -> Result<()> {
        let line = update.to_json()?;
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        self.sent += 1;
        debug!("Sent update #{}: {}", self.sent, line);
        Ok(())
    }

    /// Number of updates written so far.
    pub fn sent(&self) -> usize {
        self.sent
    }
}

#[cfg(test)]
mod tests {
    use super::UpdateSender;
    use vwap_common::{Instrument, Market, MarketUpdate, State, TwoWayPrice};

    #[test]
    fn test_that_sent_lines_decode_back() {
        let update = MarketUpdate::new(
            Market::MARKET2,
            TwoWayPrice::new(Instrument::INSTRUMENT9, State::FIRM, 99.5, 10.0, 100.5, 0.0),
        );
        let mut buf = Vec::new();
        let mut sender = UpdateSender::new(&mut buf);
        sender.send(&update).unwrap();
        sender.send(&update).unwrap();
        assert_eq!(sender.sent(), 2);
        drop(sender);

        let output = String::from_utf8(buf).unwrap();
        let decoded: Vec<MarketUpdate> = output
            .lines()
            .map(|line| MarketUpdate::from_json(line).unwrap())
            .collect();
        assert_eq!(decoded, vec![update, update]);
    }
}
