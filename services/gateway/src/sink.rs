//! Stdout-backed trade sink

use std::io::{self, Write};

use matching_engine::TradeSink;

/// A `TradeSink` writing one report line per trading submission.
pub struct StdoutSink<W> {
    writer: W,
}

impl<W: Write> StdoutSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> TradeSink for StdoutSink<W> {
    fn publish(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{line}")?;
        self.writer.flush()
    }
}
