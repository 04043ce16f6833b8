//! Stdin-backed order source
//!
//! Yields parsed requests in arrival order. Blank lines are skipped; the
//! first malformed line or read failure ends the feed, as does
//! end-of-stream.

use std::io::BufRead;

use matching_engine::OrderSource;
use tracing::warn;
use types::order::Order;

use crate::parser::parse_request;

/// An `OrderSource` reading the text protocol from a buffered reader.
pub struct StdinSource<R> {
    reader: R,
    halted: bool,
}

impl<R: BufRead> StdinSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            halted: false,
        }
    }
}

impl<R: BufRead> OrderSource for StdinSource<R> {
    fn next_order(&mut self) -> Option<Order> {
        if self.halted {
            return None;
        }

        let mut line = String::new();
        loop {
            line.clear();
            match self.reader.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => {
                    warn!(error = %e, "read failure, terminating feed");
                    self.halted = true;
                    return None;
                }
            }

            if line.trim().is_empty() {
                continue;
            }

            match parse_request(&line) {
                Ok(order) => return Some(order),
                Err(e) => {
                    warn!(error = %e, "malformed input, terminating feed");
                    self.halted = true;
                    return None;
                }
            }
        }
    }
}
