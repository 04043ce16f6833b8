//! Processing loop and boundary seams
//!
//! The book is exclusively owned by one synchronous loop: orders are pulled
//! from an [`OrderSource`] in arrival order, each submission runs to
//! completion, and each rendered report is pushed to the [`TradeSink`]
//! before the next order is processed.

use std::io;
use tracing::debug;

use crate::engine::{OrderBook, SubmitResult};
use types::order::Order;

/// Upstream collaborator: yields parsed order requests in arrival order.
///
/// Returning `None` ends the feed; a source is expected to treat malformed
/// input as end-of-stream.
pub trait OrderSource {
    fn next_order(&mut self) -> Option<Order>;
}

/// Downstream collaborator: consumes rendered report lines in order.
pub trait TradeSink {
    fn publish(&mut self, line: &str) -> io::Result<()>;
}

/// Drain `source` into `book`, forwarding each report line to `sink`.
///
/// Returns the number of orders processed.
pub fn run(
    book: &mut OrderBook,
    source: &mut impl OrderSource,
    sink: &mut impl TradeSink,
) -> io::Result<u64> {
    let mut processed = 0u64;

    while let Some(order) = source.next_order() {
        let trader = order.trader.clone();
        let result = book.submit(order);

        match &result {
            SubmitResult::Rested => {
                debug!(trader = %trader, "order rested");
            }
            SubmitResult::PartiallyFilled { report } => {
                debug!(trader = %trader, %report, "partial fill");
                sink.publish(report)?;
            }
            SubmitResult::Filled { report } => {
                debug!(trader = %trader, %report, "full fill");
                sink.publish(report)?;
            }
        }

        processed += 1;
    }

    Ok(processed)
}
