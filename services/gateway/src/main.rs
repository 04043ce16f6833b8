//! Console gateway for the matching engine
//!
//! Reads whitespace-separated order requests from stdin, drives the book,
//! and prints one report line per submission that traded. Logs go to
//! stderr so stdout carries only report lines.

mod error;
mod parser;
mod sink;
mod source;

use matching_engine::{session, OrderBook};
use sink::StdoutSink;
use source::StdinSource;

fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("starting order feed gateway");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut source = StdinSource::new(stdin.lock());
    let mut sink = StdoutSink::new(stdout.lock());
    let mut book = OrderBook::new();

    let processed = session::run(&mut book, &mut source, &mut sink)?;

    tracing::info!(
        processed,
        bid_levels = book.bids().level_count(),
        ask_levels = book.asks().level_count(),
        "feed drained, shutting down"
    );

    Ok(())
}
