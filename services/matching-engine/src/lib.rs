//! Matching Engine
//!
//! Single-instrument limit order book implementing continuous double-auction
//! trading with price-time priority.
//!
//! **Key Invariants:**
//! - Price-time priority strictly enforced
//! - Deterministic matching (same inputs → same outputs)
//! - Conservation of quantity
//! - No empty price level survives a submission

pub mod book;
pub mod engine;
pub mod matching;
pub mod session;

pub use engine::{OrderBook, SubmitResult};
pub use session::{OrderSource, TradeSink};
