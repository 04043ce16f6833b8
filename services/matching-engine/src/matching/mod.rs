//! Matching logic module
//!
//! Crossing detection and per-submission trade report aggregation.

pub mod crossing;
pub mod report;

pub use crossing::crosses;
pub use report::TradeReport;
