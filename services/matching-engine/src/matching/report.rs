//! Per-submission trade report aggregation
//!
//! Two groupings accumulate during one submission and are discarded after
//! rendering:
//! - resting fills keyed by (counterparty id, counterparty price), summed
//!   across however many individual resting orders at that id+price were
//!   consumed;
//! - aggressor fills keyed by settlement price, summed regardless of which
//!   resting trader supplied them.
//!
//! The same trader resting at two different prices produces two separate
//! records, even within one submission; grouping is never collapsed by id
//! alone.

use std::collections::{BTreeMap, BTreeSet};
use types::ids::TraderId;
use types::numeric::{Price, Quantity};
use types::order::Side;
use types::trade::ExecutionRecord;

/// Aggregation state for the execution lifecycle of one incoming order.
#[derive(Debug)]
pub struct TradeReport {
    /// The incoming order's trader
    aggressor: TraderId,
    /// The incoming order's side
    side: Side,
    /// (counterparty id, counterparty price) → filled quantity
    resting: BTreeMap<(TraderId, Price), Quantity>,
    /// settlement price → aggressor filled quantity
    taken: BTreeMap<Price, Quantity>,
}

impl TradeReport {
    /// Start an empty report for one incoming order
    pub fn new(aggressor: TraderId, side: Side) -> Self {
        Self {
            aggressor,
            side,
            resting: BTreeMap::new(),
            taken: BTreeMap::new(),
        }
    }

    /// Record one fill of `quantity` against `counterparty` resting at `price`
    pub fn record_fill(&mut self, counterparty: &TraderId, price: Price, quantity: Quantity) {
        *self
            .resting
            .entry((counterparty.clone(), price))
            .or_insert(Quantity::zero()) += quantity;
        *self.taken.entry(price).or_insert(Quantity::zero()) += quantity;
    }

    /// Check whether any fills were recorded
    pub fn is_empty(&self) -> bool {
        self.taken.is_empty()
    }

    /// Render the report line: the lexicographically ordered set of execution
    /// records, space-joined. Returns None when no fills were recorded.
    pub fn render(self) -> Option<String> {
        if self.is_empty() {
            return None;
        }

        // A set of rendered strings: deterministic order, accidental
        // duplicates collapse
        let mut records = BTreeSet::new();

        let resting_side = self.side.opposite();
        for ((trader, price), quantity) in self.resting {
            records.insert(ExecutionRecord::new(trader, resting_side, quantity, price).render());
        }
        for (price, quantity) in self.taken {
            records.insert(
                ExecutionRecord::new(self.aggressor.clone(), self.side, quantity, price).render(),
            );
        }

        Some(records.into_iter().collect::<Vec<_>>().join(" "))
    }
}
