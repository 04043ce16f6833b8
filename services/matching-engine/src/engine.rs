//! Order book core: submission and matching
//!
//! An incoming order is first offered to the opposite half-book for
//! matching; any unfilled remainder is appended to its own half-book.
//! Each submission runs to completion before the next one is processed,
//! and `&mut self` makes concurrent book mutation impossible by
//! construction.

use types::numeric::Price;
use types::order::{Order, Side};

use crate::book::{AskBook, BidBook, PriceLevel};
use crate::matching::crossing::crosses;
use crate::matching::report::TradeReport;

/// Result of submitting an order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitResult {
    /// No fills; the order rested in full
    Rested,
    /// Some fills; the residual quantity rested
    PartiallyFilled { report: String },
    /// The order was completely filled
    Filled { report: String },
}

impl SubmitResult {
    /// The rendered report line, if the submission produced fills
    pub fn report(&self) -> Option<&str> {
        match self {
            SubmitResult::Rested => None,
            SubmitResult::PartiallyFilled { report } | SubmitResult::Filled { report } => {
                Some(report)
            }
        }
    }

    /// Check whether the incoming order filled completely
    pub fn is_filled(&self) -> bool {
        matches!(self, SubmitResult::Filled { .. })
    }
}

/// The order book for a single instrument.
///
/// Owns two independent half-books; matching walks the side opposite the
/// incoming order in price-time priority.
#[derive(Debug, Clone, Default)]
pub struct OrderBook {
    bids: BidBook,
    asks: AskBook,
}

impl OrderBook {
    /// Create a new empty order book
    pub fn new() -> Self {
        Self {
            bids: BidBook::new(),
            asks: AskBook::new(),
        }
    }

    /// Submit an order: match against the opposite side, then rest any
    /// residual quantity.
    ///
    /// # Panics
    /// Panics if the order quantity is zero; such requests must be rejected
    /// at the boundary.
    pub fn submit(&mut self, mut order: Order) -> SubmitResult {
        assert!(
            !order.quantity.is_zero(),
            "submitted order must have positive quantity"
        );

        let mut report = TradeReport::new(order.trader.clone(), order.side);

        match order.side {
            Side::Buy => Self::cross_asks(&mut self.asks, &mut order, &mut report),
            Side::Sell => Self::cross_bids(&mut self.bids, &mut order, &mut report),
        }

        let filled = order.is_filled();
        if !filled {
            match order.side {
                Side::Buy => self.bids.insert(order.trader, order.price, order.quantity),
                Side::Sell => self.asks.insert(order.trader, order.price, order.quantity),
            }
        }

        match report.render() {
            Some(report) if filled => SubmitResult::Filled { report },
            Some(report) => SubmitResult::PartiallyFilled { report },
            None => SubmitResult::Rested,
        }
    }

    /// Match an incoming buy against the ask side, best price first
    fn cross_asks(asks: &mut AskBook, order: &mut Order, report: &mut TradeReport) {
        while !order.is_filled() {
            let Some((level_price, level)) = asks.best_level_mut() else {
                break;
            };
            if !crosses(Side::Buy, order.price, level_price) {
                break;
            }

            Self::consume_level(level, level_price, order, report);
            asks.prune(level_price);
        }
    }

    /// Match an incoming sell against the bid side, best price first
    fn cross_bids(bids: &mut BidBook, order: &mut Order, report: &mut TradeReport) {
        while !order.is_filled() {
            let Some((level_price, level)) = bids.best_level_mut() else {
                break;
            };
            if !crosses(Side::Sell, order.price, level_price) {
                break;
            }

            Self::consume_level(level, level_price, order, report);
            bids.prune(level_price);
        }
    }

    /// Consume a crossed level front-to-back until the incoming order is
    /// filled or the queue is empty.
    fn consume_level(
        level: &mut PriceLevel,
        level_price: Price,
        order: &mut Order,
        report: &mut TradeReport,
    ) {
        while !order.is_filled() {
            let Some(front) = level.front_mut() else {
                break;
            };

            let dec = order.quantity.min(front.quantity);
            order.fill(dec);
            front.fill(dec);
            report.record_fill(&front.trader, level_price, dec);

            if front.quantity.is_zero() {
                level.pop_front();
            }
        }
    }

    /// Get the best bid price
    pub fn best_bid(&self) -> Option<Price> {
        self.bids.best_bid()
    }

    /// Get the best ask price
    pub fn best_ask(&self) -> Option<Price> {
        self.asks.best_ask()
    }

    /// Get the spread (best ask - best bid), when both sides are populated
    pub fn spread(&self) -> Option<i64> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(ask.ticks() - bid.ticks()),
            _ => None,
        }
    }

    /// The bid half-book
    pub fn bids(&self) -> &BidBook {
        &self.bids
    }

    /// The ask half-book
    pub fn asks(&self) -> &AskBook {
        &self.asks
    }
}
