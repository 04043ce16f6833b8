//! Order types
//!
//! An order is the unit of work for the book: an incoming request and a
//! resting order share the same shape. Quantity is the remaining unfilled
//! amount and is decremented in place as fills occur.

use crate::errors::OrderError;
use crate::ids::TraderId;
use crate::numeric::{Price, Quantity};
use serde::{Deserialize, Serialize};

/// Order side (buyer or seller)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Buy order (bid)
    Buy,
    /// Sell order (ask)
    Sell,
}

impl Side {
    /// Get the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }

    /// Execution-record sign for this side: a purchase is `+`, a sale is `-`
    pub fn sign(&self) -> char {
        match self {
            Side::Buy => '+',
            Side::Sell => '-',
        }
    }
}

/// A limit order, either incoming or resting.
///
/// The trader identifier is not unique per order; matching never needs to
/// look an order up by identity, only to consume queues front-to-back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub trader: TraderId,
    pub side: Side,
    pub quantity: Quantity,
    pub price: Price,
}

impl Order {
    /// Create an order without validation.
    ///
    /// The matching core trusts its inputs; boundary validation belongs to
    /// the feed collaborator (see [`Order::try_new`]).
    pub fn new(trader: TraderId, side: Side, quantity: Quantity, price: Price) -> Self {
        Self {
            trader,
            side,
            quantity,
            price,
        }
    }

    /// Create an order, rejecting requests that can never rest or trade
    pub fn try_new(
        trader: TraderId,
        side: Side,
        quantity: Quantity,
        price: Price,
    ) -> Result<Self, OrderError> {
        if trader.is_empty() {
            return Err(OrderError::EmptyTraderId);
        }
        if quantity.is_zero() {
            return Err(OrderError::ZeroQuantity);
        }
        Ok(Self::new(trader, side, quantity, price))
    }

    /// Consume `dec` units of the remaining quantity.
    ///
    /// # Panics
    /// Panics if `dec` exceeds the remaining quantity.
    pub fn fill(&mut self, dec: Quantity) {
        assert!(dec <= self.quantity, "fill exceeds remaining quantity");
        self.quantity -= dec;
    }

    /// Check if the order has no remaining quantity
    pub fn is_filled(&self) -> bool {
        self.quantity.is_zero()
    }
}
