//! Execution reporting types
//!
//! An execution record is the aggregated fill of one trader at one price
//! within a single submission, rendered as `<id><sign><quantity>@<price>`
//! with no interior spaces. The sign is the order's own side: a resting buy
//! that trades is reported as a purchase (`+`), a resting sell as a sale
//! (`-`), and likewise for the aggressor.

use crate::ids::TraderId;
use crate::numeric::{Price, Quantity};
use crate::order::Side;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One aggregated execution record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionRecord {
    pub trader: TraderId,
    pub side: Side,
    pub quantity: Quantity,
    pub price: Price,
}

impl ExecutionRecord {
    /// Create a new execution record
    pub fn new(trader: TraderId, side: Side, quantity: Quantity, price: Price) -> Self {
        Self {
            trader,
            side,
            quantity,
            price,
        }
    }

    /// Render the record in wire form
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ExecutionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}@{}",
            self.trader,
            self.side.sign(),
            self.quantity,
            self.price
        )
    }
}
