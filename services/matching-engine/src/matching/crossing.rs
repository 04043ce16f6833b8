//! Crossing detection logic
//!
//! Determines when an incoming limit is willing to trade against a resting
//! price level.

use types::numeric::Price;
use types::order::Side;

/// Check whether an incoming order crosses a resting level.
///
/// A buy crosses any level at or below its limit; a sell crosses any level
/// at or above its limit.
pub fn crosses(incoming: Side, limit: Price, level_price: Price) -> bool {
    match incoming {
        Side::Buy => limit >= level_price,
        Side::Sell => limit <= level_price,
    }
}
