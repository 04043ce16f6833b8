//! Request line parsing
//!
//! One request per line, whitespace-separated:
//! `<id> <side> <quantity> <price>` with side `B` or `S`, quantity a
//! positive integer, price an integer.

use types::ids::TraderId;
use types::numeric::{Price, Quantity};
use types::order::{Order, Side};

use crate::error::FeedError;

/// Parse one feed line into an order request.
pub fn parse_request(line: &str) -> Result<Order, FeedError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [id, side, quantity, price] = fields.as_slice() else {
        return Err(FeedError::Malformed(line.to_string()));
    };

    let side = match *side {
        "B" => Side::Buy,
        "S" => Side::Sell,
        other => return Err(FeedError::UnknownSide(other.to_string())),
    };

    let quantity: Quantity = quantity.parse().map_err(|source| FeedError::InvalidQuantity {
        value: quantity.to_string(),
        source,
    })?;

    let price: Price = price.parse().map_err(|source| FeedError::InvalidPrice {
        value: price.to_string(),
        source,
    })?;

    Ok(Order::try_new(TraderId::new(*id), side, quantity, price)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_buy_request() {
        let order = parse_request("T1 B 5 30").unwrap();
        assert_eq!(order.trader, TraderId::new("T1"));
        assert_eq!(order.side, Side::Buy);
        assert_eq!(order.quantity, Quantity::new(5));
        assert_eq!(order.price, Price::new(30));
    }

    #[test]
    fn test_parse_sell_request() {
        let order = parse_request("T2 S 40 7").unwrap();
        assert_eq!(order.side, Side::Sell);
    }

    #[test]
    fn test_parse_tolerates_extra_whitespace() {
        let order = parse_request("  T1   B  5   30  ").unwrap();
        assert_eq!(order.trader, TraderId::new("T1"));
    }

    #[test]
    fn test_parse_negative_price_is_valid() {
        let order = parse_request("T1 B 5 -3").unwrap();
        assert_eq!(order.price, Price::new(-3));
    }

    #[test]
    fn test_parse_rejects_wrong_field_count() {
        assert!(matches!(
            parse_request("T1 B 5"),
            Err(FeedError::Malformed(_))
        ));
        assert!(matches!(
            parse_request("T1 B 5 30 extra"),
            Err(FeedError::Malformed(_))
        ));
    }

    #[test]
    fn test_parse_rejects_unknown_side() {
        assert!(matches!(
            parse_request("T1 X 5 30"),
            Err(FeedError::UnknownSide(_))
        ));
    }

    #[test]
    fn test_parse_rejects_non_numeric_quantity() {
        assert!(matches!(
            parse_request("T1 B five 30"),
            Err(FeedError::InvalidQuantity { .. })
        ));
        assert!(matches!(
            parse_request("T1 B -5 30"),
            Err(FeedError::InvalidQuantity { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_non_numeric_price() {
        assert!(matches!(
            parse_request("T1 B 5 ten"),
            Err(FeedError::InvalidPrice { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_zero_quantity() {
        assert!(matches!(
            parse_request("T1 B 0 30"),
            Err(FeedError::Rejected(_))
        ));
    }
}
