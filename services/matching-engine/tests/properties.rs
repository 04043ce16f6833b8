//! Property-based invariant checks
//!
//! Random order flows must preserve the book invariants after every single
//! submission: exact quantity conservation, no crossed resting prices, and
//! no empty price levels left behind.

use proptest::prelude::*;

use matching_engine::OrderBook;
use types::ids::TraderId;
use types::numeric::{Price, Quantity};
use types::order::{Order, Side};

const TRADERS: [&str; 6] = ["A", "B", "C", "D", "E", "F"];

fn arb_orders() -> impl Strategy<Value = Vec<(usize, bool, u64, i64)>> {
    prop::collection::vec((0..TRADERS.len(), any::<bool>(), 1u64..=20, 95i64..=105), 1..60)
}

/// Total quantity resting on a side, all levels.
fn side_total(levels: &[(Price, Quantity)]) -> u64 {
    levels.iter().map(|(_, qty)| qty.units()).sum()
}

/// Total quantity on the opposite side that an incoming order may consume.
fn crossable_total(book: &OrderBook, side: Side, limit: Price) -> u64 {
    let levels = match side {
        Side::Buy => book.asks().depth_snapshot(usize::MAX),
        Side::Sell => book.bids().depth_snapshot(usize::MAX),
    };
    levels
        .iter()
        .filter(|(price, _)| match side {
            Side::Buy => *price <= limit,
            Side::Sell => *price >= limit,
        })
        .map(|(_, qty)| qty.units())
        .sum()
}

proptest! {
    #[test]
    fn random_flows_preserve_book_invariants(requests in arb_orders()) {
        let mut book = OrderBook::new();

        for (trader_idx, is_buy, qty, price) in requests {
            let side = if is_buy { Side::Buy } else { Side::Sell };
            let limit = Price::new(price);

            let opposite_before = match side {
                Side::Buy => side_total(&book.asks().depth_snapshot(usize::MAX)),
                Side::Sell => side_total(&book.bids().depth_snapshot(usize::MAX)),
            };
            let own_before = match side {
                Side::Buy => side_total(&book.bids().depth_snapshot(usize::MAX)),
                Side::Sell => side_total(&book.asks().depth_snapshot(usize::MAX)),
            };
            let crossable = crossable_total(&book, side, limit);

            book.submit(Order::new(
                TraderId::new(TRADERS[trader_idx]),
                side,
                Quantity::new(qty),
                limit,
            ));

            let opposite_after = match side {
                Side::Buy => side_total(&book.asks().depth_snapshot(usize::MAX)),
                Side::Sell => side_total(&book.bids().depth_snapshot(usize::MAX)),
            };
            let own_after = match side {
                Side::Buy => side_total(&book.bids().depth_snapshot(usize::MAX)),
                Side::Sell => side_total(&book.asks().depth_snapshot(usize::MAX)),
            };

            // Conservation: the opposite side loses exactly the filled
            // amount, which is the smaller of the incoming quantity and the
            // crossable resting quantity
            let filled = opposite_before - opposite_after;
            prop_assert_eq!(filled, qty.min(crossable));

            // The residual, and nothing else, joins the submitter's side
            prop_assert_eq!(own_after, own_before + (qty - filled));

            // Non-crossing: resting bids stay strictly below resting asks
            if let (Some(bid), Some(ask)) = (book.best_bid(), book.best_ask()) {
                prop_assert!(bid < ask, "book rests crossed: bid {} >= ask {}", bid, ask);
            }

            // No empty levels persist on either side
            for (price, total) in book.bids().depth_snapshot(usize::MAX) {
                prop_assert!(!total.is_zero(), "empty bid level at {}", price);
            }
            for (price, total) in book.asks().depth_snapshot(usize::MAX) {
                prop_assert!(!total.is_zero(), "empty ask level at {}", price);
            }
        }
    }

    #[test]
    fn earliest_resting_order_fills_first(qties in prop::collection::vec(1u64..=10, 2..6)) {
        let mut book = OrderBook::new();
        for (i, qty) in qties.iter().enumerate() {
            book.submit(Order::new(
                TraderId::new(format!("T{i}")),
                Side::Sell,
                Quantity::new(*qty),
                Price::new(100),
            ));
        }

        // Take exactly the first resting order's quantity
        book.submit(Order::new(
            TraderId::new("AGG"),
            Side::Buy,
            Quantity::new(qties[0]),
            Price::new(100),
        ));

        // T0 is gone; T1 is untouched at the front
        let level = book.asks().level(Price::new(100)).unwrap();
        let front = level.iter().next().unwrap();
        prop_assert_eq!(front.trader.clone(), TraderId::new("T1"));
        prop_assert_eq!(front.quantity, Quantity::new(qties[1]));
        prop_assert_eq!(level.order_count(), qties.len() - 1);
    }
}
