//! Feed error taxonomy

use thiserror::Error;

/// Errors raised while turning a feed line into an order request.
///
/// Any of these terminates the feed; the book never sees a malformed
/// request.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("malformed request line: {0:?}")]
    Malformed(String),

    #[error("unknown side token: {0:?}")]
    UnknownSide(String),

    #[error("invalid quantity {value:?}: {source}")]
    InvalidQuantity {
        value: String,
        source: std::num::ParseIntError,
    },

    #[error("invalid price {value:?}: {source}")]
    InvalidPrice {
        value: String,
        source: std::num::ParseIntError,
    },

    #[error("rejected order: {0}")]
    Rejected(#[from] types::errors::OrderError),
}
