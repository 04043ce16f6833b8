//! Identifier types for book participants
//!
//! Trader identifiers are opaque strings supplied by the order feed. They
//! are not unique per order: the same trader may have any number of orders,
//! on either side, at any price.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque trader/account identifier.
///
/// Ordered and hashable so it can key the report aggregation maps.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraderId(String);

impl TraderId {
    /// Create a new TraderId from a string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identifier string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if the identifier is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for TraderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TraderId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
