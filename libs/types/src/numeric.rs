//! Exact integer types for prices and quantities
//!
//! Limit prices are integer ticks and quantities are whole units, so all
//! bookkeeping is exact. A fill that would drive a quantity negative is a
//! programming error and panics rather than corrupting book invariants.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::num::ParseIntError;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;

/// Integer limit price, in ticks.
///
/// Immutable once an order is created. The ordering of Price drives the
/// best-first iteration of both half-books.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    /// Create a price from a tick count
    pub const fn new(ticks: i64) -> Self {
        Self(ticks)
    }

    /// Get the tick count
    pub const fn ticks(self) -> i64 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Price {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(Self)
    }
}

/// Unfilled order quantity, in whole units.
///
/// Mutated downward as fills occur; non-negative by construction. An order
/// whose quantity reaches zero is removed from its queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Quantity(u64);

impl Quantity {
    /// Create a quantity from a unit count
    pub const fn new(units: u64) -> Self {
        Self(units)
    }

    /// The zero quantity
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the unit count
    pub const fn units(self) -> u64 {
        self.0
    }

    /// Check whether the quantity is zero
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// The smaller of two quantities
    pub fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }
}

impl Add for Quantity {
    type Output = Quantity;

    fn add(self, rhs: Quantity) -> Quantity {
        Quantity(self.0 + rhs.0)
    }
}

impl AddAssign for Quantity {
    fn add_assign(&mut self, rhs: Quantity) {
        self.0 += rhs.0;
    }
}

impl Sub for Quantity {
    type Output = Quantity;

    /// # Panics
    /// Panics if `rhs` exceeds `self`; a negative quantity cannot exist.
    fn sub(self, rhs: Quantity) -> Quantity {
        assert!(rhs.0 <= self.0, "quantity underflow: {} - {}", self.0, rhs.0);
        Quantity(self.0 - rhs.0)
    }
}

impl SubAssign for Quantity {
    fn sub_assign(&mut self, rhs: Quantity) {
        *self = *self - rhs;
    }
}

impl Sum for Quantity {
    fn sum<I: Iterator<Item = Quantity>>(iter: I) -> Quantity {
        iter.fold(Quantity::zero(), Add::add)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Quantity {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(Self)
    }
}
