//! Value Objects for the storefront

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Monetary amount in the store currency.
///
/// Arithmetic is plain `f64`; rounding to cents happens only when the amount
/// is rendered, so chained discounts never accumulate rounding error.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(f64);

impl Money {
    pub const ZERO: Money = Money(0.0);

    pub const fn new(amount: f64) -> Self { Self(amount) }
    pub fn amount(&self) -> f64 { self.0 }
    pub fn times(&self, qty: Quantity) -> Money { Money(self.0 * f64::from(qty.value())) }
    pub fn percent_of(&self, percent: Percent) -> Money { Money(self.0 * f64::from(percent.value()) / 100.0) }
    /// Two-decimal presentation form, e.g. `"463.98"`.
    pub fn display(&self) -> String { format!("{:.2}", self.0) }
}

impl Add for Money {
    type Output = Money;
    fn add(self, rhs: Money) -> Money { Money(self.0 + rhs.0) }
}

impl Sub for Money {
    type Output = Money;
    fn sub(self, rhs: Money) -> Money { Money(self.0 - rhs.0) }
}

impl Mul<Quantity> for Money {
    type Output = Money;
    fn mul(self, rhs: Quantity) -> Money { self.times(rhs) }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money { iter.fold(Money::ZERO, |acc, m| acc + m) }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{:.2}", self.0) }
}

/// Line quantity, always at least one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Quantity(u32);

impl Quantity {
    pub const ONE: Quantity = Quantity(1);

    pub fn new(value: u32) -> Result<Self, QuantityError> {
        if value == 0 { return Err(QuantityError::Zero); }
        Ok(Self(value))
    }
    pub fn value(&self) -> u32 { self.0 }
}

impl Default for Quantity { fn default() -> Self { Self::ONE } }

impl TryFrom<u32> for Quantity {
    type Error = QuantityError;
    fn try_from(value: u32) -> Result<Self, Self::Error> { Self::new(value) }
}

impl From<Quantity> for u32 { fn from(q: Quantity) -> u32 { q.0 } }

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuantityError {
    #[error("quantity must be at least 1")]
    Zero,
}

/// Whole-number percentage in `0..=100`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percent(u8);

impl Percent {
    pub const ZERO: Percent = Percent(0);

    /// Values above 100 are clamped.
    pub const fn new(value: u8) -> Self { if value > 100 { Self(100) } else { Self(value) } }
    pub fn value(&self) -> u8 { self.0 }
    pub fn is_zero(&self) -> bool { self.0 == 0 }
}
