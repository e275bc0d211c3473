//! # Money Module
//!
//! Provides the `Amount` type for monetary values.
//!
//! ## Real-Valued Prices
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  WHERE ROUNDING HAPPENS                                                 │
//! │                                                                         │
//! │  Catalog price 25.99 × 2 copies × (1 - 10/100)                          │
//! │    = 46.782           ← stored and summed as-is                         │
//! │                                                                         │
//! │  Console shows:  $46.78   ← Display rounds to cents                     │
//! │                                                                         │
//! │  Reports sum the unrounded values, so the revenue total is never        │
//! │  skewed by per-line rounding. Comparisons use a small tolerance.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use folio_core::money::Amount;
//!
//! let price = Amount::new(19.99);
//! let line = price.multiply_quantity(3);
//! assert!(line.approx_eq(Amount::new(59.97)));
//! assert_eq!(line.to_string(), "$59.97");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};

use crate::types::Discount;

/// Absolute tolerance used when comparing two amounts.
pub const AMOUNT_EPSILON: f64 = 1e-6;

// =============================================================================
// Amount Type
// =============================================================================

/// A monetary value in major currency units (dollars for USD).
///
/// ## Design Decisions
/// - **f64**: catalog prices are real numbers and the net price formula
///   keeps its full precision (`46.782`, not `46.78`)
/// - **Single field tuple struct**: zero-cost abstraction over f64
/// - **Transparent serde**: serializes as a bare JSON number
///
/// ## Where Amount is Used
/// ```text
/// ProductRecord.price ──► SaleRecord.unit_price ──► SaleRecord::net_price()
///                                                          │
///                              RevenueSummary.gross/net ◄──┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
    /// Creates an amount from a value in major units.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Amount(value)
    }

    /// Returns the raw value in major units.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Returns zero.
    #[inline]
    pub const fn zero() -> Self {
        Amount(0.0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Checks if the value is strictly greater than zero.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0 > 0.0
    }

    /// Checks if the value is neither NaN nor infinite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Multiplies a unit price by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use folio_core::money::Amount;
    ///
    /// let gross = Amount::new(25.99).multiply_quantity(2);
    /// assert!(gross.approx_eq(Amount::new(51.98)));
    /// ```
    #[inline]
    pub fn multiply_quantity(&self, qty: u32) -> Self {
        Amount(self.0 * f64::from(qty))
    }

    /// Applies a percentage discount: `self × (1 - pct/100)`.
    ///
    /// ## Example
    /// ```rust
    /// use folio_core::money::Amount;
    /// use folio_core::types::Discount;
    ///
    /// let ten_off = Discount::from_percent(10.0).unwrap();
    /// let net = Amount::new(100.0).apply_discount(ten_off);
    /// assert!(net.approx_eq(Amount::new(90.0)));
    /// ```
    #[inline]
    pub fn apply_discount(&self, discount: Discount) -> Self {
        Amount(self.0 * discount.factor())
    }

    /// Compares two amounts within [`AMOUNT_EPSILON`].
    #[inline]
    pub fn approx_eq(&self, other: Amount) -> bool {
        (self.0 - other.0).abs() < AMOUNT_EPSILON
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows the amount rounded to cents, e.g. `$46.78`.
///
/// ## Note
/// For debugging and plain console output. The app's presenter applies the
/// configured currency symbol instead.
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0.0 { "-" } else { "" };
        write!(f, "{}${:.2}", sign, self.0.abs())
    }
}

impl Add for Amount {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Amount(self.0 + other.0)
    }
}

impl AddAssign for Amount {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Amount {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Amount(self.0 - other.0)
    }
}

impl Mul<u32> for Amount {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Self {
        iter.fold(Amount::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Amount::new(10.99)), "$10.99");
        assert_eq!(format!("{}", Amount::new(5.0)), "$5.00");
        assert_eq!(format!("{}", Amount::new(46.782)), "$46.78");
        assert_eq!(format!("{}", Amount::new(-5.5)), "-$5.50");
        assert_eq!(format!("{}", Amount::zero()), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Amount::new(10.0);
        let b = Amount::new(5.0);

        assert!((a + b).approx_eq(Amount::new(15.0)));
        assert!((a - b).approx_eq(Amount::new(5.0)));
        assert!((a * 3).approx_eq(Amount::new(30.0)));

        let mut total = Amount::zero();
        total += a;
        assert!(total.approx_eq(a));
    }

    #[test]
    fn test_discount_keeps_full_precision() {
        let ten_off = Discount::from_percent(10.0).unwrap();
        let net = Amount::new(25.99).multiply_quantity(2).apply_discount(ten_off);

        assert!(net.approx_eq(Amount::new(46.782)));
        assert!(!net.approx_eq(Amount::new(46.78)));
    }

    #[test]
    fn test_zero_discount_is_identity() {
        let gross = Amount::new(19.99).multiply_quantity(4);
        assert!(gross.apply_discount(Discount::none()).approx_eq(gross));
    }

    #[test]
    fn test_sum() {
        let total: Amount = [10.0, 20.0, 0.5].into_iter().map(Amount::new).sum();
        assert!(total.approx_eq(Amount::new(30.5)));

        let empty: Amount = std::iter::empty().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_checks() {
        assert!(Amount::new(0.01).is_positive());
        assert!(!Amount::zero().is_positive());
        assert!(!Amount::new(f64::NAN).is_finite());
    }

    #[test]
    fn test_serializes_as_bare_number() {
        let json = serde_json::to_string(&Amount::new(25.99)).unwrap();
        assert_eq!(json, "25.99");
    }
}
