//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  The system this replaces stored parseFloat() results directly -       │
//! │  including NaN on malformed input.                                      │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Centavos                                         │
//! │    $22.00 = 2200 centavos (i64)                                        │
//! │    All arithmetic is exact; conversion from decimal pesos is an        │
//! │    explicit, fallible step at the wire boundary.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use masa_core::money::Money;
//!
//! // Create from centavos (preferred)
//! let unit_cost = Money::from_cents(2200); // $22.00
//!
//! // Arithmetic operations
//! let expected = unit_cost.multiply_quantity(10); // $220.00
//! assert_eq!(expected.cents(), 22000);
//!
//! // Wire boundary: fallible conversion from decimal pesos
//! assert_eq!(Money::from_pesos(15.5), Some(Money::from_cents(1550)));
//! assert_eq!(Money::from_pesos(f64::NAN), None);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in centavos (the smallest currency unit).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for cash-register differences
///   (shortages are negative)
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support; serializes as a bare centavo count
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from centavos.
    ///
    /// ## Example
    /// ```rust
    /// use masa_core::money::Money;
    ///
    /// let price = Money::from_cents(1550); // $15.50
    /// assert_eq!(price.cents(), 1550);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Converts a decimal peso amount to Money, rejecting anything that is
    /// not a finite in-range number.
    ///
    /// This is the explicit parse step at the wire boundary: NaN,
    /// infinities, and amounts beyond the i64 centavo range all return
    /// `None` instead of propagating into stored data.
    ///
    /// ## Example
    /// ```rust
    /// use masa_core::money::Money;
    ///
    /// assert_eq!(Money::from_pesos(22.0), Some(Money::from_cents(2200)));
    /// assert_eq!(Money::from_pesos(f64::NAN), None);
    /// assert_eq!(Money::from_pesos(f64::INFINITY), None);
    /// ```
    pub fn from_pesos(pesos: f64) -> Option<Self> {
        if !pesos.is_finite() {
            return None;
        }
        let cents = (pesos * 100.0).round();
        // Comparison against i64::MAX as f64 is inexact at the extremes;
        // anything that close to the limit is garbage input anyway.
        if cents < i64::MIN as f64 || cents > i64::MAX as f64 {
            return None;
        }
        Some(Money(cents as i64))
    }

    /// Returns the value in centavos.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the value as decimal pesos. For display and JSON responses
    /// only - never feed this back into arithmetic.
    #[inline]
    pub fn to_pesos(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Returns the whole-peso portion.
    #[inline]
    pub const fn pesos(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the centavo portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use masa_core::money::Money;
    ///
    /// let unit_cost = Money::from_cents(2200); // $22.00 per piece
    /// let expected = unit_cost.multiply_quantity(10);
    /// assert_eq!(expected.cents(), 22000); // $220.00
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// For debugging and logs; the web client formats for the UI.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.pesos().abs(), self.cents_part())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by i64 (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1550);
        assert_eq!(money.cents(), 1550);
        assert_eq!(money.pesos(), 15);
        assert_eq!(money.cents_part(), 50);
    }

    #[test]
    fn test_from_pesos() {
        assert_eq!(Money::from_pesos(22.0), Some(Money::from_cents(2200)));
        assert_eq!(Money::from_pesos(15.5), Some(Money::from_cents(1550)));
        assert_eq!(Money::from_pesos(0.0), Some(Money::zero()));
        // Rounds to the nearest centavo
        assert_eq!(Money::from_pesos(0.005), Some(Money::from_cents(1)));
    }

    #[test]
    fn test_from_pesos_rejects_non_finite() {
        assert_eq!(Money::from_pesos(f64::NAN), None);
        assert_eq!(Money::from_pesos(f64::INFINITY), None);
        assert_eq!(Money::from_pesos(f64::NEG_INFINITY), None);
        assert_eq!(Money::from_pesos(1e30), None);
    }

    #[test]
    fn test_to_pesos() {
        assert_eq!(Money::from_cents(22000).to_pesos(), 220.0);
        assert_eq!(Money::from_cents(1550).to_pesos(), 15.5);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(2200)), "$22.00");
        assert_eq!(format!("{}", Money::from_cents(1550)), "$15.50");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        let result: Money = a * 3;
        assert_eq!(result.cents(), 3000);
    }

    #[test]
    fn test_difference_sign() {
        // Cash surplus: actual above expected
        let diff = Money::from_cents(25000) - Money::from_cents(22000);
        assert!(diff.is_positive());

        // Shortage: actual below expected
        let diff = Money::from_cents(20000) - Money::from_cents(22000);
        assert!(diff.is_negative());
        assert_eq!(diff.abs().cents(), 2000);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_cost = Money::from_cents(2200);
        assert_eq!(unit_cost.multiply_quantity(0).cents(), 0);
        assert_eq!(unit_cost.multiply_quantity(10).cents(), 22000);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());
    }
}
