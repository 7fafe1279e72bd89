//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In JavaScript/floating point:                                      │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                       │
//! │                                                                     │
//! │  The demo store API hands us prices like 109.95 as floats.          │
//! │  We convert to integer cents ONCE, at the API boundary, and         │
//! │  every figure after that (subtotal, shipping, tax, discount,        │
//! │  total) is exact integer arithmetic.                                │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rounding
//! Derived figures (a percentage discount, a tax amount) can land on a
//! fraction of a cent. Those are rounded half away from zero at the
//! point they are produced. The rounding is symmetric: a negative tax
//! base (possible under an oversized fixed coupon) rounds to the same
//! magnitude as its positive mirror.
//!
//! ## Usage
//! ```rust
//! use satchel_core::money::Money;
//!
//! let price = Money::from_cents(1099); // $10.99
//! let line = price * 2;                // $21.98
//! assert_eq!(line.cents(), 2198);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::types::TaxRate;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: a fixed coupon larger than the subtotal drives
///   the tax base negative, so the type must carry negative values
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support for the UI boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ```rust
    /// use satchel_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// For negative amounts only the major unit carries the sign:
    /// `from_major_minor(-5, 50)` is -$5.50, not -$4.50.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
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
    /// ```rust
    /// use satchel_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299); // $2.99
    /// assert_eq!(unit_price.multiply_quantity(3).cents(), 897);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Takes a percentage of this amount, rounded half away from zero.
    ///
    /// Used for percentage coupons: `$100.00.percent_of(20)` = $20.00.
    ///
    /// ```rust
    /// use satchel_core::money::Money;
    ///
    /// let subtotal = Money::from_cents(10000); // $100.00
    /// assert_eq!(subtotal.percent_of(20).cents(), 2000);
    ///
    /// // $10.99 at 10% = $1.099 → $1.10
    /// assert_eq!(Money::from_cents(1099).percent_of(10).cents(), 110);
    /// ```
    pub fn percent_of(&self, pct: u32) -> Money {
        Money::from_cents(round_div(self.0 as i128 * pct as i128, 100))
    }

    /// Calculates tax on this amount, rounded half away from zero.
    ///
    /// The base may be negative (post-discount base under an oversized
    /// fixed coupon); the result keeps the sign and the magnitude a
    /// positive mirror would have.
    ///
    /// ```rust
    /// use satchel_core::money::Money;
    /// use satchel_core::types::TaxRate;
    ///
    /// let base = Money::from_cents(8000);  // $80.00
    /// let rate = TaxRate::from_bps(1000);  // 10%
    /// assert_eq!(base.tax_at(rate).cents(), 800);
    /// ```
    pub fn tax_at(&self, rate: TaxRate) -> Money {
        Money::from_cents(round_div(self.0 as i128 * rate.bps() as i128, 10_000))
    }
}

/// Integer division rounding half away from zero.
///
/// `(2000 * 825) / 10000` → 165.0 → 165; `1650.5` → 1651; `-1650.5` → -1651.
/// i128 intermediate prevents overflow on large carts.
fn round_div(numerator: i128, denominator: i128) -> i64 {
    debug_assert!(denominator > 0);
    let half = denominator / 2;
    let rounded = if numerator >= 0 {
        (numerator + half) / denominator
    } else {
        (numerator - half) / denominator
    };
    rounded as i64
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// This is for debugging and logs. The frontend formats for display
/// to handle localization properly.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

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
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_major_minor() {
        assert_eq!(Money::from_major_minor(10, 99).cents(), 1099);
        assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((a * 3).cents(), 3000);
    }

    #[test]
    fn test_percent_of() {
        // $100.00 at 20% = $20.00 exactly
        assert_eq!(Money::from_cents(10000).percent_of(20).cents(), 2000);
        // $10.99 at 10% = $1.099 → $1.10
        assert_eq!(Money::from_cents(1099).percent_of(10).cents(), 110);
        // $0.05 at 10% = $0.005 → rounds away from zero to $0.01
        assert_eq!(Money::from_cents(5).percent_of(10).cents(), 1);
    }

    #[test]
    fn test_tax_at_basic() {
        // $20.00 at 10% = $2.00
        let amount = Money::from_cents(2000);
        let rate = TaxRate::from_bps(1000);
        assert_eq!(amount.tax_at(rate).cents(), 200);
    }

    #[test]
    fn test_tax_at_with_rounding() {
        // $10.99 at 10% = $1.099 → $1.10
        let amount = Money::from_cents(1099);
        let rate = TaxRate::from_bps(1000);
        assert_eq!(amount.tax_at(rate).cents(), 110);
    }

    #[test]
    fn test_tax_at_negative_base_is_symmetric() {
        // -$20.00 at 10% = -$2.00: the magnitude must mirror the
        // positive case, not truncate toward zero
        let rate = TaxRate::from_bps(1000);
        assert_eq!(Money::from_cents(-2000).tax_at(rate).cents(), -200);
        assert_eq!(Money::from_cents(-1099).tax_at(rate).cents(), -110);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let positive = Money::from_cents(100);
        assert!(positive.is_positive());

        let negative = Money::from_cents(-100);
        assert!(negative.is_negative());
        assert_eq!(negative.abs().cents(), 100);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_cents(299);
        assert_eq!(unit_price.multiply_quantity(3).cents(), 897);
    }
}
