//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! All amounts in Darzi are a single implied currency (Bangladeshi taka).
//! Internally every value is an integer count of paisa (hundredths of a
//! taka); the REST API exchanges plain decimal numbers, so `Money` carries
//! custom serde that converts at the wire boundary.
//!
//! ## Usage
//! ```rust
//! use darzi_core::money::Money;
//!
//! // Create from paisa (preferred)
//! let price = Money::from_paisa(109900); // ৳1099.00
//!
//! // Arithmetic operations
//! let doubled = price * 2;
//! let total = price + Money::from_paisa(50000);
//!
//! // Two-decimal fixed-point display
//! assert_eq!(price.to_string(), "৳1099.00");
//! ```

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in paisa (the smallest currency unit).
///
/// - **i64 (signed)**: remaining balances can go negative on overpayment,
///   which is a displayable state, not an error
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Custom serde**: the backend API sends/expects decimal numbers
///   (`1300.0`), converted to and from paisa at the boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, TS)]
#[ts(export, type = "number")]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from paisa (the smallest currency unit).
    ///
    /// ```rust
    /// use darzi_core::money::Money;
    ///
    /// let price = Money::from_paisa(109900); // ৳1099.00
    /// assert_eq!(price.paisa(), 109900);
    /// ```
    #[inline]
    pub const fn from_paisa(paisa: i64) -> Self {
        Money(paisa)
    }

    /// Creates a Money value from major and minor units (taka and paisa).
    ///
    /// For negative amounts, only the major unit should be negative:
    /// `from_major_minor(-5, 50)` is -৳5.50, not -৳4.50.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Converts a decimal amount (the API wire form) to Money.
    ///
    /// Rounds to the nearest paisa (ties away from zero). The backend
    /// only ever sends two-decimal amounts, so in practice this is
    /// exact.
    ///
    /// ```rust
    /// use darzi_core::money::Money;
    ///
    /// assert_eq!(Money::from_decimal(1300.0).paisa(), 130000);
    /// assert_eq!(Money::from_decimal(10.99).paisa(), 1099);
    /// ```
    #[inline]
    pub fn from_decimal(amount: f64) -> Self {
        Money((amount * 100.0).round() as i64)
    }

    /// Returns the value as a decimal amount (the API wire form).
    #[inline]
    pub fn to_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Returns the value in paisa (smallest currency unit).
    #[inline]
    pub const fn paisa(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (taka) portion.
    #[inline]
    pub const fn taka(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (paisa) portion (always 0-99).
    #[inline]
    pub const fn paisa_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
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
    /// use darzi_core::money::Money;
    ///
    /// let unit_price = Money::from_paisa(50000); // ৳500.00
    /// let line_total = unit_price.multiply_quantity(2);
    /// assert_eq!(line_total.paisa(), 100000); // ৳1000.00
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Serde (wire format: decimal number)
// =============================================================================

/// Serializes as a decimal amount, matching what the backend stores.
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_decimal())
    }
}

/// Deserializes from a decimal JSON number, rounding to whole paisa.
impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        if !amount.is_finite() {
            return Err(de::Error::custom("amount must be a finite number"));
        }
        Ok(Money::from_decimal(amount))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Two-decimal fixed-point display with the taka sign.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}৳{}.{:02}", sign, self.taka().abs(), self.paisa_part())
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

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summing an iterator of Money values (for payment and order rollups).
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_paisa() {
        let money = Money::from_paisa(109900);
        assert_eq!(money.paisa(), 109900);
        assert_eq!(money.taka(), 1099);
        assert_eq!(money.paisa_part(), 0);
    }

    #[test]
    fn test_from_major_minor() {
        let money = Money::from_major_minor(10, 99);
        assert_eq!(money.paisa(), 1099);

        let negative = Money::from_major_minor(-5, 50);
        assert_eq!(negative.paisa(), -550);
    }

    #[test]
    fn test_from_decimal_rounding() {
        assert_eq!(Money::from_decimal(1300.0).paisa(), 130000);
        assert_eq!(Money::from_decimal(10.99).paisa(), 1099);
        assert_eq!(Money::from_decimal(10.006).paisa(), 1001);
        assert_eq!(Money::from_decimal(-10.006).paisa(), -1001);
        assert_eq!(Money::from_decimal(500.5).paisa(), 50050);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_paisa(1099)), "৳10.99");
        assert_eq!(format!("{}", Money::from_paisa(500)), "৳5.00");
        assert_eq!(format!("{}", Money::from_paisa(-550)), "-৳5.50");
        assert_eq!(format!("{}", Money::from_paisa(0)), "৳0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_paisa(1000);
        let b = Money::from_paisa(500);

        assert_eq!((a + b).paisa(), 1500);
        assert_eq!((a - b).paisa(), 500);
        assert_eq!((a * 3).paisa(), 3000);
    }

    #[test]
    fn test_sum() {
        let payments = [
            Money::from_paisa(30000),
            Money::from_paisa(50000),
        ];
        let total: Money = payments.iter().copied().sum();
        assert_eq!(total.paisa(), 80000);
    }

    #[test]
    fn test_serde_round_trip() {
        let money = Money::from_major_minor(1300, 50);
        let json = serde_json::to_string(&money).unwrap();
        assert_eq!(json, "1300.5");

        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back, money);

        // Integer wire values are accepted too
        let from_int: Money = serde_json::from_str("800").unwrap();
        assert_eq!(from_int.paisa(), 80000);
    }

    #[test]
    fn test_serde_rejects_non_finite() {
        assert!(serde_json::from_str::<Money>("\"NaN\"").is_err());
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        // Negative remaining balance = overpayment, still a valid value
        let overpaid = Money::from_paisa(-100);
        assert!(overpaid.is_negative());
        assert_eq!(overpaid.abs().paisa(), 100);
    }
}
