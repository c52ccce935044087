//! # Money Module
//!
//! Provides the `Money` and `Percent` types for handling monetary values
//! safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In JavaScript/floating point:                                      │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                       │
//! │                                                                     │
//! │  A bill total that differs by a paisa between the receipt and the   │
//! │  WhatsApp message is a customer dispute waiting to happen.          │
//! │                                                                     │
//! │  OUR SOLUTION: Integer Paise                                        │
//! │    ₹1500.00 = 150000 paise (i64)                                    │
//! │    Percentages apply through integer basis-point math with ONE      │
//! │    explicit rounding step, never chained float multiplication       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use sona_core::money::{Money, Percent};
//!
//! let price = Money::from_paise(150000); // ₹1500.00
//! let discount = Percent::from_decimal(10.0, "discount_percent").unwrap();
//! assert_eq!(discount.apply_to(price).paise(), 15000); // ₹150.00
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (paise for INR).
///
/// ## Design Decisions
/// - **i64 (signed)**: intermediate subtractions may legitimately pass
///   through the sign boundary before validation catches bad input
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support for JSON serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from paise (the smallest currency unit).
    #[inline]
    pub const fn from_paise(paise: i64) -> Self {
        Money(paise)
    }

    /// Creates a Money value from whole rupees.
    #[inline]
    pub const fn from_rupees(rupees: i64) -> Self {
        Money(rupees * 100)
    }

    /// Returns the value in paise.
    #[inline]
    pub const fn paise(&self) -> i64 {
        self.0
    }

    /// Returns the rupee (major unit) portion.
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the paise (minor unit) portion, always 0-99.
    #[inline]
    pub const fn paise_part(&self) -> i64 {
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

    /// Checks if the value is negative.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use sona_core::money::Money;
    ///
    /// let unit_price = Money::from_paise(150000); // ₹1500.00
    /// assert_eq!(unit_price.multiply_quantity(2).paise(), 300000);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Plain two-decimal rendering without a currency symbol: `"2781.00"`.
    ///
    /// The thermal receipt prints bare amounts; everything else goes
    /// through [`Money::formatted`].
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.rupees().abs(), self.paise_part())
    }

    /// Rupee-symbol rendering: `"₹2781.00"` (sign before the symbol).
    pub fn formatted(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}₹{}.{:02}", sign, self.rupees().abs(), self.paise_part())
    }
}

/// Display delegates to [`Money::formatted`].
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
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

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Percent Type
// =============================================================================

/// A percentage in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000. 1000 bps = 10%, 825 bps = 8.25%.
/// Storing the rate as an integer means applying it is a single i128
/// multiply plus ONE half-up rounding - reproducible on every platform,
/// unlike chained floating-point percentage math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Percent(u32);

impl Percent {
    /// Creates a percentage from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Percent(bps)
    }

    /// Creates a percentage from a decimal value (`10.0` = 10%).
    ///
    /// Rejects NaN and anything outside the closed range [0, 100]; the
    /// `field` name lands in the error for the caller's benefit.
    pub fn from_decimal(value: f64, field: &'static str) -> CoreResult<Self> {
        if !value.is_finite() || !(0.0..=100.0).contains(&value) {
            return Err(CoreError::InvalidPercentage { field, value });
        }
        Ok(Percent((value * 100.0).round() as u32))
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Zero percent.
    #[inline]
    pub const fn zero() -> Self {
        Percent(0)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Applies the percentage to an amount with half-up rounding.
    ///
    /// ## Implementation
    /// Integer math in i128 to prevent overflow on large amounts:
    /// `(amount_paise * bps + 5000) / 10000`. The +5000 provides the
    /// half-up rounding (5000/10000 = 0.5). This is the ONLY place a
    /// percentage application rounds; totals never round between steps.
    ///
    /// ## Example
    /// ```rust
    /// use sona_core::money::{Money, Percent};
    ///
    /// let after_discount = Money::from_paise(270000); // ₹2700.00
    /// let gst = Percent::from_bps(300);               // 3%
    /// assert_eq!(gst.apply_to(after_discount).paise(), 8100); // ₹81.00
    /// ```
    pub fn apply_to(&self, amount: Money) -> Money {
        let part = (amount.paise() as i128 * self.0 as i128 + 5000) / 10000;
        Money::from_paise(part as i64)
    }

    /// Human-readable rate for labels like `Discount (10%)`.
    ///
    /// Whole percentages drop the decimals (`10`, not `10.00`); fractional
    /// rates keep them (`8.25`), matching how the rate was entered.
    pub fn label(&self) -> String {
        if self.0 % 100 == 0 {
            (self.0 / 100).to_string()
        } else {
            format!("{}", self.0 as f64 / 100.0)
        }
    }
}

impl Default for Percent {
    fn default() -> Self {
        Percent::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_paise() {
        let money = Money::from_paise(150099);
        assert_eq!(money.paise(), 150099);
        assert_eq!(money.rupees(), 1500);
        assert_eq!(money.paise_part(), 99);
    }

    #[test]
    fn test_decimal_string() {
        assert_eq!(Money::from_paise(300000).to_decimal_string(), "3000.00");
        assert_eq!(Money::from_paise(8100).to_decimal_string(), "81.00");
        assert_eq!(Money::from_paise(5).to_decimal_string(), "0.05");
        assert_eq!(Money::from_paise(-550).to_decimal_string(), "-5.50");
        assert_eq!(Money::zero().to_decimal_string(), "0.00");
    }

    #[test]
    fn test_formatted() {
        assert_eq!(Money::from_paise(278100).formatted(), "₹2781.00");
        assert_eq!(Money::from_paise(-30000).formatted(), "-₹300.00");
        assert_eq!(format!("{}", Money::from_paise(100)), "₹1.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_paise(1000);
        let b = Money::from_paise(500);

        assert_eq!((a + b).paise(), 1500);
        assert_eq!((a - b).paise(), 500);
        assert_eq!((a * 3).paise(), 3000);
        assert_eq!(a.multiply_quantity(2).paise(), 2000);
    }

    #[test]
    fn test_percent_from_decimal() {
        assert_eq!(Percent::from_decimal(10.0, "x").unwrap().bps(), 1000);
        assert_eq!(Percent::from_decimal(8.25, "x").unwrap().bps(), 825);
        assert_eq!(Percent::from_decimal(0.0, "x").unwrap().bps(), 0);
        assert_eq!(Percent::from_decimal(100.0, "x").unwrap().bps(), 10000);
    }

    #[test]
    fn test_percent_rejects_out_of_range() {
        assert!(matches!(
            Percent::from_decimal(-0.5, "discount_percent"),
            Err(CoreError::InvalidPercentage { field: "discount_percent", .. })
        ));
        assert!(Percent::from_decimal(100.01, "x").is_err());
        assert!(Percent::from_decimal(f64::NAN, "x").is_err());
        assert!(Percent::from_decimal(f64::INFINITY, "x").is_err());
    }

    #[test]
    fn test_percent_application_rounds_half_up() {
        // ₹10.00 at 8.25% = 82.5 paise → 83 paise
        let amount = Money::from_paise(1000);
        let rate = Percent::from_bps(825);
        assert_eq!(rate.apply_to(amount).paise(), 83);
    }

    #[test]
    fn test_percent_application_large_amount_no_overflow() {
        let amount = Money::from_paise(i64::MAX / 2);
        let rate = Percent::from_bps(10000); // 100%
        assert_eq!(rate.apply_to(amount).paise(), i64::MAX / 2);
    }

    #[test]
    fn test_percent_label() {
        assert_eq!(Percent::from_bps(1000).label(), "10");
        assert_eq!(Percent::from_bps(300).label(), "3");
        assert_eq!(Percent::from_bps(825).label(), "8.25");
        assert_eq!(Percent::from_bps(1250).label(), "12.5");
        assert_eq!(Percent::zero().label(), "0");
    }
}
