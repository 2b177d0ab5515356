//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Fixed-Point Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    1.99 + 5.98 + 3.99 = 11.959999999999999  ❌                          │
//! │                                                                         │
//! │  VAT at 20% is not a whole number of pence:                            │
//! │    £11.96 × 20% = £2.392                                               │
//! │                                                                         │
//! │  OUR SOLUTION: Integer ten-thousandths of a pound                      │
//! │    119600 units × 2000 bps / 10000 = 23920 units = £2.3920 exactly     │
//! │    Only the view rounds to pence ("£2.39")                             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use basket_core::money::Money;
//!
//! let price: Money = "1.99".parse().unwrap();
//! assert_eq!(price, Money::from_pence(199));
//!
//! let doubled = price * 2;
//! assert_eq!(doubled.to_string(), "3.98");
//! ```

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};
use std::str::FromStr;

use crate::error::ValidationError;
use crate::types::TaxRate;

/// Number of stored units in one major currency unit (4 decimal places).
pub const UNITS_PER_MAJOR: i64 = 10_000;

/// Number of stored units in one minor currency unit (one penny).
pub const UNITS_PER_MINOR: i64 = 100;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in ten-thousandths of the major unit.
///
/// ## Design Decisions
/// - **i64 (signed)**: Arithmetic on differences stays closed
/// - **4 decimal places**: VAT at any whole-percent rate on a pence amount is
///   exact, so `vat == subtotal × rate` holds without tolerance
/// - **JSON as a number**: the checkout payload carries `1.99`, not `19900`
///
/// ## Where Money is Used
/// ```text
/// LineItem.unit_price ──► LineItem.line_total ──► CartStore::subtotal
///                                                        │
///                                 CartStore::vat ◄───────┤
///                                                        ▼
///                                               CartStore::total
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from raw ten-thousandth units.
    ///
    /// ```rust
    /// use basket_core::money::Money;
    ///
    /// let vat = Money::from_units(23920); // £2.392
    /// assert_eq!(vat.units(), 23920);
    /// ```
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Money(units)
    }

    /// Creates a Money value from pence.
    ///
    /// ```rust
    /// use basket_core::money::Money;
    ///
    /// let price = Money::from_pence(199); // £1.99
    /// assert_eq!(price.units(), 19900);
    /// ```
    #[inline]
    pub const fn from_pence(pence: i64) -> Self {
        Money(pence * UNITS_PER_MINOR)
    }

    /// Converts a float, rounding to the nearest unit.
    ///
    /// Returns `None` for NaN and infinities.
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let units = (value * UNITS_PER_MAJOR as f64).round();
        if units > i64::MAX as f64 || units < i64::MIN as f64 {
            return None;
        }
        Some(Money(units as i64))
    }

    /// Returns the raw ten-thousandth units.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0
    }

    /// Returns the value rounded to whole pence (half away from zero).
    ///
    /// ```rust
    /// use basket_core::money::Money;
    ///
    /// assert_eq!(Money::from_units(23920).rounded_pence(), 239);
    /// assert_eq!(Money::from_units(23950).rounded_pence(), 240);
    /// assert_eq!(Money::from_units(-23950).rounded_pence(), -240);
    /// ```
    pub const fn rounded_pence(&self) -> i64 {
        let whole = self.0 / UNITS_PER_MINOR;
        let rest = self.0 % UNITS_PER_MINOR;
        if rest >= UNITS_PER_MINOR / 2 {
            whole + 1
        } else if rest <= -UNITS_PER_MINOR / 2 {
            whole - 1
        } else {
            whole
        }
    }

    /// Returns the value as a float in major units (for display and JSON).
    #[inline]
    pub fn to_f64(&self) -> f64 {
        self.0 as f64 / UNITS_PER_MAJOR as f64
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Calculates tax at the given rate.
    ///
    /// ## Implementation
    /// Integer math: `(amount * bps + 5000) / 10000`.
    /// The +5000 rounds half up at the fourth decimal place.
    ///
    /// ```rust
    /// use basket_core::money::Money;
    /// use basket_core::types::TaxRate;
    ///
    /// let subtotal = Money::from_pence(1196); // £11.96
    /// let vat = subtotal.calculate_tax(TaxRate::from_bps(2000));
    /// assert_eq!(vat.units(), 23920); // £2.392
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        // i128 so large subtotals cannot overflow the intermediate product
        let tax = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money(tax as i64)
    }

    /// Multiplies money by a quantity.
    ///
    /// ```rust
    /// use basket_core::money::Money;
    ///
    /// let unit_price = Money::from_pence(299); // £2.99
    /// assert_eq!(unit_price.multiply_quantity(2), Money::from_pence(598));
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses a decimal amount such as `"1.99"` or `"-0.5"`.
///
/// At most four decimal places are accepted; no thousands separators, no
/// currency symbol, no exponent.
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: reason.to_string(),
        };

        let s = s.trim();
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let (whole, frac) = match digits.split_once('.') {
            Some((_, "")) => return Err(invalid("expected digits after the decimal point")),
            Some((whole, frac)) => (whole, frac),
            None => (digits, ""),
        };

        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("expected a decimal number such as 1.99"));
        }
        if !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("expected a decimal number such as 1.99"));
        }
        if frac.len() > 4 {
            return Err(invalid("at most 4 decimal places are supported"));
        }

        let whole: i64 = whole.parse().map_err(|_| invalid("amount is too large"))?;
        let frac_units = frac
            .bytes()
            .zip([1000, 100, 10, 1])
            .map(|(b, weight)| i64::from(b - b'0') * weight)
            .sum::<i64>();

        let units = whole
            .checked_mul(UNITS_PER_MAJOR)
            .and_then(|w| w.checked_add(frac_units))
            .ok_or_else(|| invalid("amount is too large"))?;

        Ok(Money(if negative { -units } else { units }))
    }
}

// =============================================================================
// Serde
// =============================================================================

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_f64())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MoneyVisitor)
    }
}

/// Accepts JSON/TOML numbers as well as decimal strings (`"1.99"`).
struct MoneyVisitor;

impl<'de> Visitor<'de> for MoneyVisitor {
    type Value = Money;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal amount as a number or string")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Money, E> {
        Money::from_f64(v).ok_or_else(|| E::custom(format!("amount out of range: {v}")))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Money, E> {
        v.checked_mul(UNITS_PER_MAJOR)
            .map(Money)
            .ok_or_else(|| E::custom(format!("amount out of range: {v}")))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Money, E> {
        let v = i64::try_from(v).map_err(|_| E::custom(format!("amount out of range: {v}")))?;
        self.visit_i64(v)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Money, E> {
        v.parse().map_err(E::custom)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows the amount rounded to pence without a currency symbol ("11.96").
///
/// The symbol comes from configuration at the view layer.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pence = self.rounded_pence();
        let sign = if pence < 0 { "-" } else { "" };
        let pence = pence.abs();
        write!(f, "{}{}.{:02}", sign, pence / 100, pence % 100)
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pence() {
        let money = Money::from_pence(1099);
        assert_eq!(money.units(), 109_900);
        assert_eq!(money.rounded_pence(), 1099);
    }

    #[test]
    fn test_parse() {
        assert_eq!("1.99".parse::<Money>().unwrap(), Money::from_pence(199));
        assert_eq!("3".parse::<Money>().unwrap(), Money::from_pence(300));
        assert_eq!("0.5".parse::<Money>().unwrap(), Money::from_pence(50));
        assert_eq!("2.392".parse::<Money>().unwrap(), Money::from_units(23920));
        assert_eq!("-5.50".parse::<Money>().unwrap(), Money::from_pence(-550));
        assert_eq!(" 1.99 ".parse::<Money>().unwrap(), Money::from_pence(199));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "abc", "1.", ".5", "1.23456", "1,99", "£1.99", "1e2", "--1"] {
            assert!(bad.parse::<Money>().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_display_rounds_to_pence() {
        assert_eq!(Money::from_pence(1196).to_string(), "11.96");
        assert_eq!(Money::from_units(23920).to_string(), "2.39");
        assert_eq!(Money::from_units(143_520).to_string(), "14.35");
        assert_eq!(Money::from_pence(500).to_string(), "5.00");
        assert_eq!(Money::from_pence(-550).to_string(), "-5.50");
        assert_eq!(Money::zero().to_string(), "0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_pence(1000);
        let b = Money::from_pence(500);

        assert_eq!((a + b).units(), 150_000);
        assert_eq!((a * 3).units(), 300_000);

        let total: Money = [a, b, b].iter().sum();
        assert_eq!(total, Money::from_pence(2000));
    }

    #[test]
    fn test_vat_is_exact() {
        let subtotal = Money::from_pence(1196);
        let vat = subtotal.calculate_tax(TaxRate::from_bps(2000));
        assert_eq!(vat, Money::from_units(23920));
        assert!((vat.to_f64() - 2.392).abs() < 1e-9);
        assert!(((subtotal + vat).to_f64() - 14.352).abs() < 1e-9);
    }

    #[test]
    fn test_tax_rounds_half_up_at_fourth_decimal() {
        // 0.0001 × 50% = 0.00005 → 0.0001
        let tax = Money::from_units(1).calculate_tax(TaxRate::from_bps(5000));
        assert_eq!(tax.units(), 1);
    }

    #[test]
    fn test_serde_as_number() {
        let json = serde_json::to_string(&Money::from_units(23920)).unwrap();
        assert_eq!(json, "2.392");

        let back: Money = serde_json::from_str("1.99").unwrap();
        assert_eq!(back, Money::from_pence(199));
        let from_str: Money = serde_json::from_str("\"2.99\"").unwrap();
        assert_eq!(from_str, Money::from_pence(299));
        let from_int: Money = serde_json::from_str("4").unwrap();
        assert_eq!(from_int, Money::from_pence(400));
    }

    #[test]
    fn test_from_f64_rejects_non_finite() {
        assert!(Money::from_f64(f64::NAN).is_none());
        assert!(Money::from_f64(f64::INFINITY).is_none());
        assert_eq!(Money::from_f64(1.99), Some(Money::from_pence(199)));
    }
}
