//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Centavos                                         │
//! │    899_999 × 25 + 12_990 × 45 = 23_084_525 centavos                     │
//! │    = R$ 230.845,25, exact, with no rounding inside the sum             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockroom_core::money::Money;
//!
//! let price = Money::from_cents(899_999); // R$ 8.999,99
//! let line = price * 3u32;
//! assert_eq!(line.cents(), 2_699_997);
//!
//! // User input from the product form
//! let parsed = Money::from_decimal_str("8999,99").unwrap();
//! assert_eq!(parsed, price);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};
use std::str::FromStr;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in centavos (1/100 of a real).
///
/// ## Design Decisions
/// - **i64 (signed)**: totals and differences can go below zero
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Display**: fixed pt-BR convention, `R$ 1.234,56`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from centavos.
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::money::Money;
    ///
    /// let price = Money::from_cents(12_990); // R$ 129,90
    /// assert_eq!(price.cents(), 12_990);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Parses a decimal amount as typed into the price field.
    ///
    /// ## Rules
    /// - Either `.` or `,` is accepted as the decimal separator
    /// - At most two fractional digits
    /// - No thousands separators
    /// - A leading `-` is accepted; rejecting non-positive prices is the
    ///   validator's job, not the parser's
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::money::Money;
    ///
    /// assert_eq!(Money::from_decimal_str("129.9").unwrap().cents(), 12_990);
    /// assert_eq!(Money::from_decimal_str("899,99").unwrap().cents(), 89_999);
    /// assert_eq!(Money::from_decimal_str("15").unwrap().cents(), 1_500);
    /// assert!(Money::from_decimal_str("1.999").is_err());
    /// assert!(Money::from_decimal_str("abc").is_err());
    /// ```
    pub fn from_decimal_str(input: &str) -> CoreResult<Money> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(CoreError::invalid_amount(input, "amount is empty"));
        }

        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let mut parts = digits.splitn(2, ['.', ',']);
        let whole = parts.next().unwrap_or_default();
        let fraction = parts.next().unwrap_or_default();

        if whole.is_empty() && fraction.is_empty() {
            return Err(CoreError::invalid_amount(input, "amount has no digits"));
        }
        if !whole.chars().chain(fraction.chars()).all(|c| c.is_ascii_digit()) {
            return Err(CoreError::invalid_amount(
                input,
                "only digits and a single decimal separator are allowed",
            ));
        }
        if fraction.len() > 2 {
            return Err(CoreError::invalid_amount(input, "at most two decimal places"));
        }

        let too_large = || CoreError::invalid_amount(input, "amount is too large");

        let reais: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| too_large())?
        };
        let centavos: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| too_large())? * 10,
            _ => fraction.parse().map_err(|_| too_large())?,
        };

        let cents = reais
            .checked_mul(100)
            .and_then(|v| v.checked_add(centavos))
            .ok_or_else(too_large)?;

        Ok(Money(if negative { -cents } else { cents }))
    }

    /// Largest representable amount. Sums and products clamp here.
    pub const MAX: Money = Money(i64::MAX);

    /// Returns the value in centavos.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole reais portion (truncated toward zero).
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(89_999).reais(), 899);
    /// assert_eq!(Money::from_cents(-550).reais(), -5);
    /// ```
    #[inline]
    pub const fn reais(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the centavos portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
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

    /// Multiplies a unit price by a stock quantity.
    ///
    /// Saturates at the `i64` bounds instead of overflowing.
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(89_999); // R$ 899,99
    /// assert_eq!(unit_price.multiply_quantity(3).cents(), 269_997);
    /// assert_eq!(Money::MAX.multiply_quantity(2), Money::MAX);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0.saturating_mul(qty as i64))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Fixed pt-BR rendering: `R$ 8.999,99`, `-R$ 5,50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}R$ {},{:02}",
            sign,
            group_thousands(self.reais().unsigned_abs()),
            self.cents_part()
        )
    }
}

/// Inserts `.` between every group of three digits.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

/// Same rules as [`Money::from_decimal_str`].
impl FromStr for Money {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::from_decimal_str(s)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

/// Multiplication by a stock quantity.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
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
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.reais(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display_pt_br() {
        assert_eq!(Money::from_cents(899_999).to_string(), "R$ 8.999,99");
        assert_eq!(Money::from_cents(12_990).to_string(), "R$ 129,90");
        assert_eq!(Money::from_cents(500).to_string(), "R$ 5,00");
        assert_eq!(Money::from_cents(-550).to_string(), "-R$ 5,50");
        assert_eq!(Money::from_cents(0).to_string(), "R$ 0,00");
        assert_eq!(Money::from_cents(123_456_789_00).to_string(), "R$ 123.456.789,00");
    }

    #[test]
    fn test_parse_decimal_str() {
        assert_eq!(Money::from_decimal_str("8999.99").unwrap().cents(), 899_999);
        assert_eq!(Money::from_decimal_str("8999,99").unwrap().cents(), 899_999);
        assert_eq!(Money::from_decimal_str(" 129.9 ").unwrap().cents(), 12_990);
        assert_eq!(Money::from_decimal_str("42").unwrap().cents(), 4_200);
        assert_eq!(Money::from_decimal_str(".5").unwrap().cents(), 50);
        assert_eq!(Money::from_decimal_str("7.").unwrap().cents(), 700);
        assert_eq!(Money::from_decimal_str("-3,25").unwrap().cents(), -325);
    }

    #[test]
    fn test_parse_decimal_str_rejects_garbage() {
        for input in ["", "   ", ".", "-", "abc", "1.2.3", "1.999", "1 000", "R$ 10"] {
            assert!(
                Money::from_decimal_str(input).is_err(),
                "{input:?} should not parse"
            );
        }
        assert!(Money::from_decimal_str("99999999999999999999").is_err());
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a * 3u32).cents(), 3000);

        let mut c = a;
        c += b;
        assert_eq!(c.cents(), 1500);
    }

    #[test]
    fn test_sum() {
        let values = [Money::from_cents(100), Money::from_cents(250)];
        let owned: Money = values.iter().copied().sum();
        let borrowed: Money = values.iter().sum();
        assert_eq!(owned.cents(), 350);
        assert_eq!(borrowed, owned);

        let empty: Money = std::iter::empty::<Money>().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());

        assert!(Money::from_cents(1).is_positive());
        assert!(!Money::from_cents(-1).is_positive());
    }

    #[test]
    fn test_from_str_matches_decimal_parser() {
        assert_eq!("899,99".parse::<Money>().unwrap().cents(), 89_999);
        assert!(matches!(
            "12,345".parse::<Money>(),
            Err(CoreError::InvalidAmount { .. })
        ));
    }

    #[test]
    fn test_huge_stock_value_saturates() {
        let price = Money::from_cents(10_000_000_000_000);
        assert_eq!(price * 4_000_000u32, Money::MAX);
        assert_eq!(Money::MAX + Money::from_cents(1), Money::MAX);

        let total: Money = [Money::MAX, price].iter().sum();
        assert_eq!(total, Money::MAX);

        let mut running = Money::MAX;
        running += price;
        assert_eq!(running, Money::MAX);
    }

    #[test]
    fn test_exact_stock_value() {
        let total = Money::from_cents(899_999) * 25u32 + Money::from_cents(12_990) * 45u32;
        assert_eq!(total.cents(), 23_084_525);
        assert_eq!(total.to_string(), "R$ 230.845,25");
    }
}
