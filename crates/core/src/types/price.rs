//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are stored as exact decimals so that `29.99 * 3` is `89.97` and
//! never `89.97000000000001`. Snapshots carry them as plain JSON numbers.
//!
//! Arithmetic saturates at the decimal range instead of panicking; prices are
//! admin input and are not bounded anywhere else.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Sub};
use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when parsing a [`Price`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The input is not a decimal number.
    #[error("invalid price: {0}")]
    Invalid(String),
}

/// An amount of money in the store currency (US dollars).
///
/// Negative amounts are representable; the catalog does not validate prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(#[serde(with = "rust_decimal::serde::float")] Decimal);

impl Price {
    /// Zero dollars.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from a whole number of cents.
    ///
    /// ```
    /// use saffron_core::Price;
    ///
    /// assert_eq!(Price::from_cents(2999).to_string(), "$29.99");
    /// ```
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Price of `quantity` units at this unit price.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(Decimal::from(quantity)))
    }

    /// Whether the amount is below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format!("${:.2}", self.0))
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches('$');
        Decimal::from_str(trimmed)
            .map(Self)
            .map_err(|e| PriceError::Invalid(format!("{s}: {e}")))
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Price {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Price {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Self> for Price {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        assert_eq!(Price::from_cents(999).amount(), Decimal::new(999, 2));
        assert_eq!(Price::from_cents(-150).amount(), Decimal::new(-150, 2));
        assert_eq!(Price::from_cents(0), Price::ZERO);
    }

    #[test]
    fn test_times_is_exact() {
        let unit = Price::from_cents(2999);
        assert_eq!(unit.times(3), Price::from_cents(8997));
        assert_eq!(unit.times(0), Price::ZERO);
    }

    #[test]
    fn test_arithmetic_saturates() {
        let max = Price::new(Decimal::MAX);
        assert_eq!(max.times(2), max);
        assert_eq!(max + max, max);
        assert_eq!(Price::new(Decimal::MIN) - max, Price::new(Decimal::MIN));

        let mut total = max;
        total += Price::from_cents(1);
        assert_eq!(total, max);
        assert_eq!([max, max, max].iter().sum::<Price>(), max);
    }

    #[test]
    fn test_sum() {
        let prices = [Price::from_cents(5000), Price::from_cents(999)];
        let total: Price = prices.iter().sum();
        assert_eq!(total, Price::from_cents(5999));
    }

    #[test]
    fn test_display_rounds_to_cents() {
        assert_eq!(Price::from_cents(2000).to_string(), "$20.00");
        assert_eq!(Price::new(Decimal::new(10, 0)).to_string(), "$10.00");
        assert_eq!(format!("{:>8}", Price::from_cents(999)), "   $9.99");
    }

    #[test]
    fn test_parse() {
        assert_eq!("29.99".parse::<Price>().unwrap(), Price::from_cents(2999));
        assert_eq!("$9.99".parse::<Price>().unwrap(), Price::from_cents(999));
        assert!("nine".parse::<Price>().is_err());
    }

    #[test]
    fn test_is_negative() {
        assert!(Price::from_cents(-1).is_negative());
        assert!(!Price::ZERO.is_negative());
    }

    #[test]
    fn test_serializes_as_number() {
        let json = serde_json::to_string(&Price::from_cents(5999)).unwrap();
        assert_eq!(json, "59.99");

        let parsed: Price = serde_json::from_str("149.99").unwrap();
        assert_eq!(parsed, Price::from_cents(14999));
    }
}
