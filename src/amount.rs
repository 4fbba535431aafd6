//! Whole minor-currency-unit amounts.
//!
//! ACH amounts are carried as an integer number of cents. `Amount` wraps
//! `rust_decimal::Decimal` with scale 0 so totals over thousands of entries
//! never pick up floating-point drift.

use crate::error::{AchError, Result};
use crate::field::{Numeric, NumericValue};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;

/// A non-negative whole number of minor currency units (cents).
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use nacha_batch::Amount;
///
/// let amount = Amount::from_str("10000").unwrap();
/// assert_eq!(amount.to_string(), "10000");
/// assert_eq!(amount.checked_add(Amount::from_cents(50)), Some(Amount::from_cents(10050)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Amount(Decimal);

impl Amount {
    /// Zero value.
    pub const ZERO: Self = Amount(Decimal::ZERO);

    /// Creates an amount from a count of cents.
    pub fn from_cents(cents: u64) -> Self {
        Amount(Decimal::from(cents))
    }

    /// Creates an amount from a decimal count of minor units.
    ///
    /// The value must be a non-negative whole number.
    pub fn new(value: Decimal) -> Result<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(AchError::InvalidFieldValue {
                value: value.to_string(),
                reason: "amount is negative",
            });
        }
        if !value.fract().is_zero() {
            return Err(AchError::InvalidFieldValue {
                value: value.to_string(),
                reason: "amount is not a whole number of minor units",
            });
        }
        Ok(Amount(value.trunc().normalize()))
    }

    /// Adds two amounts, returning `None` on overflow.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Amount)
    }

    /// Returns the amount as a decimal count of cents.
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Returns `true` if this value is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl FromStr for Amount {
    type Err = AchError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let decimal = s.to_decimal()?;
        Amount::new(decimal)
    }
}

impl NumericValue for Amount {
    fn to_decimal(&self) -> Result<Decimal> {
        Ok(self.0)
    }
}

impl<const W: usize> From<Numeric<W>> for Amount {
    /// Numeric fields only ever hold non-negative whole numbers.
    fn from(field: Numeric<W>) -> Self {
        Amount(field.value())
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Amount::from_str(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_accepts_whole_cents() {
        assert_eq!(Amount::from_str("10000").unwrap(), Amount::from_cents(10000));
        assert_eq!(Amount::from_str("  250 ").unwrap().to_string(), "250");
        assert_eq!(Amount::from_str("0").unwrap(), Amount::ZERO);
    }

    #[test]
    fn test_from_str_rejects_fractional_cents() {
        assert!(Amount::from_str("10.5").is_err());
        assert!(Amount::from_str("ten").is_err());
    }

    #[test]
    fn test_negative_amounts_are_rejected() {
        assert!(Amount::new(Decimal::from(-5)).is_err());
        assert!(Amount::new(Decimal::ZERO).is_ok());
    }

    #[test]
    fn test_from_str_rejects_oversized_input() {
        let err = Amount::from_str(&"9".repeat(30)).unwrap_err();
        assert!(matches!(err, AchError::FieldOverflow { .. }));
    }

    #[test]
    fn test_checked_add() {
        let a = Amount::from_cents(10000);
        let b = Amount::from_cents(5000);
        assert_eq!(a.checked_add(b), Some(Amount::from_cents(15000)));

        let max = Amount(Decimal::MAX);
        assert_eq!(max.checked_add(Amount::from_cents(1)), None);
    }

    #[test]
    fn test_zero_constant() {
        assert!(Amount::ZERO.is_zero());
        assert!(Amount::default().is_zero());
    }
}
