//! Fixed-width field encoders.
//!
//! Every position of an ACH record belongs to exactly one field, and every
//! field renders to exactly its declared width:
//!
//! - [`Numeric`] right-justifies digits and zero-fills on the left. A value
//!   with more digits than the field holds is rejected with
//!   [`AchError::FieldOverflow`] when the field is built.
//! - [`Alphanumeric`] left-justifies text and space-fills on the right. Text
//!   longer than the field is truncated.
//!
//! The width is part of the type (`Numeric<10>`), so it is fixed by the
//! record layout that declares the field and never stored per value.

use crate::error::{AchError, Result};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// Input accepted by a [`Numeric`] field.
pub trait NumericValue {
    /// Converts the input into a decimal before width validation.
    fn to_decimal(&self) -> Result<Decimal>;

    /// Significant whole-number digits, for inputs that are checked against
    /// the field width before conversion.
    fn whole_digits(&self) -> Option<&str> {
        None
    }
}

macro_rules! numeric_value_for_int {
    ($($t:ty),*) => {
        $(
            impl NumericValue for $t {
                fn to_decimal(&self) -> Result<Decimal> {
                    Ok(Decimal::from(*self))
                }
            }
        )*
    };
}

numeric_value_for_int!(u8, u16, u32, u64, usize, i32, i64);

impl NumericValue for Decimal {
    fn to_decimal(&self) -> Result<Decimal> {
        Ok(*self)
    }
}

/// Most whole-number digits a `Decimal` is guaranteed to hold.
const MAX_DECIMAL_DIGITS: usize = 28;

/// Significant whole-number digits of a plain numeric string, with sign and
/// leading zeros dropped. `None` if the text is not a plain number.
fn whole_digits(text: &str) -> Option<&str> {
    let unsigned = text.trim().trim_start_matches(&['+', '-'][..]);
    let whole = unsigned.split('.').next().unwrap_or_default();
    if whole.chars().all(|c| c.is_ascii_digit()) {
        Some(whole.trim_start_matches('0'))
    } else {
        None
    }
}

impl NumericValue for &str {
    fn to_decimal(&self) -> Result<Decimal> {
        let trimmed = self.trim();
        if trimmed.is_empty() {
            return Ok(Decimal::ZERO);
        }

        let unsigned = trimmed.trim_start_matches(&['+', '-'][..]);
        let well_formed = !unsigned.is_empty()
            && unsigned.chars().all(|c| c.is_ascii_digit() || c == '.')
            && unsigned.matches('.').count() <= 1;
        if !well_formed {
            return Err(AchError::InvalidFieldValue {
                value: trimmed.to_string(),
                reason: "not a number",
            });
        }

        if let Some(digits) = whole_digits(trimmed) {
            if digits.len() > MAX_DECIMAL_DIGITS {
                return Err(AchError::FieldOverflow {
                    value: digits.to_string(),
                    width: MAX_DECIMAL_DIGITS,
                });
            }
        }

        Decimal::from_str(trimmed).map_err(|_| AchError::InvalidFieldValue {
            value: trimmed.to_string(),
            reason: "not a number",
        })
    }

    fn whole_digits(&self) -> Option<&str> {
        whole_digits(self)
    }
}

impl NumericValue for String {
    fn to_decimal(&self) -> Result<Decimal> {
        self.as_str().to_decimal()
    }

    fn whole_digits(&self) -> Option<&str> {
        whole_digits(self)
    }
}

/// A zero-padded, right-justified numeric field of `W` digits.
///
/// Only the magnitude of the value is representable; the sign is dropped.
///
/// # Examples
///
/// ```
/// use nacha_batch::Numeric;
///
/// let amount = Numeric::<10>::new(10000u64).unwrap();
/// assert_eq!(amount.to_string(), "0000010000");
///
/// assert!(Numeric::<2>::new(100u64).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Numeric<const W: usize> {
    value: Decimal,
}

impl<const W: usize> Numeric<W> {
    /// Field width in characters.
    pub const WIDTH: usize = W;

    /// Builds the field, validating that the value is a whole number whose
    /// magnitude fits in `W` digits.
    pub fn new<V: NumericValue>(value: V) -> Result<Self> {
        if let Some(digits) = value.whole_digits() {
            if digits.len() > W {
                return Err(AchError::FieldOverflow {
                    value: digits.to_string(),
                    width: W,
                });
            }
        }

        let raw = value.to_decimal()?;
        let magnitude = raw.abs();

        if !magnitude.fract().is_zero() {
            return Err(AchError::InvalidFieldValue {
                value: raw.to_string(),
                reason: "not a whole number",
            });
        }

        let value = magnitude.trunc().normalize();
        let digits = value.to_string();
        if digits.len() > W {
            return Err(AchError::FieldOverflow { value: digits, width: W });
        }

        Ok(Numeric { value })
    }

    /// Returns the field value.
    pub fn value(&self) -> Decimal {
        self.value
    }

    /// Returns the field value as an integer, if it fits in a `u64`.
    pub fn to_u64(&self) -> Option<u64> {
        self.value.to_u64()
    }
}

impl<const W: usize> NumericValue for Numeric<W> {
    fn to_decimal(&self) -> Result<Decimal> {
        Ok(self.value)
    }
}

impl<const W: usize> Default for Numeric<W> {
    fn default() -> Self {
        Numeric { value: Decimal::ZERO }
    }
}

impl<const W: usize> fmt::Display for Numeric<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0>width$}", self.value.to_string(), width = W)
    }
}

/// A space-padded, left-justified text field of `W` characters.
///
/// Text longer than `W` is truncated. Characters outside printable ASCII are
/// replaced with `?` so the rendered byte length always equals `W`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphanumeric<const W: usize> {
    text: String,
}

impl<const W: usize> Alphanumeric<W> {
    /// Field width in characters.
    pub const WIDTH: usize = W;

    /// Builds the field, padding or truncating `value` to exactly `W`.
    pub fn new(value: &str) -> Self {
        let mut text: String = value
            .chars()
            .map(|c| if c.is_ascii() && !c.is_ascii_control() { c } else { '?' })
            .take(W)
            .collect();
        let padding = W - text.len();
        text.extend(std::iter::repeat(' ').take(padding));
        Alphanumeric { text }
    }

    /// Returns the padded field text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the field text without trailing padding.
    pub fn trimmed(&self) -> &str {
        self.text.trim_end()
    }
}

impl<const W: usize> Default for Alphanumeric<W> {
    fn default() -> Self {
        Alphanumeric { text: " ".repeat(W) }
    }
}

impl<const W: usize> fmt::Display for Alphanumeric<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
