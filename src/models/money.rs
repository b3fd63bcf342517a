//! Money type for transaction values
//!
//! Amounts are exact decimals backed by [`rust_decimal::Decimal`]. Nothing is
//! rounded on the way in, and sums are checked so that overflow surfaces as
//! `None` instead of a panic or a wrapped value.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest exponent shift tried before giving up on a scientific value
const MAX_EXPONENT: u32 = 64;

/// A monetary amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use cashbook::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.to_string(), "10.50");
    /// ```
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Wrap an exact decimal
    pub const fn from_decimal(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// The underlying decimal
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Check if the amount is below zero. `-0` counts as zero.
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Add, or `None` if the result does not fit
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Subtract, or `None` if the result does not fit
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Parse a decimal amount such as `"5000"`, `"0.125"`, `"-3.75"`, `"+1"`,
    /// `".5"` or `"1e3"`
    ///
    /// Every digit is kept. Values whose digits or exponent do not fit in a
    /// 96-bit decimal are reported as out of range.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(s.to_string());
        let out_of_range = || MoneyParseError::OutOfRange(s.to_string());

        let (mantissa, exponent) = match s.split_once(|c| c == 'e' || c == 'E') {
            Some((mantissa, exponent)) => (mantissa, Some(exponent)),
            None => (s, None),
        };

        let (sign, digits) = match mantissa.as_bytes().first() {
            Some(b'-') => ("-", &mantissa[1..]),
            Some(b'+') => ("", &mantissa[1..]),
            _ => ("", mantissa),
        };
        let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));

        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if !is_digits(whole) || !is_digits(fraction) {
            return Err(invalid());
        }

        let whole = if whole.is_empty() { "0" } else { whole };
        let literal = if fraction.is_empty() {
            format!("{}{}", sign, whole)
        } else {
            format!("{}{}.{}", sign, whole, fraction)
        };
        let mut value = Decimal::from_str_exact(&literal).map_err(|_| out_of_range())?;

        let Some(exponent) = exponent else {
            return Ok(Self(value));
        };

        let (negative_exp, exp_digits) = match exponent.as_bytes().first() {
            Some(b'-') => (true, &exponent[1..]),
            Some(b'+') => (false, &exponent[1..]),
            _ => (false, exponent),
        };
        if exp_digits.is_empty() || !is_digits(exp_digits) {
            return Err(invalid());
        }
        if value.is_zero() {
            return Ok(Self(Decimal::ZERO));
        }

        let shift: u32 = exp_digits.parse().map_err(|_| out_of_range())?;
        if shift > MAX_EXPONENT {
            return Err(out_of_range());
        }

        if negative_exp {
            value
                .set_scale(value.scale() + shift)
                .map_err(|_| out_of_range())?;
        } else {
            let absorbed = shift.min(value.scale());
            value
                .set_scale(value.scale() - absorbed)
                .map_err(|_| out_of_range())?;
            for _ in absorbed..shift {
                value = value.checked_mul(Decimal::TEN).ok_or_else(out_of_range)?;
            }
        }

        Ok(Self(value))
    }
}

fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    /// At least two fraction digits, more only when the value carries them
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut shown = self.0.normalize();
        if shown.scale() < 2 {
            shown.rescale(2);
        }
        f.pad(&shown.to_string())
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::OutOfRange(s) => write!(f, "Amount out of range: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
