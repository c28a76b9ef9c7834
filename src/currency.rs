//! Currency normalization and two-decimal fixed-point amounts.
//!
//! Export amounts arrive as loosely formatted strings (`5`, `12.3`, `.5`,
//! ` 7 `). [`normalize`] canonicalizes them to `\d+\.\d{2}`, and [`Amount`]
//! carries the canonical form into exact `rust_decimal` arithmetic.

use rust_decimal::Decimal;
use std::fmt;
use std::ops::{Add, Neg};
use std::str::FromStr;
use thiserror::Error;

/// Reasons a raw currency string cannot be normalized.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurrencyError {
    /// Something other than digits and a decimal point remained after stripping whitespace.
    #[error("'{0}' contains characters other than digits and '.'")]
    InvalidCharacters(String),

    /// More than one decimal point.
    #[error("'{0}' contains more than one decimal point")]
    MultipleDecimalPoints(String),

    /// Padding did not produce `digits.dd`, e.g. three fractional digits.
    #[error("'{0}' does not normalize to a two-decimal amount")]
    Malformed(String),
}

/// Canonicalizes a raw currency string into `\d+\.\d{2}`.
///
/// Whitespace anywhere in the input is removed first. A single fractional
/// digit is padded with `0`, a missing fractional part becomes `.00`, and a
/// leading `.` gets a `0` in front. An empty input therefore normalizes to
/// `0.00`.
///
/// # Examples
///
/// ```
/// use payout_converter::currency::normalize;
///
/// assert_eq!(normalize("12.3").unwrap(), "12.30");
/// assert_eq!(normalize(".5").unwrap(), "0.50");
/// ```
pub fn normalize(raw: &str) -> Result<String, CurrencyError> {
    let mut value: String = raw.chars().filter(|c| !c.is_whitespace()).collect();

    if !value.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return Err(CurrencyError::InvalidCharacters(raw.to_string()));
    }
    if value.matches('.').count() > 1 {
        return Err(CurrencyError::MultipleDecimalPoints(raw.to_string()));
    }

    match value.split_once('.') {
        Some((_, fraction)) if fraction.len() == 1 => value.push('0'),
        Some((_, fraction)) if fraction.is_empty() => value.push_str("00"),
        None => value.push_str(".00"),
        Some(_) => {}
    }
    if value.starts_with('.') {
        value.insert(0, '0');
    }

    if !is_canonical(&value) {
        return Err(CurrencyError::Malformed(raw.to_string()));
    }
    Ok(value)
}

/// Returns `true` if `value` matches `^\d+\.\d{2}$`.
pub fn is_canonical(value: &str) -> bool {
    match value.split_once('.') {
        Some((whole, fraction)) => {
            !whole.is_empty()
                && whole.bytes().all(|b| b.is_ascii_digit())
                && fraction.len() == 2
                && fraction.bytes().all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}

/// Returns `true` if a normalized value is made only of zeros and dots.
pub fn is_zero_text(value: &str) -> bool {
    value.chars().all(|c| c == '0' || c == '.')
}

/// A monetary amount held at exactly 2 decimal places.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use payout_converter::Amount;
///
/// let fee = Amount::from_str("0.3").unwrap();
/// let payout = Amount::from_str("9.70").unwrap();
/// assert_eq!((fee + payout).to_string(), "10.00");
/// assert_eq!((-fee).to_string(), "-0.30");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Amount(Decimal);

impl Amount {
    /// The number of decimal places to maintain.
    pub const SCALE: u32 = 2;

    /// Zero value.
    pub const ZERO: Self = Amount(Decimal::ZERO);

    /// Creates a new `Amount` from a `Decimal`, normalizing to 2 decimal places.
    pub fn new(value: Decimal) -> Self {
        let mut normalized = value;
        normalized.rescale(Self::SCALE);
        Amount(normalized)
    }

    /// Returns `true` if this value is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl FromStr for Amount {
    type Err = CurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let canonical = normalize(s)?;
        let decimal =
            Decimal::from_str(&canonical).map_err(|_| CurrencyError::Malformed(s.to_string()))?;
        Ok(Amount::new(decimal))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Amount::new(self.0 + rhs.0)
    }
}

impl Neg for Amount {
    type Output = Self;

    // Zero stays unsigned so a zero fee renders as `0.00`, not `-0.00`.
    fn neg(self) -> Self::Output {
        if self.is_zero() {
            return Amount::ZERO;
        }
        Amount::new(-self.0)
    }
}
