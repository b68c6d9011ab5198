//! Money type for representing amounts
//!
//! Internally stores amounts in cents (i64) so budget arithmetic stays exact.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use thiserror::Error;

/// A monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use expense_planner::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// assert_eq!(amount.to_string(), "$10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole currency units
    ///
    /// # Examples
    /// ```
    /// use expense_planner::models::Money;
    /// assert_eq!(Money::from_units(500).cents(), 50_000);
    /// ```
    pub const fn from_units(units: i64) -> Self {
        Self(units * 100)
    }

    /// Whole currency units, or `None` if the amount does not fit in cents
    pub const fn checked_from_units(units: i64) -> Option<Self> {
        match units.checked_mul(100) {
            Some(cents) => Some(Self(cents)),
            None => None,
        }
    }

    /// Create a Money amount from a decimal number, rounded to the nearest cent
    ///
    /// Returns `None` for NaN, infinities and values outside the cent range.
    pub fn from_decimal(value: f64) -> Option<Self> {
        let cents = (value * 100.0).round();
        // i64::MAX as f64 rounds up to 2^63, which is already out of range
        if !cents.is_finite() || cents >= i64::MAX as f64 || cents < i64::MIN as f64 {
            return None;
        }
        Some(Self(cents as i64))
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Share of `whole` this amount represents, in percent
    ///
    /// Returns 0 when `whole` is zero. Not clamped, so overspending yields
    /// values above 100.
    pub fn percent_of(&self, whole: Money) -> f64 {
        if whole.is_zero() {
            return 0.0;
        }
        (self.0 as f64 * 100.0) / whole.0 as f64
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "10", "1,250.00"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let original = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(original.to_string());

        // Sign may come before or after the symbol: "-$5.50" or "$-5.50"
        let (negative, s) = match original.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, original),
        };
        let s = s.strip_prefix('$').unwrap_or(s);
        let (negative, s) = match s.strip_prefix('-') {
            Some(_) if negative => return Err(invalid()),
            Some(stripped) => (true, stripped),
            None => (negative, s),
        };
        let s = s.replace(',', "");

        if s.is_empty() || s.starts_with(['+', '-']) {
            return Err(invalid());
        }

        let cents = match s.split_once('.') {
            Some((units, fraction)) => {
                let units: i64 = if units.is_empty() {
                    0
                } else {
                    units.parse().map_err(|_| invalid())?
                };
                if !fraction.chars().all(|c| c.is_ascii_digit()) {
                    return Err(invalid());
                }
                // Pad or truncate to two digits
                let fraction: i64 = match fraction.len() {
                    0 => 0,
                    1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
                    _ => fraction[..2].parse().map_err(|_| invalid())?,
                };
                units
                    .checked_mul(100)
                    .and_then(|cents| cents.checked_add(fraction))
                    .ok_or_else(invalid)?
            }
            None => s
                .parse::<i64>()
                .map_err(|_| invalid())?
                .checked_mul(100)
                .ok_or_else(invalid)?,
        };

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            symbol,
            self.units().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyParseError {
    #[error("Invalid money format: {0}")]
    InvalidFormat(String),
}
