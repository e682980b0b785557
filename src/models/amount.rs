//! Fixed-point quantity type for donations
//!
//! Internally stores amounts in hundredths (i64) to avoid floating-point
//! precision issues. The same type carries dollars for money donations and
//! pounds for food donations; the unit lives on [`DonationType`].
//!
//! [`DonationType`]: super::DonationType

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// A donated or distributed quantity stored as hundredths of a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(i64);

impl Amount {
    /// Create an amount from hundredths
    ///
    /// # Examples
    /// ```
    /// use shelter_cli::models::Amount;
    /// let amount = Amount::from_hundredths(1050); // 10.50
    /// assert_eq!(amount.to_string(), "10.50");
    /// ```
    pub const fn from_hundredths(hundredths: i64) -> Self {
        Self(hundredths)
    }

    /// Create an amount from whole units
    pub const fn from_units(units: i64) -> Self {
        Self(units * 100)
    }

    /// Create a zero amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in hundredths
    pub const fn hundredths(&self) -> i64 {
        self.0
    }

    /// Whole units (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Fractional part (0-99)
    pub const fn fraction(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Create an amount from whole units, or `None` if it does not fit
    pub const fn checked_from_units(units: i64) -> Option<Self> {
        match units.checked_mul(100) {
            Some(hundredths) => Some(Self(hundredths)),
            None => None,
        }
    }

    /// Parse an amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "10", "10.5", ".25".
    /// Digits beyond the second decimal place are truncated.
    pub fn parse(s: &str) -> Result<Self, AmountParseError> {
        let s = s.trim();
        let invalid = || AmountParseError::InvalidFormat(s.to_string());

        let (negative, body) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, s),
        };
        let body = body.strip_prefix('$').unwrap_or(body);

        let (whole, frac) = body.split_once('.').unwrap_or((body, ""));
        if (whole.is_empty() && frac.is_empty()) || !is_digits(whole) || !is_digits(frac) {
            return Err(invalid());
        }

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };

        // Both parts are ASCII digits here, so byte slicing is safe
        let frac: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => frac[..2].parse().map_err(|_| invalid())?,
        };

        let hundredths = whole
            .checked_mul(100)
            .and_then(|w| w.checked_add(frac))
            .ok_or_else(invalid)?;

        Ok(Self(if negative { -hundredths } else { hundredths }))
    }
}

fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

impl Default for Amount {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}.{:02}", self.units().abs(), self.fraction())
        } else {
            write!(f, "{}.{:02}", self.units(), self.fraction())
        }
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Amount {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Amount {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, a| acc + a)
    }
}

impl<'a> std::iter::Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    InvalidFormat(String),
}

impl fmt::Display for AmountParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountParseError::InvalidFormat(s) => write!(f, "Invalid amount format: {}", s),
        }
    }
}

impl std::error::Error for AmountParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hundredths() {
        let a = Amount::from_hundredths(1050);
        assert_eq!(a.hundredths(), 1050);
        assert_eq!(a.units(), 10);
        assert_eq!(a.fraction(), 50);
        assert_eq!(Amount::from_units(3).hundredths(), 300);
    }

    #[test]
    fn test_display() {
        assert_eq!(Amount::from_hundredths(1050).to_string(), "10.50");
        assert_eq!(Amount::zero().to_string(), "0.00");
        assert_eq!(Amount::from_hundredths(-1050).to_string(), "-10.50");
        assert_eq!(Amount::from_hundredths(5).to_string(), "0.05");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Amount::parse("10.50").unwrap().hundredths(), 1050);
        assert_eq!(Amount::parse("$10.50").unwrap().hundredths(), 1050);
        assert_eq!(Amount::parse("-10.50").unwrap().hundredths(), -1050);
        assert_eq!(Amount::parse("10").unwrap().hundredths(), 1000);
        assert_eq!(Amount::parse("10.5").unwrap().hundredths(), 1050);
        assert_eq!(Amount::parse(".25").unwrap().hundredths(), 25);
        assert_eq!(Amount::parse(" 7 ").unwrap().hundredths(), 700);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Amount::parse("").is_err());
        assert!(Amount::parse("$").is_err());
        assert!(Amount::parse("1.2.3").is_err());
        assert!(Amount::parse("ten").is_err());
        assert!(Amount::parse(".").is_err());
        assert!(Amount::parse("1.-5").is_err());
        assert!(Amount::parse("+3").is_err());
        assert!(Amount::parse("1.+5").is_err());
        assert!(Amount::parse("--3").is_err());
    }

    #[test]
    fn test_parse_multibyte_fraction_is_error() {
        assert!(Amount::parse("1.aé").is_err());
        assert!(Amount::parse("1.é").is_err());
        assert!(Amount::parse("é").is_err());
    }

    #[test]
    fn test_parse_overflow_is_error() {
        assert!(Amount::parse("100000000000000000").is_err());
        assert!(Amount::parse("92233720368547758.08").is_err());
        assert!(Amount::parse("99999999999999999999").is_err());
        assert_eq!(
            Amount::parse("92233720368547758.07").unwrap().hundredths(),
            i64::MAX
        );
    }

    #[test]
    fn test_checked_from_units() {
        assert_eq!(Amount::checked_from_units(3), Some(Amount::from_hundredths(300)));
        assert_eq!(Amount::checked_from_units(100_000_000_000_000_000), None);
        assert_eq!(Amount::checked_from_units(i64::MIN), None);
    }

    #[test]
    fn test_arithmetic_and_sum() {
        let a = Amount::from_units(10);
        let b = Amount::from_units(4);
        assert_eq!((a - b).hundredths(), 600);
        assert_eq!((a + b).hundredths(), 1400);

        let total: Amount = [a, b].iter().sum();
        assert_eq!(total, Amount::from_units(14));
    }

    #[test]
    fn test_serialization() {
        let a = Amount::from_hundredths(1050);
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, "1050");
    }
}
