//! Money type for representing currency amounts
//!
//! Wraps an exact decimal so sums never pick up floating-point error.
//! The scale of the parsed value is preserved on display ("10.50" stays
//! "10.50", "100" stays "100").

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

use crate::error::{FinTrackError, FinTrackResult};

/// Represents an exact monetary amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Create a Money amount from a decimal value
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Get the underlying decimal
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Check if the amount is strictly positive
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Check if the amount is strictly negative
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Parse a money amount from a string
    ///
    /// Accepts plain decimals ("10.50", "-5", "+5", "100") and an optional
    /// leading currency symbol ("$10.50").
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        let (negative, rest) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else if let Some(stripped) = s.strip_prefix('+') {
            (false, stripped)
        } else {
            (false, s)
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);

        if rest.is_empty() || rest.starts_with(['-', '+']) {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        let value = Decimal::from_str(rest)
            .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;

        Ok(Self(if negative { -value } else { value }))
    }

    /// Add two amounts, failing instead of overflowing
    pub fn checked_add(self, other: Self) -> FinTrackResult<Self> {
        self.0
            .checked_add(other.0)
            .map(Self)
            .ok_or_else(|| overflow(self, "+", other))
    }

    /// Subtract two amounts, failing instead of overflowing
    pub fn checked_sub(self, other: Self) -> FinTrackResult<Self> {
        self.0
            .checked_sub(other.0)
            .map(Self)
            .ok_or_else(|| overflow(self, "-", other))
    }

    /// Sum a sequence of amounts, failing on overflow
    pub fn checked_sum<I: IntoIterator<Item = Self>>(amounts: I) -> FinTrackResult<Self> {
        amounts
            .into_iter()
            .try_fold(Self::zero(), |acc, m| acc.checked_add(m))
    }
}

fn overflow(a: Money, op: &str, b: Money) -> FinTrackError {
    FinTrackError::Validation(format!("Amount out of range: {} {} {}", a, op, b))
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_display_preserves_scale() {
        assert_eq!(Money::parse("10.50").unwrap().to_string(), "10.50");
        assert_eq!(Money::parse("100").unwrap().to_string(), "100");
        assert_eq!(Money::new(dec!(-5)).to_string(), "-5");
    }

    #[test]
    fn test_arithmetic_is_exact() {
        let total = Money::checked_sum((0..10).map(|_| Money::new(dec!(0.1)))).unwrap();
        assert_eq!(total, Money::new(dec!(1.0)));

        let a = Money::new(dec!(10));
        let b = Money::new(dec!(2.5));
        assert_eq!(a.checked_sub(b).unwrap(), Money::new(dec!(7.5)));
        assert_eq!(a.checked_add(b).unwrap(), Money::new(dec!(12.5)));
        assert_eq!(-a, Money::new(dec!(-10)));
    }

    #[test]
    fn test_overflow_is_an_error() {
        let max = Money::new(Decimal::MAX);
        let err = max.checked_add(Money::new(dec!(1))).unwrap_err();
        assert!(err.is_validation());

        let err = (-max).checked_sub(Money::new(dec!(1))).unwrap_err();
        assert!(err.is_validation());

        assert!(Money::checked_sum([max, max]).is_err());
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().amount(), dec!(10.50));
        assert_eq!(Money::parse("$10.50").unwrap().amount(), dec!(10.50));
        assert_eq!(Money::parse("-5").unwrap().amount(), dec!(-5));
        assert_eq!(Money::parse("+5").unwrap().amount(), dec!(5));
        assert_eq!(Money::parse("+$5").unwrap().amount(), dec!(5));
        assert_eq!(Money::parse(" 7 ").unwrap().amount(), dec!(7));
        assert!(Money::parse("").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("--5").is_err());
        assert!(Money::parse("+-5").is_err());
        assert!(Money::parse("-+5").is_err());
        assert!(Money::parse("++5").is_err());
        assert!(Money::parse("+").is_err());
    }

    #[test]
    fn test_is_checks() {
        assert!(Money::zero().is_zero());
        assert!(Money::new(dec!(0.01)).is_positive());
        assert!(Money::new(dec!(-0.01)).is_negative());
    }
}
