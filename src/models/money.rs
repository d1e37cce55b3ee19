//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. On disk amounts are plain decimal numbers (e.g. `20.0`, `-5.25`),
//! so serialization converts to and from a two-decimal float.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Largest absolute amount a single transaction may carry (one trillion)
    pub const MAX_AMOUNT: Money = Money(100_000_000_000_000);

    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use iou_ledger::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from a decimal value, rounding to the nearest cent
    ///
    /// Returns `None` when the value is not finite or exceeds `MAX_AMOUNT`.
    pub fn from_decimal(value: f64) -> Option<Self> {
        let cents = (value * 100.0).round();
        if !cents.is_finite() || cents.abs() > Self::MAX_AMOUNT.0 as f64 {
            return None;
        }
        Some(Self(cents as i64))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the amount as a decimal value
    pub fn to_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Get the whole dollars portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
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

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// Whether the amount fits within `MAX_AMOUNT` either way
    pub const fn is_within_limit(&self) -> bool {
        self.0.saturating_abs() <= Self::MAX_AMOUNT.0
    }

    /// Mean of `total` over `count` items, rounded half away from zero.
    /// Zero when `count` is zero.
    pub fn average(total: Money, count: usize) -> Self {
        if count == 0 {
            return Self::zero();
        }
        let count = count as i64;
        let half = count / 2;
        let cents = if total.0 >= 0 {
            (total.0 + half) / count
        } else {
            (total.0 - half) / count
        };
        Self(cents)
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "10", "10.5".
    /// More than two decimal places or an amount beyond `MAX_AMOUNT` is
    /// rejected.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(s.to_string());

        let (negative, rest) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, s),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);

        let (whole, fraction) = match rest.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (rest, ""),
        };

        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if !whole.chars().all(|c| c.is_ascii_digit())
            || !fraction.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }
        if fraction.len() > 2 {
            return Err(MoneyParseError::TooPrecise(s.to_string()));
        }

        let dollars: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };
        let cents: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => fraction.parse().map_err(|_| invalid())?,
        };

        let total = dollars
            .checked_mul(100)
            .and_then(|d| d.checked_add(cents))
            .ok_or_else(|| MoneyParseError::OutOfRange(s.to_string()))?;

        let amount = Self(if negative { -total } else { total });
        if !amount.is_within_limit() {
            return Err(MoneyParseError::OutOfRange(s.to_string()));
        }
        Ok(amount)
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!(
                "-{}{}.{:02}",
                symbol,
                self.dollars().abs(),
                self.cents_part()
            )
        } else {
            format!("{}{}.{:02}", symbol, self.dollars(), self.cents_part())
        }
    }

    /// Format with an explicit sign: "+$20.00", "-$5.00", "$0.00"
    pub fn format_signed(&self, symbol: &str) -> String {
        if self.is_positive() {
            format!("+{}", self.format_with_symbol(symbol))
        } else {
            self.format_with_symbol(symbol)
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_decimal())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Self::from_decimal(value).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "amount {} is not a number within {}",
                value,
                Self::MAX_AMOUNT
            ))
        })
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        let total: i128 = iter.map(|m| i128::from(m.0)).sum();
        Self(total.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    TooPrecise(String),
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::TooPrecise(s) => {
                write!(f, "At most two decimal places are allowed: {}", s)
            }
            MoneyParseError::OutOfRange(s) => {
                write!(f, "Amount exceeds {}: {}", Money::MAX_AMOUNT, s)
            }
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.dollars(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "$10.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-$10.50");
        assert_eq!(format!("{}", Money::from_cents(5)), "$0.05");
        assert_eq!(format!("{}", Money::from_cents(-5)), "-$0.05");
    }

    #[test]
    fn test_format_signed() {
        assert_eq!(Money::from_cents(2000).format_signed("$"), "+$20.00");
        assert_eq!(Money::from_cents(-500).format_signed("$"), "-$5.00");
        assert_eq!(Money::zero().format_signed("$"), "$0.00");
        assert_eq!(Money::from_cents(125).format_signed("€"), "+€1.25");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((-a).cents(), -1000);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
        assert_eq!(Money::parse(".75").unwrap().cents(), 75);
        assert_eq!(Money::parse("-0.50").unwrap().cents(), -50);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse("--5").is_err());
        assert_eq!(
            Money::parse("1.005"),
            Err(MoneyParseError::TooPrecise("1.005".into()))
        );
    }

    #[test]
    fn test_average_rounds_half_away_from_zero() {
        assert_eq!(Money::average(Money::from_cents(1000), 3).cents(), 333);
        assert_eq!(Money::average(Money::from_cents(1001), 2).cents(), 501);
        assert_eq!(Money::average(Money::from_cents(-1001), 2).cents(), -501);
        assert_eq!(Money::average(Money::from_cents(500), 0), Money::zero());
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(-300),
        ];
        let total: Money = amounts.iter().sum();
        assert_eq!(total, Money::zero());
    }

    #[test]
    fn test_serialization_is_decimal() {
        let m = Money::from_cents(-1550);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "-15.5");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }

    #[test]
    fn test_deserialize_rounds_to_cents() {
        let m: Money = serde_json::from_str("20").unwrap();
        assert_eq!(m.cents(), 2000);

        let m: Money = serde_json::from_str("0.1").unwrap();
        assert_eq!(m.cents(), 10);

        let m: Money = serde_json::from_str("3.333").unwrap();
        assert_eq!(m.cents(), 333);
    }

    #[test]
    fn test_amount_limit() {
        assert_eq!(Money::parse("1000000000000").unwrap(), Money::MAX_AMOUNT);
        assert_eq!(
            Money::parse("1000000000000.01"),
            Err(MoneyParseError::OutOfRange("1000000000000.01".into()))
        );
        assert_eq!(
            Money::parse("-99999999999999999"),
            Err(MoneyParseError::OutOfRange("-99999999999999999".into()))
        );

        assert!(serde_json::from_str::<Money>("1e300").is_err());
        assert!(serde_json::from_str::<Money>("-1000000000000.01").is_err());
        let max: Money = serde_json::from_str("1000000000000").unwrap();
        assert_eq!(max, Money::MAX_AMOUNT);
    }

    #[test]
    fn test_sum_of_large_amounts_does_not_wrap() {
        let huge = Money::from_cents(i64::MAX);
        let total: Money = [huge, Money::from_cents(500)].iter().sum();
        assert_eq!(total.cents(), i64::MAX);
        assert_eq!((huge + huge).cents(), i64::MAX);
        assert_eq!((-huge - huge).cents(), -i64::MAX - 1);

        let total: Money = [huge, Money::from_cents(-500)].iter().sum();
        assert_eq!(total.cents(), i64::MAX - 500);
    }
}
