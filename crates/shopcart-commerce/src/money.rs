//! Money type for representing monetary values.
//!
//! Amounts are exact decimals so that `price * qty` sums carry no binary
//! floating-point error. Persisted as plain JSON numbers; rounding to cents
//! happens only when a total is reported.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Decimal places used when reporting an amount.
pub const REPORTING_SCALE: u32 = 2;

/// A monetary amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(#[serde(with = "rust_decimal::serde::float")] Decimal);

impl Money {
    /// Create a Money value from a decimal amount.
    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a Money value from an integer number of cents.
    ///
    /// ```
    /// use shopcart_commerce::Money;
    /// let price = Money::from_cents(4999);
    /// assert_eq!(price.to_string(), "49.99");
    /// ```
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, REPORTING_SCALE))
    }

    /// Create a zero amount.
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// The underlying decimal.
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Try to add another amount, returning None on overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Try to multiply by a quantity, returning None on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        self.0.checked_mul(Decimal::from(factor)).map(Money)
    }

    /// Sum an iterator of amounts, returning None on overflow.
    pub fn try_sum<'a>(mut iter: impl Iterator<Item = &'a Money>) -> Option<Money> {
        iter.try_fold(Money::zero(), |acc, m| acc.try_add(m))
    }

    /// Round to [`REPORTING_SCALE`] places, halves away from zero.
    pub fn rounded(&self) -> Money {
        Money(
            self.0
                .round_dp_with_strategy(REPORTING_SCALE, RoundingStrategy::MidpointAwayFromZero),
        )
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s.trim()).map(Money)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.rounded().0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_cents() {
        let m = Money::from_cents(4999);
        assert_eq!(m.amount(), Decimal::new(4999, 2));
    }

    #[test]
    fn test_money_display_pads_to_cents() {
        assert_eq!(Money::from_cents(150).to_string(), "1.50");
        assert_eq!(Money::new(Decimal::from(7)).to_string(), "7.00");
    }

    #[test]
    fn test_money_multiply() {
        let m = Money::from_cents(150);
        assert_eq!(m.try_multiply(3), Some(Money::from_cents(450)));
    }

    #[test]
    fn test_money_multiply_overflow() {
        let m = Money::new(Decimal::MAX);
        assert_eq!(m.try_multiply(2), None);
    }

    #[test]
    fn test_money_sum() {
        let amounts = [Money::from_cents(2000), Money::from_cents(550)];
        assert_eq!(Money::try_sum(amounts.iter()), Some(Money::from_cents(2550)));
    }

    #[test]
    fn test_money_sum_empty_is_zero() {
        let amounts: [Money; 0] = [];
        assert_eq!(Money::try_sum(amounts.iter()), Some(Money::zero()));
    }

    #[test]
    fn test_rounding_only_when_asked() {
        // 0.333 * 3 stays exact until reported
        let m = Money::new(Decimal::new(333, 3)).try_multiply(3).unwrap();
        assert_eq!(m.amount(), Decimal::new(999, 3));
        assert_eq!(m.rounded(), Money::from_cents(100));
    }

    #[test]
    fn test_rounding_halves_away_from_zero() {
        assert_eq!(Money::new(Decimal::new(125, 3)).rounded(), Money::from_cents(13));
    }

    #[test]
    fn test_negative_detection() {
        assert!(Money::from_cents(-1).is_negative());
        assert!(!Money::zero().is_negative());
        assert!(!Money::from_cents(1).is_negative());
    }

    #[test]
    fn test_money_parse() {
        let m: Money = "5.50".parse().unwrap();
        assert_eq!(m, Money::from_cents(550));
        assert!("five".parse::<Money>().is_err());
    }

    #[test]
    fn test_money_json_number() {
        let json = serde_json::to_string(&Money::from_cents(150)).unwrap();
        assert_eq!(json, "1.5");

        let m: Money = serde_json::from_str("10.0").unwrap();
        assert_eq!(m, Money::from_cents(1000));

        let m: Money = serde_json::from_str("3").unwrap();
        assert_eq!(m, Money::from_cents(300));
    }
}
