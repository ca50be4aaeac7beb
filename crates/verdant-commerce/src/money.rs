//! Money type for representing prices and totals.
//!
//! Amounts are integers in the currency's minor unit, so cart totals are
//! exact sums of line subtotals and only rounding happens at display time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::CAD => "CAD",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::CAD => "CA$",
        }
    }

    /// Number of minor units per major unit.
    pub fn minor_units(&self) -> i64 {
        100
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            "CAD" => Some(Currency::CAD),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in the smallest currency unit (cents).
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub const fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Shorthand for a USD amount in cents.
    pub const fn usd(amount_cents: i64) -> Self {
        Self::new(amount_cents, Currency::USD)
    }

    /// Create a Money value from a decimal amount, rounding to the nearest cent.
    ///
    /// Returns None for NaN, infinities, and amounts whose cent value does
    /// not fit in an `i64`.
    ///
    /// ```
    /// use verdant_commerce::money::{Currency, Money};
    /// let price = Money::from_decimal(45.0, Currency::USD).unwrap();
    /// assert_eq!(price.amount_cents, 4500);
    /// assert!(Money::from_decimal(f64::NAN, Currency::USD).is_none());
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Option<Self> {
        let cents = (amount * currency.minor_units() as f64).round();
        // i64::MAX as f64 rounds up to 2^63, which is already out of range.
        if !cents.is_finite() || cents < i64::MIN as f64 || cents >= i64::MAX as f64 {
            return None;
        }
        Some(Self::new(cents as i64, currency))
    }

    /// Create a zero amount in the given currency.
    pub const fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Format as a display string (e.g., "$75.00").
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.display_amount())
    }

    /// Format as a display string without symbol (e.g., "75.00").
    pub fn display_amount(&self) -> String {
        let units = self.currency.minor_units().unsigned_abs();
        let sign = if self.is_negative() { "-" } else { "" };
        let abs = self.amount_cents.unsigned_abs();
        format!("{}{}.{:02}", sign, abs / units, abs % units)
    }

    /// Add another Money value, returning None on currency mismatch or overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount_cents
            .checked_add(other.amount_cents)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Subtract another Money value, returning None on currency mismatch or overflow.
    pub fn try_subtract(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount_cents
            .checked_sub(other.amount_cents)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Multiply by a quantity, returning None on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        self.amount_cents
            .checked_mul(factor)
            .map(|amount| Money::new(amount, self.currency))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_decimal() {
        let m = Money::from_decimal(49.99, Currency::USD).unwrap();
        assert_eq!(m.amount_cents, 4999);

        let m = Money::from_decimal(0.1 + 0.2, Currency::USD).unwrap();
        assert_eq!(m.amount_cents, 30);
    }

    #[test]
    fn test_money_from_decimal_rejects_unrepresentable() {
        assert!(Money::from_decimal(f64::NAN, Currency::USD).is_none());
        assert!(Money::from_decimal(f64::INFINITY, Currency::USD).is_none());
        assert!(Money::from_decimal(f64::NEG_INFINITY, Currency::USD).is_none());
        assert!(Money::from_decimal(1e30, Currency::USD).is_none());
        assert!(Money::from_decimal(-1e30, Currency::USD).is_none());
        assert_eq!(
            Money::from_decimal(1e15, Currency::USD),
            Some(Money::usd(100_000_000_000_000_000))
        );
    }

    #[test]
    fn test_money_usable_as_map_key() {
        use std::collections::HashSet;

        let prices: HashSet<Money> = [Money::usd(4500), Money::usd(4500), Money::usd(3000)]
            .into_iter()
            .collect();
        assert_eq!(prices.len(), 2);
        assert_eq!(Money::default(), Money::zero(Currency::USD));
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::usd(7500).display(), "$75.00");
        assert_eq!(Money::usd(5).display(), "$0.05");
        assert_eq!(Money::new(1999, Currency::GBP).display(), "\u{00a3}19.99");
        assert_eq!(Money::usd(-250).display_amount(), "-2.50");
    }

    #[test]
    fn test_money_addition() {
        let sum = Money::usd(4500).try_add(&Money::usd(3000)).unwrap();
        assert_eq!(sum, Money::usd(7500));
    }

    #[test]
    fn test_money_currency_mismatch() {
        let usd = Money::usd(1000);
        let eur = Money::new(1000, Currency::EUR);
        assert!(usd.try_add(&eur).is_none());
        assert!(usd.try_subtract(&eur).is_none());
    }

    #[test]
    fn test_money_multiply_overflow() {
        assert_eq!(Money::usd(2500).try_multiply(2), Some(Money::usd(5000)));
        assert!(Money::usd(i64::MAX).try_multiply(2).is_none());
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("USD"), Some(Currency::USD));
        assert_eq!(Currency::from_code("cad"), Some(Currency::CAD));
        assert_eq!(Currency::from_code("JPY"), None);
    }
}
