//! Money type for representing monetary values.
//!
//! Amounts are integers in the smallest unit of the currency. Catalog prices
//! arrive as decimals and are converted once, at the boundary; every sum and
//! product after that is exact.

use crate::error::FoodError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    BRL,
    USD,
    EUR,
    GBP,
    JPY,
}

impl Currency {
    /// Get the currency code (e.g., "BRL").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::BRL => "BRL",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
        }
    }

    /// Get the currency symbol (e.g., "R$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::BRL => "R$",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::JPY => "\u{00a5}",
        }
    }

    /// Number of decimal places in the display form.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "BRL" => Some(Currency::BRL),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            "JPY" => Some(Currency::JPY),
            _ => None,
        }
    }

    fn scale(&self) -> i64 {
        10_i64.pow(self.decimal_places())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in the smallest currency unit (e.g., centavos).
    pub minor_units: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub fn new(minor_units: i64, currency: Currency) -> Self {
        Self {
            minor_units,
            currency,
        }
    }

    /// Create a Money value from a decimal amount, rounding to the nearest
    /// minor unit.
    ///
    /// ```
    /// use food_commerce::money::{Currency, Money};
    /// let price = Money::from_decimal(19.9, Currency::BRL).unwrap();
    /// assert_eq!(price.minor_units, 1990);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Result<Self, FoodError> {
        let scaled = (amount * currency.scale() as f64).round();
        if !scaled.is_finite() || scaled.abs() >= i64::MAX as f64 {
            return Err(FoodError::Overflow);
        }
        Ok(Self::new(scaled as i64, currency))
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    pub fn is_zero(&self) -> bool {
        self.minor_units == 0
    }

    pub fn is_negative(&self) -> bool {
        self.minor_units < 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.minor_units as f64 / self.currency.scale() as f64
    }

    /// Split into whole units and the fractional minor units.
    pub fn split(&self) -> (u64, u64) {
        let scale = self.currency.scale() as u64;
        let abs = self.minor_units.unsigned_abs();
        (abs / scale, abs % scale)
    }

    /// Format as a display string (e.g., "R$19.90").
    pub fn display(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}{}{}", sign, self.currency.symbol(), self.display_amount())
    }

    /// Format as a display string without symbol or sign (e.g., "19.90").
    pub fn display_amount(&self) -> String {
        let (whole, fraction) = self.split();
        let places = self.currency.decimal_places() as usize;
        if places == 0 {
            whole.to_string()
        } else {
            format!("{}.{:0places$}", whole, fraction)
        }
    }

    /// Add another Money value.
    pub fn try_add(&self, other: &Money) -> Result<Money, FoodError> {
        self.ensure_same_currency(other)?;
        self.minor_units
            .checked_add(other.minor_units)
            .map(|sum| Money::new(sum, self.currency))
            .ok_or(FoodError::Overflow)
    }

    /// Multiply by a quantity.
    pub fn try_multiply(&self, factor: i64) -> Result<Money, FoodError> {
        self.minor_units
            .checked_mul(factor)
            .map(|product| Money::new(product, self.currency))
            .ok_or(FoodError::Overflow)
    }

    /// Sum an iterator of Money values.
    pub fn try_sum<'a>(
        mut iter: impl Iterator<Item = &'a Money>,
        currency: Currency,
    ) -> Result<Money, FoodError> {
        iter.try_fold(Money::zero(currency), |acc, m| acc.try_add(m))
    }

    fn ensure_same_currency(&self, other: &Money) -> Result<(), FoodError> {
        if self.currency != other.currency {
            return Err(FoodError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: other.currency.code().to_string(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Serialize a [`Money`] as its decimal amount, the shape the order API
/// expects (`"price": 19.9`).
pub mod decimal {
    use super::Money;
    use serde::Serializer;

    pub fn serialize<S: Serializer>(money: &Money, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(money.to_decimal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_decimal() {
        let m = Money::from_decimal(19.9, Currency::BRL).unwrap();
        assert_eq!(m.minor_units, 1990);

        let m = Money::from_decimal(100.0, Currency::JPY).unwrap();
        assert_eq!(m.minor_units, 100);
    }

    #[test]
    fn test_money_from_decimal_rejects_non_finite() {
        assert!(matches!(
            Money::from_decimal(f64::NAN, Currency::BRL),
            Err(FoodError::Overflow)
        ));
        assert!(Money::from_decimal(f64::INFINITY, Currency::BRL).is_err());
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(4999, Currency::USD).display(), "$49.99");
        assert_eq!(Money::new(5, Currency::BRL).display(), "R$0.05");
        assert_eq!(Money::new(100, Currency::JPY).display(), "\u{00a5}100");
        assert_eq!(Money::new(-250, Currency::USD).display(), "-$2.50");
    }

    #[test]
    fn test_money_addition() {
        let a = Money::new(1000, Currency::BRL);
        let b = Money::new(500, Currency::BRL);
        assert_eq!(a.try_add(&b).unwrap().minor_units, 1500);
    }

    #[test]
    fn test_money_currency_mismatch() {
        let brl = Money::new(1000, Currency::BRL);
        let eur = Money::new(1000, Currency::EUR);
        assert!(matches!(
            brl.try_add(&eur),
            Err(FoodError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_money_multiply_overflow() {
        let m = Money::new(i64::MAX / 2 + 1, Currency::BRL);
        assert!(matches!(m.try_multiply(2), Err(FoodError::Overflow)));
        assert_eq!(Money::new(250, Currency::BRL).try_multiply(3).unwrap().minor_units, 750);
    }

    #[test]
    fn test_money_sum() {
        let values = [
            Money::new(100, Currency::BRL),
            Money::new(250, Currency::BRL),
        ];
        let total = Money::try_sum(values.iter(), Currency::BRL).unwrap();
        assert_eq!(total.minor_units, 350);
        assert!(Money::try_sum([].iter(), Currency::BRL).unwrap().is_zero());

        let mixed = [Money::new(100, Currency::BRL), Money::new(100, Currency::USD)];
        assert!(matches!(
            Money::try_sum(mixed.iter(), Currency::BRL),
            Err(FoodError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("BRL"), Some(Currency::BRL));
        assert_eq!(Currency::from_code("usd"), Some(Currency::USD));
        assert_eq!(Currency::from_code("INVALID"), None);
    }
}
