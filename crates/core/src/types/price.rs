//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are plain decimal amounts tagged with a currency code. All
//! arithmetic goes through `rust_decimal` - floats never touch money.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// A zero price in the given currency.
    #[must_use]
    pub const fn zero(currency_code: CurrencyCode) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency_code,
        }
    }

    /// Create a price from a whole number of currency units.
    #[must_use]
    pub fn from_units(units: i64, currency_code: CurrencyCode) -> Self {
        Self {
            amount: Decimal::from(units),
            currency_code,
        }
    }

    /// Price for `quantity` units at this unit price.
    ///
    /// Saturates at the decimal range limits rather than overflowing.
    #[must_use]
    pub fn line_total(&self, quantity: u32) -> Self {
        Self {
            amount: self.amount.saturating_mul(Decimal::from(quantity)),
            currency_code: self.currency_code,
        }
    }

    /// Format for display (e.g., "$19.99").
    #[must_use]
    pub fn display(&self) -> String {
        format!("{}{:.2}", self.currency_code.symbol(), self.amount)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:.2}", self.currency_code.symbol(), self.amount)
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    /// Colombian peso - the demo catalog's currency.
    #[default]
    COP,
    USD,
    EUR,
    GBP,
}

impl CurrencyCode {
    /// Currency symbol for display.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::COP | Self::USD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
        }
    }

    /// ISO 4217 code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::COP => "COP",
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_units() {
        let price = Price::from_units(10_000, CurrencyCode::COP);
        assert_eq!(price.amount, Decimal::from(10_000));
        assert_eq!(price.currency_code, CurrencyCode::COP);
    }

    #[test]
    fn test_zero() {
        let price = Price::zero(CurrencyCode::USD);
        assert_eq!(price.amount, Decimal::ZERO);
    }

    #[test]
    fn test_line_total() {
        let price = Price::from_units(10_000, CurrencyCode::COP);
        let line = price.line_total(2);
        assert_eq!(line.amount, Decimal::from(20_000));
        assert_eq!(line.currency_code, CurrencyCode::COP);
    }

    #[test]
    fn test_line_total_zero_quantity() {
        let price = Price::from_units(500, CurrencyCode::COP);
        assert_eq!(price.line_total(0).amount, Decimal::ZERO);
    }

    #[test]
    fn test_display() {
        let price = Price::from_units(8_000, CurrencyCode::COP);
        assert_eq!(price.display(), "$8000.00");

        let price = Price::new(Decimal::new(1999, 2), CurrencyCode::EUR);
        assert_eq!(price.to_string(), "€19.99");
    }

    #[test]
    fn test_currency_codes() {
        assert_eq!(CurrencyCode::COP.code(), "COP");
        assert_eq!(CurrencyCode::GBP.symbol(), "£");
        assert_eq!(CurrencyCode::default(), CurrencyCode::COP);
    }

    #[test]
    fn test_serde_roundtrip() {
        let price = Price::from_units(15_000, CurrencyCode::COP);
        let json = serde_json::to_string(&price).unwrap();
        let parsed: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, price);
    }
}
