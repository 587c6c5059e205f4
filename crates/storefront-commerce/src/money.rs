//! Money type for representing monetary values.
//!
//! Stored amounts use a cents-based integer representation. Fractional
//! results (estimated tax, percentage rates) are carried as exact
//! [`Decimal`] values and only rounded when displayed.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    CAD,
    MXN,
    EUR,
    GBP,
    JPY,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::CAD => "CAD",
            Currency::MXN => "MXN",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::CAD => "CA$",
            Currency::MXN => "MX$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::JPY => "\u{00a5}",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "USD" => Some(Currency::USD),
            "CAD" => Some(Currency::CAD),
            "MXN" => Some(Currency::MXN),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            "JPY" => Some(Currency::JPY),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (e.g., cents for USD).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit (e.g., cents).
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a Money value from an exact decimal, rounding half away from zero
    /// to the currency's smallest unit.
    ///
    /// Returns `None` if the amount does not fit in an `i64` of cents.
    ///
    /// ```
    /// use rust_decimal::Decimal;
    /// use storefront_commerce::money::{Money, Currency};
    /// let price = Money::from_exact(Decimal::new(4999, 2), Currency::USD).unwrap();
    /// assert_eq!(price.amount_cents, 4999);
    /// ```
    pub fn from_exact(amount: Decimal, currency: Currency) -> Option<Self> {
        let scaled = amount.checked_mul(Decimal::from(10_i64.pow(currency.decimal_places())))?;
        let cents = scaled
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i64()?;
        Some(Self::new(cents, currency))
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
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

    /// Convert to an exact decimal in major units (4999 cents -> 49.99).
    pub fn to_exact(&self) -> Decimal {
        Decimal::new(self.amount_cents, self.currency.decimal_places())
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        format_amount(self.to_exact(), self.currency)
    }

    /// Format with thousands separators (e.g., "$1,499.99").
    pub fn display_grouped(&self) -> String {
        let places = self.currency.decimal_places() as usize;
        let plain = format!("{:.places$}", self.to_exact().abs());
        let (whole, fraction) = match plain.split_once('.') {
            Some((w, f)) => (w, Some(f)),
            None => (plain.as_str(), None),
        };

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, ch) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        let sign = if self.is_negative() { "-" } else { "" };
        match fraction {
            Some(f) => format!("{}{}{}.{}", sign, self.currency.symbol(), grouped, f),
            None => format!("{}{}{}", sign, self.currency.symbol(), grouped),
        }
    }

    /// Try to add another Money value, returning None if currencies don't
    /// match or the sum overflows.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        let sum = self.amount_cents.checked_add(other.amount_cents)?;
        Some(Money::new(sum, self.currency))
    }

    /// Multiply by an integer quantity, returning None on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        let product = self.amount_cents.checked_mul(factor)?;
        Some(Money::new(product, self.currency))
    }

    /// Sum an iterator of Money values, returning None on overflow or
    /// currency mismatch.
    pub fn try_sum<'a>(mut iter: impl Iterator<Item = &'a Money>, currency: Currency) -> Option<Money> {
        iter.try_fold(Money::zero(currency), |acc, m| acc.try_add(m))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Format an exact amount for display, rounded to the currency's places.
pub fn format_amount(amount: Decimal, currency: Currency) -> String {
    let places = currency.decimal_places();
    let rounded = amount.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    let places = places as usize;
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{}{:.places$}", currency.symbol(), rounded.abs())
    } else {
        format!("{}{:.places$}", currency.symbol(), rounded.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_cents() {
        let m = Money::new(4999, Currency::USD);
        assert_eq!(m.amount_cents, 4999);
        assert_eq!(m.currency, Currency::USD);
    }

    #[test]
    fn test_money_from_exact() {
        let m = Money::from_exact(Decimal::new(149999, 2), Currency::USD).unwrap();
        assert_eq!(m.amount_cents, 149999);

        let m = Money::from_exact(Decimal::from(100), Currency::JPY).unwrap();
        assert_eq!(m.amount_cents, 100); // JPY has no decimals
    }

    #[test]
    fn test_money_exact_round_trip() {
        let m = Money::new(599, Currency::USD);
        assert_eq!(m.to_exact(), Decimal::new(599, 2));

        let rounded = Money::from_exact(Decimal::new(8499, 3), Currency::USD).unwrap();
        assert_eq!(rounded.amount_cents, 850);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(4999, Currency::USD).display(), "$49.99");
        assert_eq!(Money::new(100, Currency::JPY).display(), "\u{00a5}100");
        assert_eq!(Money::new(-250, Currency::USD).display(), "-$2.50");
    }

    #[test]
    fn test_money_display_grouped() {
        assert_eq!(Money::new(149999, Currency::USD).display_grouped(), "$1,499.99");
        assert_eq!(Money::new(99, Currency::USD).display_grouped(), "$0.99");
        assert_eq!(
            Money::new(123456789, Currency::USD).display_grouped(),
            "$1,234,567.89"
        );
    }

    #[test]
    fn test_format_amount_rounds_half_away_from_zero() {
        assert_eq!(format_amount(Decimal::new(8500, 3), Currency::USD), "$8.50");
        assert_eq!(format_amount(Decimal::new(134_2983, 4), Currency::USD), "$134.30");
        assert_eq!(format_amount(Decimal::new(5, 3), Currency::USD), "$0.01");
    }

    #[test]
    fn test_money_checked_arithmetic() {
        let a = Money::new(1000, Currency::USD);
        let b = Money::new(300, Currency::USD);
        assert_eq!(a.try_add(&b).unwrap().amount_cents, 1300);
        assert_eq!(a.try_multiply(3).unwrap().amount_cents, 3000);
        assert!(Money::new(i64::MAX, Currency::USD).try_multiply(2).is_none());
    }

    #[test]
    fn test_money_currency_mismatch() {
        let usd = Money::new(1000, Currency::USD);
        let eur = Money::new(1000, Currency::EUR);
        assert!(usd.try_add(&eur).is_none());
    }

    #[test]
    fn test_money_sum() {
        let items = [Money::new(100, Currency::USD), Money::new(250, Currency::USD)];
        let total = Money::try_sum(items.iter(), Currency::USD).unwrap();
        assert_eq!(total.amount_cents, 350);
        assert!(Money::try_sum(std::iter::empty(), Currency::USD).unwrap().is_zero());

        let mixed = [Money::new(100, Currency::USD), Money::new(100, Currency::CAD)];
        assert!(Money::try_sum(mixed.iter(), Currency::USD).is_none());
        let huge = [Money::new(i64::MAX, Currency::USD), Money::new(1, Currency::USD)];
        assert!(Money::try_sum(huge.iter(), Currency::USD).is_none());
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("USD"), Some(Currency::USD));
        assert_eq!(Currency::from_code("cad"), Some(Currency::CAD));
        assert_eq!(Currency::from_code("INVALID"), None);
    }
}
