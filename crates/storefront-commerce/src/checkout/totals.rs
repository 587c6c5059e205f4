//! Order totals: subtotal, shipping, estimated tax and grand total.
//!
//! Amounts are kept as exact decimals. Tax on a cent-denominated subtotal
//! usually has more than two places; nothing is rounded until the value is
//! formatted or converted back into [`Money`].

use crate::checkout::ShippingMethod;
use crate::error::CommerceError;
use crate::money::{format_amount, Currency, Money};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Flat shipping charge applied when no other shipping price is given (5.99).
pub const DEFAULT_SHIPPING_CENTS: i64 = 599;

/// Default estimated tax rate (8.5%).
pub fn default_tax_rate() -> Decimal {
    Decimal::new(85, 3)
}

/// Which shipping price the order totals use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShippingPolicy {
    /// Always charge this amount, whatever method is selected.
    Flat(Money),
    /// Charge the selected method's price; the flat default when nothing is selected.
    FromSelection,
}

impl ShippingPolicy {
    /// Shipping charge for an order in `currency`.
    pub fn shipping_for(&self, selected: Option<&ShippingMethod>, currency: Currency) -> Money {
        match (self, selected) {
            (ShippingPolicy::Flat(amount), _) => *amount,
            (ShippingPolicy::FromSelection, Some(method)) => method.price,
            (ShippingPolicy::FromSelection, None) => Money::new(DEFAULT_SHIPPING_CENTS, currency),
        }
    }
}

impl Default for ShippingPolicy {
    fn default() -> Self {
        ShippingPolicy::Flat(Money::new(DEFAULT_SHIPPING_CENTS, Currency::USD))
    }
}

/// Derived order totals. Recomputed on every call; never stored on the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderTotals {
    pub currency: Currency,
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub estimated_tax: Decimal,
    pub total: Decimal,
}

impl OrderTotals {
    /// Summary rows as shown in the order summary card.
    pub fn lines(&self) -> [(&'static str, String); 4] {
        [
            ("Subtotal", format_amount(self.subtotal, self.currency)),
            ("Shipping", format_amount(self.shipping, self.currency)),
            ("Taxes (Estimated)", format_amount(self.estimated_tax, self.currency)),
            ("Total", format_amount(self.total, self.currency)),
        ]
    }

    /// Grand total rounded to the currency's smallest unit.
    pub fn total_money(&self) -> Result<Money, CommerceError> {
        Money::from_exact(self.total, self.currency).ok_or(CommerceError::Overflow)
    }

    pub fn display_total(&self) -> String {
        format_amount(self.total, self.currency)
    }
}

/// `estimated_tax = subtotal * tax_rate`, `total = subtotal + shipping + estimated_tax`.
pub fn compute_totals(
    subtotal: Money,
    shipping: Money,
    tax_rate: Decimal,
) -> Result<OrderTotals, CommerceError> {
    if subtotal.currency != shipping.currency {
        return Err(CommerceError::CurrencyMismatch {
            expected: subtotal.currency.to_string(),
            got: shipping.currency.to_string(),
        });
    }

    let sub = subtotal.to_exact();
    let ship = shipping.to_exact();
    let estimated_tax = sub.checked_mul(tax_rate).ok_or(CommerceError::Overflow)?;
    let total = sub
        .checked_add(ship)
        .and_then(|t| t.checked_add(estimated_tax))
        .ok_or(CommerceError::Overflow)?;

    Ok(OrderTotals {
        currency: subtotal.currency,
        subtotal: sub,
        shipping: ship,
        estimated_tax,
        total,
    })
}

/// Shipping policy plus tax rate: everything needed to total an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderPricing {
    pub shipping: ShippingPolicy,
    pub tax_rate: Decimal,
}

impl OrderPricing {
    pub fn new(shipping: ShippingPolicy, tax_rate: Decimal) -> Self {
        Self { shipping, tax_rate }
    }

    /// Total an order given its subtotal and the selected shipping method, if any.
    pub fn totals(
        &self,
        subtotal: Money,
        selected: Option<&ShippingMethod>,
    ) -> Result<OrderTotals, CommerceError> {
        let shipping = self.shipping.shipping_for(selected, subtotal.currency);
        let totals = compute_totals(subtotal, shipping, self.tax_rate)?;
        tracing::debug!(
            subtotal = %totals.subtotal,
            shipping = %totals.shipping,
            tax = %totals.estimated_tax,
            total = %totals.total,
            "order totals computed"
        );
        Ok(totals)
    }
}

impl Default for OrderPricing {
    fn default() -> Self {
        Self::new(ShippingPolicy::default(), default_tax_rate())
    }
}
